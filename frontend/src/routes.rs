use dioxus::prelude::*;

use common::search_query::DatasetSearchQuery;

use crate::components::navbar::Navbar;
use crate::pages::dataset_search_page::DatasetSearchPage;
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    // the whole query string is the search state
    #[route("/datasets?:..query")]
    DatasetSearchPage { query: DatasetSearchQuery },

}

impl Route {
    pub fn dataset_search(query: DatasetSearchQuery) -> Self {
        Self::DatasetSearchPage { query }
    }
}
