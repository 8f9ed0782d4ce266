//! Catalog endpoints used by the dataset search page.

mod dataset_filters;
pub use dataset_filters::get_dataset_filters_info;

mod tags;
pub use tags::get_tags;

mod datasets;
pub use datasets::search_datasets;

mod search_page;
pub use search_page::load_dataset_search;
