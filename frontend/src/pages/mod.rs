pub mod home_page;
pub mod dataset_search_page;
