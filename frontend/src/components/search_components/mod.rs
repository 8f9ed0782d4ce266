pub mod search_input_top_bar;
pub mod filter_section;
pub mod filter_select;
pub mod pagination_strip;
pub mod dataset_result_card;
