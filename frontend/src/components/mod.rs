pub mod navbar;
pub mod error_panel;
pub mod loading_section;
pub mod search_components;
