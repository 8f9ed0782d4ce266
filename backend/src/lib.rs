//! Catalog API repository layer used by the server side of the frontend.

pub mod config;
pub mod http_utils;
pub mod api;
