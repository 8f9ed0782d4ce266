//! Catalog API route wrappers and module exports.

pub mod catalog;
