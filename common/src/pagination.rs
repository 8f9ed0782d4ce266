//! Paginated backend results and page requests.

use serde::{Deserialize, Serialize};

use crate::search_const::{MAX_PAGE_NUMBER, MAX_PAGE_SIZE, PAGE_SIZE};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    NumberOutOfRange(u64),
    SizeOutOfRange(u64),
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumberOutOfRange(n) => write!(f, "Page number {} is outside 1..={}", n, MAX_PAGE_NUMBER),
            Self::SizeOutOfRange(n) => write!(f, "Page size {} is outside 1..={}", n, MAX_PAGE_SIZE),
        }
    }
}

impl std::error::Error for PageError {}

/// Requested page of a backend listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    number: u64,
    size: u64,
}

impl Page {
    pub fn new(number: u64, size: u64) -> Result<Self, PageError> {
        if !(1..=MAX_PAGE_NUMBER).contains(&number) {
            return Err(PageError::NumberOutOfRange(number));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(PageError::SizeOutOfRange(size));
        }
        Ok(Self { number, size })
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { number: 1, size: PAGE_SIZE }
    }
}
