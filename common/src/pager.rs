//! Bounded page-number window for the pagination strip.
//!
//! ```text
//!                   ┌ current_page
//! |<  <  1 ... 4 5 6 7 8 ... 13  >  >|
//!  left_sibling ┘       └ right_sibling
//! ```

use std::ops::RangeInclusive;

use crate::query_string::{QueryParam, QueryParams};
use crate::search_const::{DEFAULT_NUM_SIBLINGS, MAX_PAGE_NUMBER};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerOptions {
    pub current_page: u64,
    pub total_pages: u64,
    pub num_siblings: u64,
}

impl PagerOptions {
    pub fn new(current_page: u64, total_pages: u64) -> Self {
        Self { current_page, total_pages, num_siblings: DEFAULT_NUM_SIBLINGS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    NoPages,
    CurrentPageOutOfRange { current_page: u64, total_pages: u64 },
}

impl std::fmt::Display for PagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPages => write!(f, "Pager needs at least one page"),
            Self::CurrentPageOutOfRange { current_page, total_pages } => {
                write!(f, "Page {} is outside 1..={}", current_page, total_pages)
            }
        }
    }
}

impl std::error::Error for PagerError {}

/// Snapshot of the pagination strip. Recomputed from its options on every render.
///
/// Out-of-range input is rejected rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: u64,
    total_pages: u64,
    left_sibling: u64,
    right_sibling: u64,
}

impl Pager {
    pub fn new(options: PagerOptions) -> Result<Self, PagerError> {
        let PagerOptions { current_page, total_pages, num_siblings } = options;
        if total_pages == 0 {
            return Err(PagerError::NoPages);
        }
        if current_page < 1 || current_page > total_pages {
            return Err(PagerError::CurrentPageOutOfRange { current_page, total_pages });
        }
        let left_sibling = current_page.saturating_sub(num_siblings).max(1);
        let right_sibling = current_page.saturating_add(num_siblings).min(total_pages);
        Ok(Self { current_page, total_pages, left_sibling, right_sibling })
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn first_page(&self) -> u64 {
        1
    }

    pub fn last_page(&self) -> u64 {
        self.total_pages
    }

    /// Page links shown around the current page, current page included.
    pub fn window(&self) -> RangeInclusive<u64> {
        self.left_sibling..=self.right_sibling
    }

    pub fn window_pages(&self) -> Vec<u64> {
        self.window().collect()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > self.first_page()
    }

    pub fn previous_page(&self) -> Option<u64> {
        self.has_previous().then(|| self.current_page - 1)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn next_page(&self) -> Option<u64> {
        self.has_next().then(|| self.current_page + 1)
    }

    /// Page 1 sits outside the window and needs its own link.
    pub fn has_first_page_landmark(&self) -> bool {
        self.left_sibling > self.first_page()
    }

    /// At least one hidden page between page 1 and the window.
    pub fn has_left_truncature(&self) -> bool {
        self.left_sibling - self.first_page() >= 2
    }

    pub fn has_right_truncature(&self) -> bool {
        self.total_pages - self.right_sibling >= 2
    }

    pub fn has_last_page_landmark(&self) -> bool {
        self.right_sibling < self.total_pages
    }
}

pub const PAGE_PARAM: &str = "page";

pub fn make_page_param(page: u64) -> QueryParam {
    QueryParam::set(PAGE_PARAM, page.to_string())
}

/// Current page from the URL. Missing, unparsable and zero all mean page 1.
///
/// Pages past `MAX_PAGE_NUMBER` are capped to it.
pub fn get_page_from_params(params: &QueryParams) -> u64 {
    let Some(raw) = params.get(PAGE_PARAM) else { return 1 };
    match raw.parse::<u64>() {
        Ok(page) if page > MAX_PAGE_NUMBER => {
            tracing::debug!(page, "capping page parameter");
            MAX_PAGE_NUMBER
        }
        Ok(page) if page >= 1 => page,
        _ => {
            tracing::debug!(page = raw, "ignoring invalid page parameter");
            1
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn pager(current_page: u64, total_pages: u64) -> Pager {
        Pager::new(PagerOptions::new(current_page, total_pages)).unwrap()
    }

    #[test]
    fn middle_page_has_everything() {
        let p = pager(5, 9);
        assert_eq!(p.window_pages(), vec![3, 4, 5, 6, 7]);
        assert!(p.has_left_truncature());
        assert!(p.has_right_truncature());
        assert!(p.has_first_page_landmark());
        assert!(p.has_last_page_landmark());
        assert_eq!(p.previous_page(), Some(4));
        assert_eq!(p.next_page(), Some(6));
    }

    #[test]
    fn first_page_of_four() {
        let p = pager(1, 4);
        assert_eq!(p.window_pages(), vec![1, 2, 3]);
        assert!(!p.has_left_truncature());
        assert!(!p.has_right_truncature());
        assert!(!p.has_first_page_landmark());
        assert!(p.has_last_page_landmark());
        assert!(!p.has_previous());
        assert_eq!(p.previous_page(), None);
    }

    #[test]
    fn window_reaches_both_ends() {
        let p = pager(3, 4);
        assert_eq!(p.window_pages(), vec![1, 2, 3, 4]);
        assert!(!p.has_left_truncature());
        assert!(!p.has_right_truncature());
        assert!(!p.has_first_page_landmark());
        assert!(!p.has_last_page_landmark());
    }

    #[test]
    fn single_gap_page_is_a_landmark_without_truncature() {
        let p = pager(4, 6);
        assert_eq!(p.window_pages(), vec![2, 3, 4, 5, 6]);
        assert!(p.has_first_page_landmark());
        assert!(!p.has_left_truncature());
        assert!(!p.has_last_page_landmark());
    }

    #[test]
    fn single_page() {
        let p = pager(1, 1);
        assert_eq!(p.window_pages(), vec![1]);
        assert!(!p.has_previous());
        assert!(!p.has_next());
        assert!(!p.has_first_page_landmark());
        assert!(!p.has_last_page_landmark());
        assert!(!p.has_left_truncature());
        assert!(!p.has_right_truncature());
    }

    #[test]
    fn last_page() {
        let p = pager(13, 13);
        assert_eq!(p.window_pages(), vec![11, 12, 13]);
        assert!(p.has_left_truncature());
        assert!(!p.has_next());
        assert_eq!(p.next_page(), None);
        assert_eq!(p.last_page(), 13);
    }

    #[test]
    fn window_stays_in_bounds() {
        for total_pages in 1..=12 {
            for current_page in 1..=total_pages {
                for num_siblings in 0..=3 {
                    let p = Pager::new(PagerOptions { current_page, total_pages, num_siblings }).unwrap();
                    let window = p.window_pages();
                    assert!(window.len() as u64 <= 2 * num_siblings + 1);
                    assert!(window.contains(&current_page));
                    assert!(window.iter().all(|page| *page >= 1 && *page <= total_pages));
                    assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
                }
            }
        }
    }

    #[test]
    fn zero_siblings_shows_only_current_page() {
        let p = Pager::new(PagerOptions { current_page: 3, total_pages: 5, num_siblings: 0 }).unwrap();
        assert_eq!(p.window_pages(), vec![3]);
        assert!(p.has_left_truncature());
        assert!(p.has_right_truncature());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(Pager::new(PagerOptions::new(1, 0)), Err(PagerError::NoPages));
        assert_eq!(
            Pager::new(PagerOptions::new(5, 4)),
            Err(PagerError::CurrentPageOutOfRange { current_page: 5, total_pages: 4 })
        );
        assert!(Pager::new(PagerOptions::new(0, 4)).is_err());
    }

    #[test]
    fn page_params() {
        assert_eq!(make_page_param(1), QueryParam::set("page", "1"));
        assert_eq!(get_page_from_params(&QueryParams::new()), 1);
        assert_eq!(get_page_from_params(&QueryParams::parse("page=3")), 3);
        assert_eq!(get_page_from_params(&QueryParams::parse("page=0")), 1);
        assert_eq!(get_page_from_params(&QueryParams::parse("page=abc")), 1);
    }

    #[test]
    fn page_param_is_capped() {
        assert_eq!(get_page_from_params(&QueryParams::parse("page=10000")), 10_000);
        assert_eq!(get_page_from_params(&QueryParams::parse("page=10001")), 10_000);
        assert_eq!(get_page_from_params(&QueryParams::parse("page=99999999999999999999")), 1);
    }
}
