//! Pagination window for question listings

use serde::{Deserialize, Serialize};

/// Questions returned per page
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// A 1-based page over a fixed-size window.
///
/// The page number is kept as given. Pages below 1 select an empty window
/// rather than being clamped, so the listing routes report them as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Items per page.
    pub fn limit(&self) -> i64 {
        QUESTIONS_PER_PAGE as i64
    }

    /// SQL OFFSET for this page. Only meaningful when `page >= 1`.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit())
    }

    /// Whether this page can select anything at all.
    pub fn is_selectable(&self) -> bool {
        self.page >= 1
    }

    /// Slice `items` down to this page's window, clamped to the list bounds.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if !self.is_selectable() {
            return &[];
        }
        let start = usize::try_from(self.offset())
            .unwrap_or(usize::MAX)
            .min(items.len());
        let end = start.saturating_add(QUESTIONS_PER_PAGE as usize).min(items.len());
        &items[start..end]
    }

    /// Slice an owned list into a [`Paginated`] result.
    pub fn paginate<T: Clone>(&self, items: &[T]) -> Paginated<T> {
        Paginated {
            items: self.slice(items).to_vec(),
            total: items.len() as i64,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// One page of results plus the pre-pagination count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `?page=N` query string.
///
/// Kept as a raw string so that a non-numeric page falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>) -> PaginationParams {
        PaginationParams {
            page: page.map(str::to_owned),
        }
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1).offset(), 0);
        assert_eq!(Pagination::new(2).offset(), 10);
        assert_eq!(Pagination::new(5).offset(), 40);
    }

    #[test]
    fn page_param_coercion() {
        assert_eq!(Pagination::from(params(None)).page, 1);
        assert_eq!(Pagination::from(params(Some("3"))).page, 3);
        assert_eq!(Pagination::from(params(Some("abc"))).page, 1);
        assert_eq!(Pagination::from(params(Some("0"))).page, 0);
        assert_eq!(Pagination::from(params(Some("-2"))).page, -2);
    }

    #[test]
    fn slice_len_is_min_of_window_and_remaining() {
        let items: Vec<u32> = (0..25).collect();
        for page in 1..=3 {
            let p = Pagination::new(page);
            let remaining = 25 - (page as usize - 1) * 10;
            assert_eq!(p.slice(&items).len(), remaining.min(10));
        }
        assert_eq!(Pagination::new(3).slice(&items), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn beyond_last_page_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(Pagination::new(2).slice(&items).is_empty());
        assert!(Pagination::new(i64::MAX).slice(&items).is_empty());
    }

    #[test]
    fn non_positive_page_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(Pagination::new(0).slice(&items).is_empty());
        assert!(Pagination::new(-1).slice(&items).is_empty());
    }

    #[test]
    fn paginate_keeps_total() {
        let items: Vec<u32> = (0..13).collect();
        let page = Pagination::new(2).paginate(&items);
        assert_eq!(page.items, vec![10, 11, 12]);
        assert_eq!(page.total, 13);
    }
}
