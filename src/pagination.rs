//! Pagination control.
//!
//! Bounds-checked navigation intents over a fixed page range. Out-of-range
//! requests are silent no-ops; the caller only acts (and only tracks an
//! analytics event) when an intent is actually emitted.

/// Pagination state over `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// Current page, 1-based
    pub current: u32,
    /// Total number of pages
    pub total_pages: u32,
}

impl Paginator {
    /// Create a paginator at page 1.
    pub fn new(total_pages: u32) -> Self {
        Self {
            current: 1,
            total_pages,
        }
    }

    /// Emit a navigation intent for `page`.
    ///
    /// Returns `Some(page)` when `1 <= page <= total_pages`, otherwise
    /// `None` (silently dropped, no error raised).
    pub fn go_to_page(&self, page: u32) -> Option<u32> {
        if (1..=self.total_pages).contains(&page) {
            Some(page)
        } else {
            None
        }
    }

    /// Intent for the previous page, bounds-checked.
    pub fn previous(&self) -> Option<u32> {
        // current - 1 would underflow at page 1; 0 is out of range anyway
        self.go_to_page(self.current.saturating_sub(1))
    }

    /// Intent for the next page, bounds-checked.
    pub fn next(&self) -> Option<u32> {
        self.go_to_page(self.current + 1)
    }

    /// The full page-number range for direct selection, `1..=total_pages`.
    pub fn page_numbers(&self) -> Vec<u32> {
        (1..=self.total_pages).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_page_in_bounds() {
        let p = Paginator::new(10);
        assert_eq!(p.go_to_page(1), Some(1));
        assert_eq!(p.go_to_page(5), Some(5));
        assert_eq!(p.go_to_page(10), Some(10));
    }

    #[test]
    fn test_go_to_page_zero_is_noop() {
        let p = Paginator::new(10);
        assert_eq!(p.go_to_page(0), None);
    }

    #[test]
    fn test_go_to_page_past_end_is_noop() {
        let p = Paginator::new(10);
        assert_eq!(p.go_to_page(11), None);
    }

    #[test]
    fn test_previous_at_first_page_is_noop() {
        let p = Paginator::new(10);
        assert_eq!(p.previous(), None);
    }

    #[test]
    fn test_next_at_last_page_is_noop() {
        let mut p = Paginator::new(10);
        p.current = 10;
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_previous_and_next_inherit_bounds_check() {
        let mut p = Paginator::new(10);
        p.current = 5;
        assert_eq!(p.previous(), Some(4));
        assert_eq!(p.next(), Some(6));
    }

    #[test]
    fn test_page_numbers() {
        let p = Paginator::new(4);
        assert_eq!(p.page_numbers(), vec![1, 2, 3, 4]);
    }
}
