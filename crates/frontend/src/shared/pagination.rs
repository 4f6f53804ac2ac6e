//! Page window calculation for pagination controls.
//!
//! Pages are 1-based here, matching the `page` parameter of the list endpoints.

/// Number of page buttons shown around the current page
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Contiguous run of page numbers to render around the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub window_size: usize,
    pub pages: Vec<usize>,
    pub show_leading_ellipsis: bool,
    pub show_trailing_ellipsis: bool,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.total_pages > 0 && self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Compute which page numbers to show.
///
/// `current_page` is not clamped; callers keep it within `1..=total_pages`.
/// A `window_size` of 0 is treated as 1.
pub fn compute_window(current_page: usize, total_pages: usize, window_size: usize) -> PageWindow {
    let window_size = window_size.max(1);

    let pages: Vec<usize> = if total_pages == 0 {
        Vec::new()
    } else if total_pages <= window_size {
        (1..=total_pages).collect()
    } else {
        let midpoint = window_size / 2;
        let mut start = current_page.saturating_sub(midpoint).max(1);
        let mut end = start + window_size - 1;
        if end > total_pages {
            end = total_pages;
            start = (end + 1).saturating_sub(window_size).max(1);
        }
        (start..=end).collect()
    };

    let show_leading_ellipsis = pages.first().is_some_and(|&first| first > 1);
    let show_trailing_ellipsis = pages.last().is_some_and(|&last| last < total_pages);

    PageWindow {
        current_page,
        total_pages,
        window_size,
        pages,
        show_leading_ellipsis,
        show_trailing_ellipsis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn window(current: usize, total: usize, size: usize) -> (Vec<usize>, bool, bool) {
        let w = compute_window(current, total, size);
        (w.pages, w.show_leading_ellipsis, w.show_trailing_ellipsis)
    }

    #[test]
    fn test_no_pages() {
        assert_eq!(window(1, 0, 5), (vec![], false, false));
    }

    #[test]
    fn test_fewer_pages_than_window() {
        assert_eq!(window(3, 4, 5), (vec![1, 2, 3, 4], false, false));
        assert_eq!(window(1, 1, 5), (vec![1], false, false));
        assert_eq!(window(5, 5, 5), (vec![1, 2, 3, 4, 5], false, false));
    }

    #[test]
    fn test_centered_window() {
        assert_eq!(window(7, 20, 5), (vec![5, 6, 7, 8, 9], true, true));
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(window(1, 20, 5), (vec![1, 2, 3, 4, 5], false, true));
        assert_eq!(window(20, 20, 5), (vec![16, 17, 18, 19, 20], true, false));
        assert_eq!(window(3, 20, 5), (vec![1, 2, 3, 4, 5], false, true));
        assert_eq!(window(19, 20, 5), (vec![16, 17, 18, 19, 20], true, false));
    }

    #[test]
    fn test_even_window_size() {
        assert_eq!(window(5, 10, 4), (vec![3, 4, 5, 6], true, true));
    }

    #[test]
    fn test_zero_window_size_shows_current_page() {
        assert_eq!(window(4, 10, 0), (vec![4], true, true));
    }

    #[test]
    fn test_navigation_flags() {
        let w = compute_window(1, 3, 5);
        assert!(!w.has_previous());
        assert!(w.has_next());
        let w = compute_window(3, 3, 5);
        assert!(w.has_previous());
        assert!(!w.has_next());
        assert!(!compute_window(1, 0, 5).has_next());
    }

    proptest! {
        #[test]
        fn prop_small_totals_show_every_page(total in 0usize..=9, extra in 0usize..5, current in 1usize..=9) {
            let size = total + extra;
            let w = compute_window(current, total, size);
            prop_assert_eq!(w.pages, (1..=total).collect::<Vec<_>>());
            prop_assert!(!w.show_leading_ellipsis);
            prop_assert!(!w.show_trailing_ellipsis);
        }

        #[test]
        fn prop_large_totals_keep_window_and_current(
            half in 0usize..5,
            total in 1usize..500,
            current_seed in 0usize..500,
        ) {
            let size = half * 2 + 1;
            prop_assume!(total > size);
            let current = current_seed % total + 1;
            let w = compute_window(current, total, size);

            prop_assert_eq!(w.pages.len(), size);
            prop_assert!(w.pages.contains(&current));
            prop_assert!(w.pages.windows(2).all(|p| p[1] == p[0] + 1));
            prop_assert!(w.pages[0] >= 1);
            prop_assert!(*w.pages.last().unwrap() <= total);
            prop_assert_eq!(w.show_leading_ellipsis, w.pages[0] > 1);
            prop_assert_eq!(w.show_trailing_ellipsis, *w.pages.last().unwrap() < total);
        }
    }
}
