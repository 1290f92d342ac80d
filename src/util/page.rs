/// Page size used when displaying recommendation results.
pub const RESULT_PAGE_SIZE: usize = 8;

/// A bounded, order-preserving view into a larger list. Derived on every
/// render, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page_index: usize,
    pub page_count: usize,
}

/// Number of pages needed for `len` items. An empty list still counts as one
/// page so the display always has a "1 / 1" to show.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 || len == 0 {
        return 1;
    }
    (len + page_size - 1) / page_size
}

/// Slice `items` into the page at `page_index`, clamping the index into
/// `[0, page_count - 1]`. The source list is borrowed and never mutated.
pub fn paginate<T>(items: &[T], page_size: usize, page_index: usize) -> Page<'_, T> {
    let page_count = page_count(items.len(), page_size);
    let page_index = page_index.min(page_count - 1);

    let start = page_index * page_size;
    let end = (start + page_size).min(items.len());
    let slice = if start >= items.len() {
        &items[0..0]
    } else {
        &items[start..end]
    };

    Page {
        items: slice,
        page_index,
        page_count,
    }
}

/// Step forward one page, clamped to the last page. No wraparound.
pub fn next_index(page_index: usize, page_count: usize) -> usize {
    (page_index + 1).min(page_count.saturating_sub(1))
}

/// Step back one page, clamped to the first page. No wraparound.
pub fn prev_index(page_index: usize) -> usize {
    page_index.saturating_sub(1)
}

/// Pagination controls are hidden when everything fits on one page.
pub fn show_controls(len: usize, page_size: usize) -> bool {
    len > page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<i32> = (1..=20).collect();
        let page = paginate(&items, 8, 0);
        assert_eq!(page.items, &(1..=8).collect::<Vec<i32>>()[..]);
        assert_eq!(page.page_index, 0);
        assert_eq!(page.page_count, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<i32> = (1..=20).collect();
        let page = paginate(&items, 8, 2);
        assert_eq!(page.items, &[17, 18, 19, 20]);
        assert_eq!(page.page_count, 3);
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<i32> = Vec::new();
        let page = paginate(&items, 8, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_index_clamped_to_last_page() {
        let items: Vec<i32> = (1..=20).collect();
        let page = paginate(&items, 8, 99);
        assert_eq!(page.page_index, 2);
        assert_eq!(page.items, &[17, 18, 19, 20]);
    }

    #[test]
    fn test_idempotent() {
        let items: Vec<i32> = (1..=20).collect();
        let first = paginate(&items, 8, 1);
        let second = paginate(&items, 8, 1);
        assert_eq!(first, second);
        assert_eq!(items, (1..=20).collect::<Vec<i32>>());
    }

    #[test]
    fn test_stepping_clamps_at_bounds() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 2);
        assert_eq!(prev_index(1), 0);
        assert_eq!(prev_index(0), 0);
    }

    #[test]
    fn test_controls_hidden_when_single_page() {
        assert!(!show_controls(8, 8));
        assert!(show_controls(9, 8));
        assert!(!show_controls(0, 8));
    }
}
