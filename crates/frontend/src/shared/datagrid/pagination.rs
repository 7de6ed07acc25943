//! Page clamping after the dataset shrinks.
//!
//! When a delete empties the last page the server reports a smaller page
//! count than the page we are on. The grid clamps to the last valid page
//! and refetches once instead of showing an empty table.

/// Clamp a zero-based page index to the server-reported page count
pub fn clamped_page(page: usize, page_count: usize) -> usize {
    if page_count == 0 {
        0
    } else {
        page.min(page_count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_within_range_is_kept() {
        assert_eq!(clamped_page(0, 3), 0);
        assert_eq!(clamped_page(2, 3), 2);
    }

    #[test]
    fn test_page_past_the_end_clamps_to_last() {
        assert_eq!(clamped_page(4, 3), 2);
        assert_eq!(clamped_page(100, 1), 0);
    }

    #[test]
    fn test_empty_dataset_clamps_to_first() {
        assert_eq!(clamped_page(7, 0), 0);
        assert_eq!(clamped_page(0, 0), 0);
    }
}
