//! Helpers for server-sorted list views
//!
//! Lists are sorted by the backend; a header click only updates the sort
//! keys on the query. These helpers decide the next keys and render the
//! header indicator.

/// Decide the next sort keys after a header click
///
/// Clicking a new column sorts it ascending; clicking the active column
/// flips the direction.
pub fn next_sort(current: Option<&str>, descending: bool, field: &str) -> (Option<String>, bool) {
    if current == Some(field) {
        (Some(field.to_string()), !descending)
    } else {
        (Some(field.to_string()), false)
    }
}

/// Sort indicator glyph for a header cell
pub fn get_sort_indicator(current: Option<&str>, field: &str, descending: bool) -> &'static str {
    if current == Some(field) {
        if descending {
            " ▼"
        } else {
            " ▲"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the indicator span
pub fn get_sort_class(current: Option<&str>, field: &str) -> &'static str {
    if current == Some(field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sort_new_column_starts_ascending() {
        assert_eq!(next_sort(None, false, "name"), (Some("name".into()), false));
        assert_eq!(
            next_sort(Some("code"), true, "name"),
            (Some("name".into()), false)
        );
    }

    #[test]
    fn test_next_sort_active_column_flips() {
        assert_eq!(
            next_sort(Some("name"), false, "name"),
            (Some("name".into()), true)
        );
        assert_eq!(
            next_sort(Some("name"), true, "name"),
            (Some("name".into()), false)
        );
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some("name"), "name", false), " ▲");
        assert_eq!(get_sort_indicator(Some("name"), "name", true), " ▼");
        assert_eq!(get_sort_indicator(Some("name"), "code", false), " ⇅");
        assert_eq!(get_sort_indicator(None, "code", false), " ⇅");
    }
}
