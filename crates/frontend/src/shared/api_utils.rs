//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and query strings.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/product/bulk-delete");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Serialize list-query parameters into a URL query string
pub fn query_string<T: serde::Serialize>(query: &T) -> String {
    serde_qs::to_string(query).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::TableQuery;

    #[test]
    fn test_query_string_minimal() {
        let query = TableQuery::default();
        assert_eq!(query_string(&query), "page=0&pageSize=10");
    }

    #[test]
    fn test_query_string_with_filter_and_trash() {
        let query = TableQuery {
            page: 3,
            page_size: 50,
            q: "kabel".into(),
            trashed: true,
            ..TableQuery::default()
        };
        assert_eq!(
            query_string(&query),
            "page=3&pageSize=50&q=kabel&trashed=true"
        );
    }

    #[test]
    fn test_query_string_with_sort() {
        let query = TableQuery {
            sort_by: Some("name".into()),
            sort_desc: true,
            ..TableQuery::default()
        };
        assert_eq!(
            query_string(&query),
            "page=0&pageSize=10&sortBy=name&sortDesc=true"
        );
    }
}
