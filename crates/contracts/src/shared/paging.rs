use serde::{Deserialize, Serialize};

/// Page size used when a list opens for the first time
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the pagination controls
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Query parameters of a list request
///
/// Serialized onto the URL query string. Empty filter, inactive trash flag
/// and absent sort keys are omitted so the string stays minimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableQuery {
    /// Zero-based page index
    pub page: usize,

    #[serde(rename = "pageSize")]
    pub page_size: usize,

    /// Filter text, already trimmed
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub q: String,

    /// When set the query targets the trash table instead of the active one
    #[serde(default, skip_serializing_if = "is_false")]
    pub trashed: bool,

    #[serde(rename = "sortBy", default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    #[serde(rename = "sortDesc", default, skip_serializing_if = "is_false")]
    pub sort_desc: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            q: String::new(),
            trashed: false,
            sort_by: None,
            sort_desc: false,
        }
    }
}

/// One page of list rows plus the server-computed counters
///
/// The counters are always taken from the response as-is, never recomputed
/// on the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePage<T> {
    pub rows: Vec<T>,

    #[serde(rename = "totalRowCount")]
    pub total_row_count: u64,

    #[serde(rename = "filteredRowCount")]
    pub filtered_row_count: u64,

    #[serde(rename = "pageCount")]
    pub page_count: u64,
}

/// Full id listing of a dataset, used by select-all across pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdList {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_serializes_minimal() {
        let value = serde_json::to_value(TableQuery::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["page"], 0);
        assert_eq!(object["pageSize"], 10);
    }

    #[test]
    fn test_filter_and_trash_appear_when_set() {
        let query = TableQuery {
            page: 2,
            q: "kabel".into(),
            trashed: true,
            ..TableQuery::default()
        };
        let value = serde_json::to_value(query).unwrap();
        assert_eq!(value["q"], "kabel");
        assert_eq!(value["trashed"], true);
    }

    #[test]
    fn test_sort_keys_appear_when_set() {
        let query = TableQuery {
            sort_by: Some("name".into()),
            sort_desc: true,
            ..TableQuery::default()
        };
        let value = serde_json::to_value(query).unwrap();
        assert_eq!(value["sortBy"], "name");
        assert_eq!(value["sortDesc"], true);
    }

    #[test]
    fn test_query_deserializes_without_optional_fields() {
        let query: TableQuery = serde_json::from_str(r#"{"page":1,"pageSize":50}"#).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 50);
        assert_eq!(query.q, "");
        assert!(!query.trashed);
        assert_eq!(query.sort_by, None);
    }
}
