use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File format of an export download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Csv => "text/csv",
        }
    }
}

/// Parameters of an export request
///
/// `ids: None` means the whole filtered dataset; `Some(ids)` narrows the
/// export to the selected rows. Filters with empty values are never sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,

    #[serde(rename = "dateFrom", default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<chrono::NaiveDate>,

    #[serde(rename = "dateTo", default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<chrono::NaiveDate>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, String>,
}

impl ExportRequest {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            ids: None,
            date_from: None,
            date_to: None,
            filters: BTreeMap::new(),
        }
    }

    /// Add a column filter, ignoring empty values
    pub fn set_filter(&mut self, key: &str, value: &str) {
        if !value.trim().is_empty() {
            self.filters.insert(key.to_string(), value.to_string());
        }
    }

    /// True when the export is narrowed to selected rows
    pub fn is_scoped(&self) -> bool {
        self.ids.as_ref().is_some_and(|ids| !ids.is_empty())
    }

    /// True when at least one end of the date range is set
    pub fn has_date_range(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tags_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&ExportFormat::Xlsx).unwrap(), "\"xlsx\"");
        assert_eq!(serde_json::to_string(&ExportFormat::Csv).unwrap(), "\"csv\"");
    }

    #[test]
    fn test_unscoped_request_omits_ids() {
        let request = ExportRequest::new(ExportFormat::Xlsx);
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("ids"));
        assert!(!object.contains_key("filters"));
        assert!(!request.is_scoped());
    }

    #[test]
    fn test_scoped_request_keeps_ids() {
        let mut request = ExportRequest::new(ExportFormat::Csv);
        request.ids = Some(vec!["a".into(), "b".into()]);
        assert!(request.is_scoped());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["ids"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_set_filter_drops_empty_values() {
        let mut request = ExportRequest::new(ExportFormat::Xlsx);
        request.set_filter("categoryId", "");
        request.set_filter("status", "  ");
        request.set_filter("supplierId", "s-1");
        assert_eq!(request.filters.len(), 1);
        assert_eq!(request.filters["supplierId"], "s-1");
    }

    #[test]
    fn test_date_range_detection() {
        let mut request = ExportRequest::new(ExportFormat::Xlsx);
        assert!(!request.has_date_range());
        request.date_from = chrono::NaiveDate::from_ymd_opt(2025, 1, 1);
        assert!(request.has_date_range());
    }
}
