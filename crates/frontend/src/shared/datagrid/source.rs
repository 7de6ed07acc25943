//! Server contract of a grid-backed list.
//!
//! Each entity list implements [`GridSource`] over its own REST endpoints
//! and the controller stays generic over the row type. Sources are unit
//! structs, so handing them around is free.

use contracts::shared::{BulkOutcome, ExportRequest, TablePage, TableQuery};

use crate::shared::api_error::ApiError;

#[allow(async_fn_in_trait)]
pub trait GridSource: Copy + Send + Sync + 'static {
    type Row: Clone + Send + Sync + 'static;

    /// Name of one element, as shown in dialogs ("Kategori")
    fn element_label(&self) -> &'static str;

    /// Name of the list, as shown in headers and export file names
    fn list_label(&self) -> &'static str;

    /// Collection key used in permission names ("category")
    fn collection_name(&self) -> &'static str;

    fn row_id(row: &Self::Row) -> String;

    /// Display name of a row, for single-row dialog copy
    fn row_label(row: &Self::Row) -> String;

    async fn fetch_page(&self, query: &TableQuery) -> Result<TablePage<Self::Row>, ApiError>;

    /// Ids of every row matching the query, ignoring pagination
    async fn fetch_all_ids(&self, query: &TableQuery) -> Result<Vec<String>, ApiError>;

    async fn delete_many(&self, ids: &[String], force: bool) -> Result<BulkOutcome, ApiError>;

    async fn restore_many(&self, ids: &[String]) -> Result<BulkOutcome, ApiError>;

    async fn empty_trash(&self) -> Result<BulkOutcome, ApiError>;

    async fn export(&self, request: &ExportRequest) -> Result<Vec<u8>, ApiError>;

    /// Whether rows can be turned off when a delete hits a usage conflict
    fn supports_deactivate(&self) -> bool {
        false
    }

    async fn deactivate_many(&self, _ids: &[String]) -> Result<BulkOutcome, ApiError> {
        Err(ApiError::Status {
            status: 405,
            message: "Nonaktifkan tidak tersedia untuk data ini".to_string(),
        })
    }
}
