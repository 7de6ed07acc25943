use contracts::domain::a001_category::{Category, CategoryRow};
use contracts::domain::common::AggregateRoot;
use contracts::shared::{BulkOutcome, ExportRequest, TablePage, TableQuery};

use crate::shared::api_error::ApiError;
use crate::shared::datagrid::{rest, GridSource};

#[derive(Clone, Copy)]
pub struct CategorySource;

impl GridSource for CategorySource {
    type Row = CategoryRow;

    fn element_label(&self) -> &'static str {
        Category::element_name()
    }

    fn list_label(&self) -> &'static str {
        Category::list_name()
    }

    fn collection_name(&self) -> &'static str {
        Category::collection_name()
    }

    fn row_id(row: &CategoryRow) -> String {
        row.id.clone()
    }

    fn row_label(row: &CategoryRow) -> String {
        row.name.clone()
    }

    async fn fetch_page(&self, query: &TableQuery) -> Result<TablePage<CategoryRow>, ApiError> {
        rest::fetch_page(self.collection_name(), query).await
    }

    async fn fetch_all_ids(&self, query: &TableQuery) -> Result<Vec<String>, ApiError> {
        rest::fetch_all_ids(self.collection_name(), query).await
    }

    async fn delete_many(&self, ids: &[String], force: bool) -> Result<BulkOutcome, ApiError> {
        rest::delete_many(self.collection_name(), ids, force).await
    }

    async fn restore_many(&self, ids: &[String]) -> Result<BulkOutcome, ApiError> {
        rest::restore_many(self.collection_name(), ids).await
    }

    async fn empty_trash(&self) -> Result<BulkOutcome, ApiError> {
        rest::empty_trash(self.collection_name()).await
    }

    async fn export(&self, request: &ExportRequest) -> Result<Vec<u8>, ApiError> {
        rest::export(self.collection_name(), request).await
    }
}
