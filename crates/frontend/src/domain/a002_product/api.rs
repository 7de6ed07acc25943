use contracts::domain::a002_product::{Product, ProductRow};
use contracts::domain::common::AggregateRoot;
use contracts::shared::{BulkOutcome, ExportRequest, TablePage, TableQuery};

use crate::shared::api_error::ApiError;
use crate::shared::datagrid::{rest, GridSource};

#[derive(Clone, Copy)]
pub struct ProductSource;

impl GridSource for ProductSource {
    type Row = ProductRow;

    fn element_label(&self) -> &'static str {
        Product::element_name()
    }

    fn list_label(&self) -> &'static str {
        Product::list_name()
    }

    fn collection_name(&self) -> &'static str {
        Product::collection_name()
    }

    fn row_id(row: &ProductRow) -> String {
        row.id.clone()
    }

    fn row_label(row: &ProductRow) -> String {
        row.name.clone()
    }

    async fn fetch_page(&self, query: &TableQuery) -> Result<TablePage<ProductRow>, ApiError> {
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

    // Products referenced by documents cannot be deleted, they are
    // deactivated instead
    fn supports_deactivate(&self) -> bool {
        true
    }

    async fn deactivate_many(&self, ids: &[String]) -> Result<BulkOutcome, ApiError> {
        rest::deactivate_many(self.collection_name(), ids).await
    }
}
