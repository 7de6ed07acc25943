pub mod bulk;
pub mod export;
pub mod paging;
pub mod permissions;

pub use bulk::{BulkDeleteRequest, BulkFailure, BulkOutcome, BulkRequest};
pub use export::{ExportFormat, ExportRequest};
pub use paging::{IdList, TablePage, TableQuery, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
