pub mod confirm_dialog;
pub mod date_input;
pub mod export_dialog;
pub mod pagination_controls;
pub mod table;

pub use confirm_dialog::ConfirmDialog;
pub use date_input::DateInput;
pub use export_dialog::{ExportDialog, ExportFilterDef};
pub use pagination_controls::PaginationControls;
