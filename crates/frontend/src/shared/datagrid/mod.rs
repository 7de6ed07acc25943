//! Paginated data grid behind every entity list.
//!
//! The grid is split into pure decision helpers (selection, page clamping,
//! filter debounce planning, trash routing, dispatch phases and copy) and a
//! reactive [`GridController`] that wires them to a [`GridSource`].
//!
//! Selection is scoped to the dataset, not to the visible filter: rows
//! checked under one filter stay checked when the filter changes, and only
//! leaving the list drops them.

pub mod controller;
pub mod dispatcher;
pub mod filter;
pub mod pagination;
pub mod rest;
pub mod selection;
pub mod source;
pub mod toolbar;
pub mod trash;

pub use controller::GridController;
pub use dispatcher::{BulkAction, DispatchPhase, GridTask};
pub use selection::Selection;
pub use source::GridSource;
pub use toolbar::GridToolbar;
