pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod datagrid;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod notify;
pub mod page_frame;
