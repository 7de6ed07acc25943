pub mod shell;
pub mod sidebar;
pub mod top_header;

pub use shell::AppShell;
