pub mod session;

pub use session::SessionInfo;
