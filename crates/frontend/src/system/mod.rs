pub mod session;

pub use session::{use_session, SessionProvider, SessionService};
