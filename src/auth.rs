pub mod key_manager;
pub mod middleware;
pub mod session;

pub use session::{Caller, Role, Session};
