pub mod identity;
pub mod registry;
pub mod routes;
pub mod session;

// re-export
pub use identity::{IdentityEx, SessionEx};
pub use registry::{SessionNotFound, SessionRegistry};
pub use session::{Identity, Role, Session};
