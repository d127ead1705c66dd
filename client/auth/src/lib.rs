//! Session and access control for the job-portal client
//!
//! This crate owns the client side of authentication: the session cache
//! (token plus the user record the backend confirmed for it), the route
//! guard evaluated on every protected navigation, and the role model both
//! are expressed over.

pub mod guard;
pub mod models;
pub mod session;

// Re-export for convenience
pub use guard::{Decision, RouteAccess, RouteGuard, decide};
pub use models::{Role, User};
pub use session::{Resolution, SessionSnapshot, SessionStore};
