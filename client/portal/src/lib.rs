//! Application shell of the job-portal client
//!
//! This crate composes the portal around the session and guard crate: the
//! static route table with its access descriptors, the role-gated
//! navigation menu, the form validation rules, and the page view-models
//! that talk to the backend. A rendering layer (web, TUI, test harness)
//! drives these and draws whatever they return.

pub mod models;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod validation;

// Re-export for convenience
pub use models::{Job, NewJob};
pub use routes::{RouteEntry, RouteTable};
