//! Audit HTTP adapter module.
//!
//! Provides the REST endpoints the dashboard front-end drives.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::AuditAppState;
pub use routes::audit_routes;
