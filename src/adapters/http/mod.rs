//! HTTP adapters - REST API implementations.
//!
//! `router` assembles the audit routes with the cross-cutting layers
//! (request tracing, timeout, CORS) driven by configuration.

pub mod audit;

pub use audit::{audit_routes, AuditAppState};

use std::time::Duration;

use axum::Router;
use ::http::{header, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ValidationError};

/// Builds the full application router.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCorsOrigin` if a configured origin is not
/// a valid header value.
pub fn router(state: AuditAppState, config: &AppConfig) -> Result<Router, ValidationError> {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.server.cors_header_values()?))
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    let router = audit_routes(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    if config.features.enable_tracing {
        Ok(router.layer(TraceLayer::new_for_http()))
    } else {
        Ok(router)
    }
}
