//! HTTP routes for audit endpoints.

use axum::routing::{get, put};
use axum::Router;

use super::handlers::{
    export_report, get_criteria, get_report, get_state, health, put_ae_name, put_project_name,
    put_risk_score, put_value_score, AuditAppState,
};

/// Creates the audit router with all routes.
pub fn audit_routes(state: AuditAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Static catalogs for building the form
        .route("/api/criteria", get(get_criteria))
        // Current input
        .route("/api/audit", get(get_state))
        .route("/api/audit/project-name", put(put_project_name))
        .route("/api/audit/ae-name", put(put_ae_name))
        .route("/api/audit/value/:criterion", put(put_value_score))
        .route("/api/audit/risk/:criterion", put(put_risk_score))
        // Derived output
        .route("/api/audit/report", get(get_report))
        .route("/api/audit/export", get(export_report))
        .with_state(state)
}
