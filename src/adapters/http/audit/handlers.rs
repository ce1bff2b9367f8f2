//! HTTP handlers for audit endpoints.
//!
//! These handlers connect Axum routes to application layer handlers. All core
//! work is synchronous and in-memory, so nothing here awaits anything but the
//! request body.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::adapters::export::exporter_for;
use crate::application::handlers::{
    ExportReportHandler, ExportReportQuery, GetReportHandler, ProjectInfoField, SetScoreCommand,
    SetScoreHandler, UpdateProjectInfoCommand, UpdateProjectInfoHandler,
};
use crate::domain::analysis::{AnalysisEngine, AnalysisReport};
use crate::domain::audit::{AuditError, CriterionKind, ProjectState};
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::{ExportError, ExportFormat, ProjectStore, ReportExporter};

use super::dto::{
    CriteriaCatalogResponse, ErrorResponse, ExportParams, HealthResponse, SetScoreRequest,
    UpdateTextRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Audit API error that implements IntoResponse.
#[derive(Debug)]
pub enum AuditApiError {
    BadRequest(ErrorCode, String),
    Internal(String),
}

impl IntoResponse for AuditApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AuditApiError::BadRequest(code, msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(code, msg))
            }
            AuditApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<AuditError> for AuditApiError {
    fn from(error: AuditError) -> Self {
        AuditApiError::BadRequest(error.code(), error.to_string())
    }
}

impl From<ValidationError> for AuditApiError {
    fn from(error: ValidationError) -> Self {
        AuditApiError::BadRequest(error.code(), error.to_string())
    }
}

impl From<ExportError> for AuditApiError {
    fn from(error: ExportError) -> Self {
        match error {
            ExportError::UnsupportedFormat(_) => {
                AuditApiError::BadRequest(ErrorCode::UnsupportedFormat, error.to_string())
            }
            ExportError::RenderFailed(_) => AuditApiError::Internal(error.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing audit dependencies.
#[derive(Clone)]
pub struct AuditAppState {
    pub store: Arc<dyn ProjectStore>,
    pub engine: Arc<AnalysisEngine>,
    pub exporters: Vec<Arc<dyn ReportExporter>>,
}

impl AuditAppState {
    /// Wires the default engine and both exporters around `store`.
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            store,
            engine: Arc::new(AnalysisEngine::default()),
            exporters: vec![
                exporter_for(ExportFormat::Html),
                exporter_for(ExportFormat::Markdown),
            ],
        }
    }

    pub fn with_engine(mut self, engine: AnalysisEngine) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    pub fn update_project_info_handler(&self) -> UpdateProjectInfoHandler {
        UpdateProjectInfoHandler::new(self.store.clone())
    }

    pub fn set_score_handler(&self) -> SetScoreHandler {
        SetScoreHandler::new(self.store.clone())
    }

    pub fn get_report_handler(&self) -> GetReportHandler {
        GetReportHandler::new(self.store.clone(), self.engine.clone())
    }

    pub fn export_report_handler(&self) -> ExportReportHandler {
        ExportReportHandler::new(
            self.store.clone(),
            self.engine.clone(),
            self.exporters.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/criteria
pub async fn get_criteria() -> Json<CriteriaCatalogResponse> {
    Json(CriteriaCatalogResponse::build())
}

/// GET /api/audit
pub async fn get_state(State(state): State<AuditAppState>) -> Json<ProjectState> {
    Json(state.store.get_state().as_ref().clone())
}

/// PUT /api/audit/project-name
pub async fn put_project_name(
    State(state): State<AuditAppState>,
    Json(body): Json<UpdateTextRequest>,
) -> Json<ProjectState> {
    update_text(&state, ProjectInfoField::ProjectName, body.value)
}

/// PUT /api/audit/ae-name
pub async fn put_ae_name(
    State(state): State<AuditAppState>,
    Json(body): Json<UpdateTextRequest>,
) -> Json<ProjectState> {
    update_text(&state, ProjectInfoField::AeName, body.value)
}

fn update_text(state: &AuditAppState, field: ProjectInfoField, value: String) -> Json<ProjectState> {
    let updated = state
        .update_project_info_handler()
        .handle(UpdateProjectInfoCommand { field, value });
    Json(updated.as_ref().clone())
}

/// PUT /api/audit/value/:criterion
pub async fn put_value_score(
    State(state): State<AuditAppState>,
    Path(criterion_id): Path<String>,
    Json(body): Json<SetScoreRequest>,
) -> Result<Json<ProjectState>, AuditApiError> {
    set_score(&state, CriterionKind::Value, criterion_id, &body)
}

/// PUT /api/audit/risk/:criterion
pub async fn put_risk_score(
    State(state): State<AuditAppState>,
    Path(criterion_id): Path<String>,
    Json(body): Json<SetScoreRequest>,
) -> Result<Json<ProjectState>, AuditApiError> {
    set_score(&state, CriterionKind::Risk, criterion_id, &body)
}

fn set_score(
    state: &AuditAppState,
    kind: CriterionKind,
    criterion_id: String,
    body: &SetScoreRequest,
) -> Result<Json<ProjectState>, AuditApiError> {
    let score = body.score()?;
    let updated = state.set_score_handler().handle(SetScoreCommand {
        kind,
        criterion_id,
        score,
    })?;
    Ok(Json(updated.as_ref().clone()))
}

/// GET /api/audit/report
///
/// Recomputed from the current snapshot on every call.
pub async fn get_report(State(state): State<AuditAppState>) -> Json<AnalysisReport> {
    Json(state.get_report_handler().handle().report)
}

/// GET /api/audit/export?format=html|markdown
pub async fn export_report(
    State(state): State<AuditAppState>,
    Query(params): Query<ExportParams>,
) -> Result<Response, AuditApiError> {
    let format = match params.format.as_deref() {
        Some(raw) => raw.parse::<ExportFormat>()?,
        None => ExportFormat::Html,
    };

    let document = state
        .export_report_handler()
        .handle(ExportReportQuery { format })?;

    let disposition = format!("inline; filename=\"{}\"", document.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response())
}
