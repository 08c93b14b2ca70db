use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::admission::{AdmissionError, EmployeeSubmission};
use super::analytics::Interventions;
use super::domain::{Department, EmployeeId};
use super::labels::{company_label, department_label, Locale};
use super::repository::{EmployeeRepository, RepositoryError};
use super::service::{WorkforceService, WorkforceServiceError};

/// Router builder exposing the employee, statistics and analytics endpoints.
pub fn workforce_router<R>(service: Arc<WorkforceService<R>>) -> Router
where
    R: EmployeeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/employees",
            get(list_handler::<R>).post(admit_handler::<R>),
        )
        .route("/api/v1/employees/:id", get(employee_handler::<R>))
        .route("/api/v1/employees/:id/score", post(score_handler::<R>))
        .route(
            "/api/v1/employees/:id/evaluation_note",
            post(evaluation_note_handler::<R>),
        )
        .route("/api/v1/employees/:id/comment", post(comment_handler::<R>))
        .route("/api/v1/employees/:id/risk", get(risk_handler::<R>))
        .route("/api/v1/employees/:id/simulate", post(simulate_handler::<R>))
        .route("/api/v1/stats", get(company_stats_handler::<R>))
        .route(
            "/api/v1/departments/:department",
            get(department_handler::<R>),
        )
        .route(
            "/api/v1/departments/:department/stats",
            get(department_stats_handler::<R>),
        )
        .route(
            "/api/v1/analytics/performance",
            get(performance_handler::<R>),
        )
        .route("/api/v1/analytics/age_pyramid", get(age_pyramid_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    lang: Option<String>,
}

impl LocaleQuery {
    fn locale(&self) -> Locale {
        self.lang
            .as_deref()
            .and_then(Locale::from_code)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreUpdate {
    score: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationNoteUpdate {
    evaluation_note: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentUpdate {
    comment: String,
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<WorkforceService<R>>>) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.employees() {
        Ok(records) if records.is_empty() => not_found("no employees found"),
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn employee_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
    Path(id): Path<u32>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.employee(EmployeeId(id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn admit_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
    Json(submission): Json<EmployeeSubmission>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.admit(submission.fields, submission.auto_id) {
        Ok(record) => {
            let payload = json!({
                "status": "success",
                "id": record.id,
                "message": "Employee successfully registered.",
                "data": record,
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(error) => failure(error),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
    Path(id): Path<u32>,
    Json(update): Json<ScoreUpdate>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.update_score(EmployeeId(id), update.score) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn evaluation_note_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
    Path(id): Path<u32>,
    Json(update): Json<EvaluationNoteUpdate>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.update_evaluation_note(EmployeeId(id), update.evaluation_note) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn comment_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
    Path(id): Path<u32>,
    Json(update): Json<CommentUpdate>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.update_comment(EmployeeId(id), update.comment) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn risk_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
    Path(id): Path<u32>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    let id = EmployeeId(id);
    match service.risk(id) {
        Ok(assessment) => {
            let view = assessment.view(id, query.locale());
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => failure(error),
    }
}

pub(crate) async fn simulate_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
    Path(id): Path<u32>,
    Json(interventions): Json<Interventions>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.simulate(EmployeeId(id), &interventions) {
        Ok(projection) => (StatusCode::OK, Json(projection)).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn company_stats_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.company_stats() {
        Ok(stats) => {
            let view = stats.view(company_label(query.locale()));
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => failure(error),
    }
}

pub(crate) async fn department_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
    Path(department): Path<String>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    let Some(department) = Department::parse(&department) else {
        return not_found(&format!("unknown department '{department}'"));
    };

    match service.department_view(department) {
        Ok(rows) if rows.is_empty() => {
            not_found(&format!("no employees found in {department}"))
        }
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn department_stats_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
    Path(department): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    let Some(department) = Department::parse(&department) else {
        return not_found(&format!("unknown department '{department}'"));
    };

    match service.department_stats(department) {
        Ok(stats) => {
            let view = stats.view(department_label(department, query.locale()));
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => failure(error),
    }
}

pub(crate) async fn performance_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.performance_by_department() {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn age_pyramid_handler<R>(
    State(service): State<Arc<WorkforceService<R>>>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.age_pyramid() {
        Ok(brackets) => (StatusCode::OK, Json(brackets)).into_response(),
        Err(error) => failure(error),
    }
}

fn not_found(message: &str) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn failure(error: WorkforceServiceError) -> Response {
    let status = match &error {
        WorkforceServiceError::EmployeeNotFound(_)
        | WorkforceServiceError::EmptyDataset(_)
        | WorkforceServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        WorkforceServiceError::Admission(
            AdmissionError::InvalidId | AdmissionError::DuplicateId(_) | AdmissionError::IdExhausted,
        ) => StatusCode::BAD_REQUEST,
        WorkforceServiceError::Admission(_)
        | WorkforceServiceError::Simulation(_)
        | WorkforceServiceError::InvalidUpdate(_) => StatusCode::UNPROCESSABLE_ENTITY,
        WorkforceServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        WorkforceServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
