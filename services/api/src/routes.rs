use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use hr_analytics::accounts::{account_router, AccountService, UserStore};
use hr_analytics::dataset::{EmployeeDatasetImporter, ImportSummary};
use hr_analytics::error::AppError;
use hr_analytics::workforce::{workforce_router, EmployeeRepository, WorkforceService};
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct DatasetImportRequest {
    pub(crate) csv: String,
}

pub(crate) fn with_service_routes<R, S>(
    workforce: Arc<WorkforceService<R>>,
    accounts: Arc<AccountService<S>>,
) -> axum::Router
where
    R: EmployeeRepository + 'static,
    S: UserStore + 'static,
{
    workforce_router(workforce)
        .merge(account_router(accounts))
        .route("/", axum::routing::get(root))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/employees/import",
            axum::routing::post(dataset_import_endpoint),
        )
}

pub(crate) async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "HR analytics API is up and running!" }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Load an employee CSV export posted inline into the running store.
pub(crate) async fn dataset_import_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<DatasetImportRequest>,
) -> Result<Json<ImportSummary>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let records = EmployeeDatasetImporter::from_reader(reader)?;
    let summary = EmployeeDatasetImporter::seed(state.workforce.repository().as_ref(), records)?;
    Ok(Json(summary))
}
