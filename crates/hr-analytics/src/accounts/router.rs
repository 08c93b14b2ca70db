use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::service::{AccountError, AccountService, Credentials};
use super::store::UserStore;
use crate::workforce::RepositoryError;

pub fn account_router<S>(service: Arc<AccountService<S>>) -> Router
where
    S: UserStore + 'static,
{
    Router::new()
        .route("/api/v1/register", post(register_handler::<S>))
        .route("/api/v1/login", post(login_handler::<S>))
        .with_state(service)
}

pub(crate) async fn register_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    Json(credentials): Json<Credentials>,
) -> Response
where
    S: UserStore + 'static,
{
    match service.register(&credentials) {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(error @ (AccountError::EmailTaken | AccountError::MissingCredentials)) => {
            let payload = json!({ "detail": error.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => internal(other),
    }
}

/// Answers 200 whether or not the credentials match; callers read `status` in the body.
pub(crate) async fn login_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    Json(credentials): Json<Credentials>,
) -> Response
where
    S: UserStore + 'static,
{
    match service.login(&credentials) {
        Ok(_) => (StatusCode::OK, Json(json!({ "status": "success" }))).into_response(),
        Err(error @ (AccountError::InvalidCredentials | AccountError::MissingCredentials)) => {
            let payload = json!({
                "status": "error",
                "message": error.to_string(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(other) => internal(other),
    }
}

fn internal(error: AccountError) -> Response {
    let status = match &error {
        AccountError::Repository(RepositoryError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
