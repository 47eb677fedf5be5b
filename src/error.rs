use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl AppError {
    /// Validation and not-found errors answer 200 with the error payload.
    /// Database errors keep their 500.
    pub fn into_legacy_response(self) -> Response {
        match self {
            AppError::Validation(cause) => {
                tracing::debug!(%cause, "rejected write");
                (StatusCode::OK, Json(json!({ "errors": ["validation errors"] }))).into_response()
            },
            AppError::NotFound(kind) => {
                (StatusCode::OK, Json(json!({ "errors": format!("{kind} not found") })))
                    .into_response()
            },
            other => other.into_response(),
        }
    }

    pub fn respond(self, legacy: bool) -> Response {
        if legacy { self.into_legacy_response() } else { self.into_response() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(cause) => {
                tracing::debug!(%cause, "rejected write");
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": ["validation errors"] })))
                    .into_response()
            },
            AppError::NotFound(kind) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": format!("{kind} not found") })))
                    .into_response()
            },
            AppError::Db(err) => {
                tracing::error!(error = %err, "database error");
                let body = json!({ "error": "internal server error" });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
