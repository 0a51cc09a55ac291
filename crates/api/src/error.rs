use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce a JSON error response. Persistence
/// failures are deliberately not translated into domain-specific errors:
/// a duplicate-key violation on insert and an unreachable database both
/// surface as the same undifferentiated server fault. Absent keys never
/// reach this type (they are sentinel results at the repository layer).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Database(err) = &self;
        tracing::error!(error = %err, "Database error");

        let body = json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
