use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// JSON body attached to every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// API error taxonomy. Each variant maps to exactly one HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Store(e) => {
                error!(error = %e, "store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

impl ApiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ApiError::InvalidInput(msg.into())
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        ApiError::Unauthenticated(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        ApiError::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn variants_map_to_expected_statuses() {
        assert_eq!(
            status_of(ApiError::invalid_input("missing field")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::unauthenticated("no token")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApiError::forbidden("not owner")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(ApiError::not_found("no such recipe")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ApiError::Store(sqlx::Error::RowNotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_error_does_not_leak_detail() {
        let response = ApiError::Internal(anyhow::anyhow!("secret driver detail")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_serializes_with_message_key() {
        let body = ErrorBody {
            message: "Recipe not found".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"Recipe not found"}"#);
    }
}
