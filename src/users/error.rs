use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),

    #[error("user with email '{0}' already exists")]
    AlreadyExists(String),

    #[error("user {0} not found")]
    NotFound(Uuid),

    #[error("storage error: {0}")]
    Io(#[from] sqlx::Error),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            UserError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            UserError::AlreadyExists(_) => (StatusCode::CONFLICT, "already_exists"),
            UserError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            UserError::Io(e) => {
                tracing::error!(error = %e, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let message = match &self {
            UserError::Io(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        (
            status,
            Json(json!({
                "error": {
                    "type": error_type,
                    "message": message
                }
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        let cases = [
            (UserError::Validation("name is required".into()), StatusCode::BAD_REQUEST),
            (UserError::AlreadyExists("a@b.com".into()), StatusCode::CONFLICT),
            (UserError::NotFound(Uuid::new_v4()), StatusCode::NOT_FOUND),
            (UserError::Io(sqlx::Error::PoolTimedOut), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn validation_message_is_passed_through() {
        let err = UserError::Validation("invalid email format".into());
        assert_eq!(err.to_string(), "invalid email format");
    }
}
