//! Error types for the HTTP layer.
//!
//! Every failure, whatever its origin, is answered with `400 Bad Request`
//! and the underlying message in an error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ppms_core::ServiceError;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::debug;

use crate::responses;

/// The error type for API handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body could not be decoded.
    #[error("{0}")]
    Decode(String),

    /// The service rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The blocking task running the service call did not complete.
    #[error("{0}")]
    Task(String),
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<JoinError> for ApiError {
    fn from(e: JoinError) -> Self {
        ApiError::Task(e.to_string())
    }
}

impl ApiError {
    /// The HTTP status for this error. Always 400.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        debug!(status = %status, error = %self, "Request failed");
        responses::error(status, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_is_bad_request() {
        let errors = [
            ApiError::Decode("EOF while parsing".into()),
            ApiError::Service(ServiceError::Validation("invalid id")),
            ApiError::Service(ServiceError::NotFound(3)),
            ApiError::Service(ServiceError::Persistence("disk I/O error".into())),
            ApiError::Task("task panicked".into()),
        ];
        for error in errors {
            assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_service_message_passes_through() {
        let error = ApiError::from(ServiceError::Validation("invalid name"));
        assert_eq!(error.to_string(), "invalid name");
    }

    #[test]
    fn test_json_error_is_decode() {
        let err = serde_json::from_slice::<serde_json::Value>(b"{\"name\": ").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_panicked_task_is_bad_request() {
        let join_error = tokio::task::spawn_blocking::<_, ()>(|| panic!("boom"))
            .await
            .unwrap_err();
        let response = ApiError::from(join_error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
