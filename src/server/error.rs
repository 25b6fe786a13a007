use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domain::AppError;

/// Error type for HTTP handlers.
///
/// Wraps [`AppError`] and implements [`IntoResponse`] to produce consistent JSON error bodies.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] AppError);

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self.0.kind() {
            io::ErrorKind::InvalidInput => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", self.0.to_string())
            }
            io::ErrorKind::InvalidData => {
                tracing::warn!(error = %self.0, "Refusing to overwrite stored document");
                (StatusCode::CONFLICT, "DOCUMENT_UNREADABLE", self.0.to_string())
            }
            _ => {
                tracing::error!(error = %self.0, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let response = ApiError::from(AppError::Validation("bad order".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_document_maps_to_conflict() {
        let err = AppError::MalformedDocument {
            path: "portfolio_data.json".into(),
            reason: "trailing comma".into(),
        };
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn io_errors_map_to_internal_error() {
        let err = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
