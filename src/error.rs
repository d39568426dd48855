//! Error types shared by every route handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::ErrorBody;

/// Error type for request handling.
///
/// Validators and guards fail early with the 4xx variants; handlers forward
/// store failures with `?` and perform no local recovery. The
/// [`IntoResponse`] impl is the single place errors become HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Input payload failed schema validation.
    Validation(Vec<String>),
    /// A required path parameter was missing or empty.
    BadRequest(String),
    /// A referenced entity does not exist.
    NotFound(String),
    /// An underlying store operation failed, unclassified.
    Store(redis::RedisError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(violations) => write!(f, "{}", violations.join("; ")),
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::Store(e) => write!(f, "store operation failed: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<redis::RedisError> for ApiError {
    fn from(err: redis::RedisError) -> Self {
        ApiError::Store(err)
    }
}

impl ApiError {
    /// Maps this error to its HTTP status.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(e) = &self {
            tracing::error!("Store operation failed: {}", e);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_variant() {
        assert_eq!(
            ApiError::Validation(vec!["bad".to_string()]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BadRequest("missing".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("gone".to_string()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_validation_display_joins_violations() {
        let err = ApiError::Validation(vec![
            "name must be a non-empty string".to_string(),
            "cuisines must contain at least one entry".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "name must be a non-empty string; cuisines must contain at least one entry"
        );
    }

    #[test]
    fn test_not_found_becomes_404_response() {
        let response = ApiError::NotFound("Restaurant not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_becomes_400_response() {
        let response = ApiError::BadRequest("Restaurant ID not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
