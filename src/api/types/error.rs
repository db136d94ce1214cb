//! API error envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::query::FieldError;
use crate::domain::DomainError;

/// Machine-readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    InvalidQueryParams,
    InvalidRequest,
    Unauthorized,
    NotFound,
    ServerError,
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQueryParams => write!(f, "invalid_query_params"),
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::NotFound => write!(f, "not_found"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error response body: `{ "error": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: ApiErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field-level problems, for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    code,
                    message: Some(message.into()),
                    errors: None,
                },
            },
        }
    }

    /// Rejected query string, carrying every offending field
    pub fn invalid_query_params(errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    code: ApiErrorCode::InvalidQueryParams,
                    message: None,
                    errors: Some(errors),
                },
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorCode::InvalidRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiErrorCode::Unauthorized, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorCode::NotFound, message)
    }

    /// Generic server failure; the cause stays in the logs
    pub fn server_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorCode::ServerError,
            "An unexpected error occurred",
        )
    }

    pub fn code(&self) -> ApiErrorCode {
        self.response.error.code
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Configuration { .. }
            | DomainError::Internal { .. }
            | DomainError::Storage { .. } => {
                error!(error = %err, "Request failed");
                Self::server_error()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.response.error.message {
            Some(message) => write!(f, "{}: {}", self.response.error.code, message),
            None => write!(f, "{}", self.response.error.code),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_query_params_shape() {
        let err = ApiError::invalid_query_params(vec![FieldError::unrecognized_key("foo")]);
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "invalid_query_params");
        assert_eq!(json["error"]["errors"][0]["path"][0], "foo");
        assert!(json["error"].get("message").is_none());
    }

    #[test]
    fn test_unauthorized_shape() {
        let err = ApiError::unauthorized("Missing token");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json["error"]["code"], "unauthorized");
        assert_eq!(json["error"]["message"], "Missing token");
        assert!(json["error"].get("errors").is_none());
    }

    #[test]
    fn test_storage_error_is_not_leaked() {
        let api_err: ApiError = DomainError::storage("password=hunter2 host=db").into();
        let json = serde_json::to_string(&api_err.response).unwrap();

        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.code(), ApiErrorCode::ServerError);
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn test_domain_error_conversion() {
        let not_found: ApiError = DomainError::not_found("Account '7' not found").into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);

        let validation: ApiError = DomainError::validation("bad").into();
        assert_eq!(validation.status, StatusCode::BAD_REQUEST);

        let internal: ApiError = DomainError::internal("boom").into();
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::not_found("gone").to_string(),
            "not_found: gone"
        );
        assert_eq!(
            ApiError::invalid_query_params(vec![]).to_string(),
            "invalid_query_params"
        );
    }
}
