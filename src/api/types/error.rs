//! JSON error envelope returned by every failing endpoint

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

/// Error categories exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    NotFoundError,
    ServerError,
    ServiceUnavailableError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ServerError => write!(f, "server_error"),
            Self::ServiceUnavailableError => write!(f, "service_unavailable_error"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            },
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorType::ServiceUnavailableError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(cause) => Self::bad_request(cause.to_string())
                .with_param(cause.param())
                .with_code(cause.code()),
            DomainError::ModelUnavailable { disease } => Self::unavailable(format!(
                "Model for '{}' is not loaded. Check the server logs for the load error.",
                disease
            ))
            .with_param("disease_type")
            .with_code("model_not_loaded"),
            DomainError::ModelLoad { .. } => {
                error!(error = %err, "Model load error reached the API boundary");
                Self::unavailable("Model is not available").with_code("model_not_loaded")
            }
            DomainError::Inference { .. } => {
                error!(error = %err, "Inference failed");
                Self::internal("Prediction failed").with_code("inference_error")
            }
            DomainError::Configuration { .. } | DomainError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self::internal("Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DiseaseKey, PredictionValidationError};

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid disease_type");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.error_type, ApiErrorType::InvalidRequestError);
        assert_eq!(err.response.error.message, "Invalid disease_type");
    }

    #[test]
    fn test_validation_error_conversion() {
        let domain_err = DomainError::from(PredictionValidationError::FeatureCountMismatch {
            disease: DiseaseKey::Diabetes,
            expected: 8,
            actual: 7,
        });
        let api_err: ApiError = domain_err.into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.response.error.param.as_deref(), Some("symptoms"));
        assert_eq!(
            api_err.response.error.code.as_deref(),
            Some("feature_count_mismatch")
        );
        assert_eq!(
            api_err.response.error.message,
            "Expected 8 features for diabetes, but received 7"
        );
    }

    #[test]
    fn test_model_unavailable_conversion() {
        let api_err: ApiError = DomainError::model_unavailable(DiseaseKey::Parkinson).into();

        assert_eq!(api_err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            api_err.response.error.error_type,
            ApiErrorType::ServiceUnavailableError
        );
        assert!(api_err.response.error.message.contains("parkinson"));
    }

    #[test]
    fn test_inference_error_hides_details() {
        let api_err: ApiError =
            DomainError::inference("tract: shape mismatch at node 42").into();

        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.response.error.message, "Prediction failed");
        assert!(!api_err.response.error.message.contains("node 42"));
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::unavailable("Model not loaded").with_code("model_not_loaded");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("\"type\":\"service_unavailable_error\""));
        assert!(json.contains("\"code\":\"model_not_loaded\""));
        assert!(!json.contains("param"));
    }
}
