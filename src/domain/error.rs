use thiserror::Error;

use super::disease::DiseaseKey;
use super::prediction::PredictionValidationError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] PredictionValidationError),

    #[error("Model not loaded: {disease}")]
    ModelUnavailable { disease: DiseaseKey },

    #[error("Failed to load model from {path}: {message}")]
    ModelLoad { path: String, message: String },

    #[error("Inference error: {message}")]
    Inference { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn model_unavailable(disease: DiseaseKey) -> Self {
        Self::ModelUnavailable { disease }
    }

    pub fn model_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ModelLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_unavailable_error() {
        let error = DomainError::model_unavailable(DiseaseKey::Heart);
        assert_eq!(error.to_string(), "Model not loaded: heart");
    }

    #[test]
    fn test_validation_error_wraps_cause() {
        let error: DomainError = PredictionValidationError::UnknownDisease {
            value: "flu".to_string(),
        }
        .into();

        assert!(matches!(error, DomainError::Validation(_)));
        assert!(error.to_string().starts_with("Validation error: "));
        assert!(error.to_string().contains("flu"));
    }

    #[test]
    fn test_model_load_error() {
        let error = DomainError::model_load("datasets/heart_model.onnx", "file not found");
        assert_eq!(
            error.to_string(),
            "Failed to load model from datasets/heart_model.onnx: file not found"
        );
    }
}
