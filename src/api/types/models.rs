//! Model listing types

use serde::{Deserialize, Serialize};

use crate::infrastructure::registry::ModelStatus;

/// One disease model as reported by `GET /models`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(rename = "type")]
    pub disease_type: String,
    pub file: String,
    pub loaded: bool,
    pub feature_count: usize,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModelInfo {
    pub fn from_status(status: &ModelStatus) -> Self {
        Self {
            disease_type: status.disease.as_str().to_string(),
            file: status.artifact.display().to_string(),
            loaded: status.loaded,
            feature_count: status.disease.expected_feature_count(),
            features: status
                .disease
                .feature_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
            error: status.public_reason().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub available_models: Vec<ModelInfo>,
}

impl ModelsResponse {
    pub fn new(models: Vec<ModelInfo>) -> Self {
        Self {
            available_models: models,
        }
    }
}
