use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::api::router::API_ROUTES;
use crate::domain::prediction::{DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD};
use crate::domain::{DiseaseKey, DomainError, RiskThresholds};
use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub risk: RiskConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API from a browser; empty allows any
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Locations of the serialized model artifacts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub diabetes: PathBuf,
    pub heart: PathBuf,
    pub parkinson: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub medium_threshold: f64,
    pub high_threshold: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            diabetes: PathBuf::from("datasets/diabetes_model.onnx"),
            heart: PathBuf::from("datasets/heart_model.onnx"),
            parkinson: PathBuf::from("datasets/parkinson_model.onnx"),
        }
    }
}

impl ModelsConfig {
    pub fn path_for(&self, disease: DiseaseKey) -> &Path {
        match disease {
            DiseaseKey::Diabetes => &self.diabetes,
            DiseaseKey::Heart => &self.heart,
            DiseaseKey::Parkinson => &self.parkinson,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            medium_threshold: DEFAULT_MEDIUM_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl RiskConfig {
    pub fn thresholds(&self) -> Result<RiskThresholds, DomainError> {
        RiskThresholds::new(self.medium_threshold, self.high_threshold)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Check the settings that can only fail once the server is assembled
    pub fn validate(&self) -> Result<(), DomainError> {
        self.risk.thresholds()?;
        self.observability.validate(API_ROUTES)
    }
}
