//! Domain layer - Core business logic and entities

pub mod classifier;
pub mod disease;
pub mod error;
pub mod prediction;

pub use classifier::{Classifier, ClassifierOutput, ModelLoader};
pub use disease::DiseaseKey;
pub use error::DomainError;
pub use prediction::{
    format_confidence, validate_features, FeatureVector, Indication, PredictionResult,
    PredictionValidationError, RiskLevel, RiskThresholds,
};
