//! Prediction domain - validation, risk bucketing and results

mod result;
mod risk;
mod validation;

pub use result::{Indication, PredictionResult};
pub use risk::{
    format_confidence, RiskLevel, RiskThresholds, DEFAULT_HIGH_THRESHOLD,
    DEFAULT_MEDIUM_THRESHOLD,
};
pub use validation::{validate_features, FeatureVector, PredictionValidationError};
