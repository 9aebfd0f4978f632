use serde::{Deserialize, Serialize};

use super::risk::{format_confidence, RiskLevel, RiskThresholds};
use crate::domain::disease::DiseaseKey;

/// Whether the model's predicted class indicates the disease
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indication {
    Positive,
    Negative,
}

impl Indication {
    /// Use the predicted class when the model reports one, otherwise fall
    /// back to a 0.5 cut on the probability.
    pub fn from_output(label: Option<i64>, probability: f64) -> Self {
        let positive = match label {
            Some(label) => label != 0,
            None => probability >= 0.5,
        };

        if positive { Self::Positive } else { Self::Negative }
    }
}

/// Outcome of a single prediction
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub disease: DiseaseKey,
    pub predicted_disease: &'static str,
    pub risk_level: RiskLevel,
    pub probability: f64,
    pub confidence: String,
    pub indication: Indication,
}

impl PredictionResult {
    pub fn new(
        disease: DiseaseKey,
        probability: f64,
        label: Option<i64>,
        thresholds: &RiskThresholds,
    ) -> Self {
        Self {
            disease,
            predicted_disease: disease.label(),
            risk_level: thresholds.classify(probability),
            probability,
            confidence: format_confidence(probability),
            indication: Indication::from_output(label, probability),
        }
    }
}
