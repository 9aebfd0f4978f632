//! Risk bucketing of model probabilities

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Default lower bound of the Medium bucket
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 0.4;

/// Default upper bound of the Medium bucket; anything above is High
pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.7;

/// Ordinal risk level derived from a model's confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probability cut-offs between risk levels.
///
/// `p < medium` is Low, `medium <= p <= high` is Medium, `p > high` is High.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    medium: f64,
    high: f64,
}

impl RiskThresholds {
    pub fn new(medium: f64, high: f64) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&medium) || !(0.0..=1.0).contains(&high) {
            return Err(DomainError::configuration(format!(
                "Risk thresholds must be within [0, 1] (medium: {}, high: {})",
                medium, high
            )));
        }

        if medium > high {
            return Err(DomainError::configuration(format!(
                "Medium risk threshold {} exceeds high risk threshold {}",
                medium, high
            )));
        }

        Ok(Self { medium, high })
    }

    pub fn medium(&self) -> f64 {
        self.medium
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn classify(&self, probability: f64) -> RiskLevel {
        if probability < self.medium {
            RiskLevel::Low
        } else if probability > self.high {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            medium: DEFAULT_MEDIUM_THRESHOLD,
            high: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

/// Format a probability as a one-decimal percentage, e.g. `0.85` -> `"85.0%"`
pub fn format_confidence(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}
