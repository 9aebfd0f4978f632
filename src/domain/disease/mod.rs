//! Disease domain - the fixed set of supported disease models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::prediction::PredictionValidationError;

const DIABETES_FEATURES: [&str; 8] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

const HEART_FEATURES: [&str; 13] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

const PARKINSON_FEATURES: [&str; 22] = [
    "MDVP:Fo(Hz)",
    "MDVP:Fhi(Hz)",
    "MDVP:Flo(Hz)",
    "MDVP:Jitter(%)",
    "MDVP:Jitter(Abs)",
    "MDVP:RAP",
    "MDVP:PPQ",
    "Jitter:DDP",
    "MDVP:Shimmer",
    "MDVP:Shimmer(dB)",
    "Shimmer:APQ3",
    "Shimmer:APQ5",
    "MDVP:APQ",
    "Shimmer:DDA",
    "NHR",
    "HNR",
    "RPDE",
    "DFA",
    "spread1",
    "spread2",
    "D2",
    "PPE",
];

/// Disease key identifying which predictive model to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseKey {
    Diabetes,
    Heart,
    Parkinson,
}

impl DiseaseKey {
    /// Every supported disease, in registry order
    pub const ALL: [DiseaseKey; 3] = [Self::Diabetes, Self::Heart, Self::Parkinson];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Heart => "heart",
            Self::Parkinson => "parkinson",
        }
    }

    /// Number of features the model for this disease was trained on
    pub fn expected_feature_count(&self) -> usize {
        self.feature_names().len()
    }

    /// Human-readable label returned with every prediction
    pub fn label(&self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes Risk Assessment",
            Self::Heart => "Heart Disease Risk Assessment",
            Self::Parkinson => "Parkinson's Risk Assessment",
        }
    }

    /// Ordered symptom field names, matching the model's input columns
    pub fn feature_names(&self) -> &'static [&'static str] {
        match self {
            Self::Diabetes => &DIABETES_FEATURES,
            Self::Heart => &HEART_FEATURES,
            Self::Parkinson => &PARKINSON_FEATURES,
        }
    }
}

impl fmt::Display for DiseaseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiseaseKey {
    type Err = PredictionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| PredictionValidationError::UnknownDisease {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_feature_counts() {
        assert_eq!(DiseaseKey::Diabetes.expected_feature_count(), 8);
        assert_eq!(DiseaseKey::Heart.expected_feature_count(), 13);
        assert_eq!(DiseaseKey::Parkinson.expected_feature_count(), 22);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DiseaseKey::Diabetes.label(), "Diabetes Risk Assessment");
        assert_eq!(DiseaseKey::Heart.label(), "Heart Disease Risk Assessment");
        assert_eq!(DiseaseKey::Parkinson.label(), "Parkinson's Risk Assessment");
    }

    #[test]
    fn test_parse_known_keys() {
        for key in DiseaseKey::ALL {
            assert_eq!(key.as_str().parse::<DiseaseKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        let err = "Heart".parse::<DiseaseKey>().unwrap_err();
        assert_eq!(
            err,
            PredictionValidationError::UnknownDisease {
                value: "Heart".to_string()
            }
        );
        assert!("flu".parse::<DiseaseKey>().is_err());
        assert!("".parse::<DiseaseKey>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&DiseaseKey::Parkinson).unwrap(),
            "\"parkinson\""
        );
    }
}
