//! Feature vector validation

use std::fmt;

use crate::domain::disease::DiseaseKey;

/// Prediction request validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionValidationError {
    /// Disease type is not one of the supported keys
    UnknownDisease { value: String },
    /// Symptom count does not match the model's input width
    FeatureCountMismatch {
        disease: DiseaseKey,
        expected: usize,
        actual: usize,
    },
    /// A symptom value is NaN or infinite
    NonFiniteFeature { index: usize },
}

impl PredictionValidationError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownDisease { .. } => "unknown_disease_type",
            Self::FeatureCountMismatch { .. } => "feature_count_mismatch",
            Self::NonFiniteFeature { .. } => "non_finite_feature",
        }
    }

    /// Request field the error refers to
    pub fn param(&self) -> &'static str {
        match self {
            Self::UnknownDisease { .. } => "disease_type",
            Self::FeatureCountMismatch { .. } | Self::NonFiniteFeature { .. } => "symptoms",
        }
    }
}

impl fmt::Display for PredictionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDisease { value } => {
                let supported: Vec<&str> = DiseaseKey::ALL.iter().map(|k| k.as_str()).collect();
                write!(
                    f,
                    "Invalid disease_type '{}'. Must be one of: {}",
                    value,
                    supported.join(", ")
                )
            }
            Self::FeatureCountMismatch {
                disease,
                expected,
                actual,
            } => write!(
                f,
                "Expected {} features for {}, but received {}",
                expected, disease, actual
            ),
            Self::NonFiniteFeature { index } => {
                write!(
                    f,
                    "Symptom at index {} must be a finite number within single-precision range",
                    index
                )
            }
        }
    }
}

impl std::error::Error for PredictionValidationError {}

/// Feature values that passed validation for a specific disease model.
///
/// Only [`validate_features`] builds one, so holding a `FeatureVector` means
/// its length matches the disease's expected feature count.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    disease: DiseaseKey,
    values: Vec<f32>,
}

impl FeatureVector {
    pub fn disease(&self) -> DiseaseKey {
        self.disease
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Validate a raw disease type and symptom list
pub fn validate_features(
    disease_type: &str,
    symptoms: &[f64],
) -> Result<FeatureVector, PredictionValidationError> {
    let disease: DiseaseKey = disease_type.parse()?;
    let expected = disease.expected_feature_count();

    if symptoms.len() != expected {
        return Err(PredictionValidationError::FeatureCountMismatch {
            disease,
            expected,
            actual: symptoms.len(),
        });
    }

    // Models take f32 input, so a finite f64 beyond f32 range is rejected too
    let values: Vec<f32> = symptoms.iter().map(|v| *v as f32).collect();

    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(PredictionValidationError::NonFiniteFeature { index });
    }

    Ok(FeatureVector { disease, values })
}
