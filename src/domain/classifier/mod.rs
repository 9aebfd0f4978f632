//! Classifier domain - the inference capability behind every disease model

use std::path::Path;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use super::disease::DiseaseKey;
use super::DomainError;

/// Raw output of a binary classifier for a single feature vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifierOutput {
    /// Predicted class, when the model reports one
    pub label: Option<i64>,
    /// Per-class probabilities, index 1 being the disease-present class
    pub probabilities: Vec<f64>,
}

impl ClassifierOutput {
    #[cfg(test)]
    pub fn from_probability(probability: f64) -> Self {
        Self {
            label: Some(i64::from(probability >= 0.5)),
            probabilities: vec![1.0 - probability, probability],
        }
    }

    /// Probability that the disease is present
    pub fn positive_probability(&self) -> Result<f64, DomainError> {
        let probability = match self.probabilities.as_slice() {
            [_, positive, ..] => *positive,
            [only] => *only,
            [] => match self.label {
                Some(label) if label != 0 => 1.0,
                Some(_) => 0.0,
                None => {
                    return Err(DomainError::inference(
                        "Model returned neither a class label nor probabilities",
                    ));
                }
            },
        };

        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(DomainError::inference(format!(
                "Model returned probability {} outside [0, 1]",
                probability
            )));
        }

        Ok(probability)
    }
}

/// A loaded model: a single inference operation from features to class output.
///
/// Implementations are shared read-only across concurrent requests.
#[cfg_attr(test, automock)]
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f32]) -> Result<ClassifierOutput, DomainError>;

    /// Name of the inference backend, for logs and status reporting
    fn backend_name(&self) -> &'static str;
}

/// Deserializes a model artifact into a [`Classifier`]
#[cfg_attr(test, automock)]
pub trait ModelLoader: Send + Sync {
    fn load(&self, disease: DiseaseKey, path: &Path) -> Result<Arc<dyn Classifier>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Classifier that always returns the same probability
    #[derive(Debug)]
    pub struct FixedClassifier {
        probability: f64,
        error: Option<String>,
    }

    impl FixedClassifier {
        pub fn new(probability: f64) -> Self {
            Self {
                probability,
                error: None,
            }
        }

        pub fn failing(error: impl Into<String>) -> Self {
            Self {
                probability: 0.0,
                error: Some(error.into()),
            }
        }
    }

    impl Classifier for FixedClassifier {
        fn predict(&self, _features: &[f32]) -> Result<ClassifierOutput, DomainError> {
            if let Some(ref error) = self.error {
                return Err(DomainError::inference(error));
            }

            Ok(ClassifierOutput::from_probability(self.probability))
        }

        fn backend_name(&self) -> &'static str {
            "fixed"
        }
    }
}
