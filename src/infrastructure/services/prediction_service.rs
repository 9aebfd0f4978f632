//! Prediction service - validate, infer, bucket

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error};

use crate::domain::{validate_features, DomainError, PredictionResult, RiskThresholds};
use crate::infrastructure::observability::record_prediction;
use crate::infrastructure::registry::ModelRegistry;

/// Runs the validator, the disease model and the risk classifier in sequence
pub struct PredictionService {
    registry: Arc<ModelRegistry>,
    thresholds: RiskThresholds,
}

impl PredictionService {
    pub fn new(registry: Arc<ModelRegistry>, thresholds: RiskThresholds) -> Self {
        Self {
            registry,
            thresholds,
        }
    }

    pub fn registry(&self) -> &Arc<ModelRegistry> {
        &self.registry
    }

    pub async fn predict(
        &self,
        disease_type: &str,
        symptoms: &[f64],
    ) -> Result<PredictionResult, DomainError> {
        let features = validate_features(disease_type, symptoms)?;
        let disease = features.disease();
        let classifier = self.registry.get(disease)?.classifier.clone();

        debug!(disease = %disease, "Running model inference");

        let start = Instant::now();
        let output = tokio::task::spawn_blocking(move || classifier.predict(features.values()))
            .await
            .map_err(|e| DomainError::internal(format!("Inference task failed: {}", e)))
            .and_then(|result| result)
            .and_then(|output| {
                let probability = output.positive_probability()?;
                Ok((output.label, probability))
            });

        match output {
            Ok((label, probability)) => {
                let result = PredictionResult::new(disease, probability, label, &self.thresholds);
                record_prediction(disease, Some(result.risk_level), start.elapsed());

                debug!(
                    disease = %disease,
                    probability = probability,
                    risk_level = %result.risk_level,
                    "Prediction complete"
                );

                Ok(result)
            }
            Err(e) => {
                record_prediction(disease, None, start.elapsed());
                error!(disease = %disease, error = %e, "Prediction failed");
                Err(e)
            }
        }
    }
}
