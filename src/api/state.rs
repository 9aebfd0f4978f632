//! Application state shared by the handlers

use std::sync::Arc;

use crate::domain::RiskThresholds;
use crate::infrastructure::registry::ModelRegistry;
use crate::infrastructure::services::PredictionService;

#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<PredictionService>,
    pub registry: Arc<ModelRegistry>,
}

impl AppState {
    pub fn new(registry: ModelRegistry, thresholds: RiskThresholds) -> Self {
        let registry = Arc::new(registry);
        let prediction_service = Arc::new(PredictionService::new(registry.clone(), thresholds));

        Self {
            prediction_service,
            registry,
        }
    }
}
