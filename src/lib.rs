//! Disease Risk API
//!
//! Serves pre-trained diabetes, heart disease and Parkinson's classifiers
//! over HTTP:
//! - Models loaded once at start-up; a missing artifact disables only its disease
//! - Feature validation before any model invocation
//! - Low/Medium/High risk bucketing with configurable thresholds

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::classifier::OnnxModelLoader;
use infrastructure::registry::ModelRegistry;
use tracing::{info, warn};

/// Load every configured model and build the application state.
///
/// Fails only on invalid configuration; model load failures leave the
/// affected disease unavailable.
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    config.validate()?;
    let thresholds = config.risk.thresholds()?;
    let registry = ModelRegistry::load(&config.models, &OnnxModelLoader);

    match registry.loaded_count() {
        0 => warn!("No models loaded; every prediction will be rejected"),
        n => info!(
            loaded = n,
            medium_threshold = thresholds.medium(),
            high_threshold = thresholds.high(),
            "Model registry ready"
        ),
    }

    Ok(AppState::new(registry, thresholds))
}
