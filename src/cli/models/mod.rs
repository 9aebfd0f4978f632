//! Models command - loads the configured artifacts and reports their status

use anyhow::Context;
use clap::Args;
use serde_json::json;

use crate::api::types::ModelInfo;
use crate::config::AppConfig;
use crate::infrastructure::classifier::OnnxModelLoader;
use crate::infrastructure::observability::init_tracing;
use crate::infrastructure::registry::{ModelRegistry, ModelStatus};

#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with an error unless every model loads
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ModelsArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging, &config.observability.tracing);

    let registry = ModelRegistry::load(&config.models, &OnnxModelLoader);
    let statuses = registry.statuses();

    if args.json {
        let models: Vec<ModelInfo> = statuses.iter().map(ModelInfo::from_status).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "available_models": models }))?
        );
    } else {
        for status in &statuses {
            println!("{}", format_status(status));
        }
    }

    let failed = statuses.iter().filter(|s| !s.loaded).count();
    if args.strict && failed > 0 {
        anyhow::bail!("{} of {} models failed to load", failed, statuses.len());
    }

    Ok(())
}

fn format_status(status: &ModelStatus) -> String {
    let state = if status.loaded { "loaded" } else { "FAILED" };
    let line = format!(
        "{:<10} {:<7} {:>2} features  {}",
        status.disease.as_str(),
        state,
        status.disease.expected_feature_count(),
        status.artifact.display()
    );

    match &status.error {
        Some(error) => format!("{}\n           {}", line, error),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::DiseaseKey;

    #[test]
    fn test_format_loaded() {
        let line = format_status(&ModelStatus {
            disease: DiseaseKey::Heart,
            artifact: PathBuf::from("datasets/heart_model.onnx"),
            loaded: true,
            error: None,
        });

        assert!(line.starts_with("heart"));
        assert!(line.contains("loaded"));
        assert!(line.contains("13 features"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_format_failed() {
        let line = format_status(&ModelStatus {
            disease: DiseaseKey::Parkinson,
            artifact: PathBuf::from("missing.onnx"),
            loaded: false,
            error: Some("file not found".to_string()),
        });

        assert!(line.contains("FAILED"));
        assert!(line.ends_with("file not found"));
    }
}
