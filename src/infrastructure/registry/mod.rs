//! Model registry - the process-wide set of loaded disease models

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ModelsConfig;
use crate::domain::{Classifier, DiseaseKey, DomainError, ModelLoader};
use crate::infrastructure::observability::record_model_loaded;

/// A loaded model, immutable for the lifetime of the process
#[derive(Clone)]
pub struct ModelEntry {
    pub disease: DiseaseKey,
    pub expected_feature_count: usize,
    pub artifact: PathBuf,
    pub classifier: Arc<dyn Classifier>,
}

/// Load status of one disease model, for readiness and listing endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct ModelStatus {
    pub disease: DiseaseKey,
    pub artifact: PathBuf,
    pub loaded: bool,
    /// Full load failure, for logs and the operator CLI
    pub error: Option<String>,
}

pub const LOAD_FAILED_REASON: &str = "Model failed to load; see server logs";
pub const NOT_CONFIGURED_REASON: &str = "Model not configured";

impl ModelStatus {
    /// Short failure reason safe to return to HTTP clients
    pub fn public_reason(&self) -> Option<&'static str> {
        if self.loaded {
            None
        } else if self.artifact.as_os_str().is_empty() {
            Some(NOT_CONFIGURED_REASON)
        } else {
            Some(LOAD_FAILED_REASON)
        }
    }
}

/// Registry of disease models.
///
/// Built once at start-up. A key whose artifact failed to load is absent and
/// every lookup for it returns [`DomainError::ModelUnavailable`].
pub struct ModelRegistry {
    entries: BTreeMap<DiseaseKey, ModelEntry>,
    failures: BTreeMap<DiseaseKey, (PathBuf, String)>,
}

impl ModelRegistry {
    /// Load one artifact per disease key, recording failures instead of aborting
    pub fn load(config: &ModelsConfig, loader: &dyn ModelLoader) -> Self {
        let mut builder = ModelRegistryBuilder::default();

        for disease in DiseaseKey::ALL {
            let path = config.path_for(disease);

            match loader.load(disease, path) {
                Ok(classifier) => {
                    info!(
                        disease = %disease,
                        path = %path.display(),
                        backend = classifier.backend_name(),
                        "Loaded model"
                    );
                    builder = builder.with_classifier(disease, path, classifier);
                }
                Err(e) => {
                    warn!(
                        disease = %disease,
                        path = %path.display(),
                        error = %e,
                        "Model unavailable; predictions for this disease will be rejected"
                    );
                    builder = builder.with_failure(disease, path, e.to_string());
                }
            }

            record_model_loaded(disease, builder.entries.contains_key(&disease));
        }

        builder.build()
    }

    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::default()
    }

    pub fn get(&self, disease: DiseaseKey) -> Result<&ModelEntry, DomainError> {
        self.entries
            .get(&disease)
            .ok_or_else(|| DomainError::model_unavailable(disease))
    }

    pub fn is_loaded(&self, disease: DiseaseKey) -> bool {
        self.entries.contains_key(&disease)
    }

    pub fn loaded_count(&self) -> usize {
        self.entries.len()
    }

    /// Status of every supported disease, in key order
    pub fn statuses(&self) -> Vec<ModelStatus> {
        DiseaseKey::ALL
            .into_iter()
            .map(|disease| match (self.entries.get(&disease), self.failures.get(&disease)) {
                (Some(entry), _) => ModelStatus {
                    disease,
                    artifact: entry.artifact.clone(),
                    loaded: true,
                    error: None,
                },
                (None, Some((artifact, error))) => ModelStatus {
                    disease,
                    artifact: artifact.clone(),
                    loaded: false,
                    error: Some(error.clone()),
                },
                (None, None) => ModelStatus {
                    disease,
                    artifact: PathBuf::new(),
                    loaded: false,
                    error: Some(NOT_CONFIGURED_REASON.to_string()),
                },
            })
            .collect()
    }
}

/// Assembles a [`ModelRegistry`] from already-loaded classifiers
#[derive(Default)]
pub struct ModelRegistryBuilder {
    entries: BTreeMap<DiseaseKey, ModelEntry>,
    failures: BTreeMap<DiseaseKey, (PathBuf, String)>,
}

impl ModelRegistryBuilder {
    pub fn with_classifier(
        mut self,
        disease: DiseaseKey,
        artifact: impl AsRef<Path>,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        self.failures.remove(&disease);
        self.entries.insert(
            disease,
            ModelEntry {
                disease,
                expected_feature_count: disease.expected_feature_count(),
                artifact: artifact.as_ref().to_path_buf(),
                classifier,
            },
        );
        self
    }

    pub fn with_failure(
        mut self,
        disease: DiseaseKey,
        artifact: impl AsRef<Path>,
        error: impl Into<String>,
    ) -> Self {
        self.entries.remove(&disease);
        self.failures
            .insert(disease, (artifact.as_ref().to_path_buf(), error.into()));
        self
    }

    pub fn build(self) -> ModelRegistry {
        ModelRegistry {
            entries: self.entries,
            failures: self.failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::mock::FixedClassifier;
    use crate::domain::classifier::MockModelLoader;

    #[test]
    fn test_load_marks_failed_artifact_unavailable() {
        let mut loader = MockModelLoader::new();
        loader.expect_load().times(3).returning(|disease, path| {
            if disease == DiseaseKey::Parkinson {
                Err(DomainError::model_load(path.display().to_string(), "file not found"))
            } else {
                let classifier: Arc<dyn Classifier> = Arc::new(FixedClassifier::new(0.5));
                Ok(classifier)
            }
        });

        let registry = ModelRegistry::load(&ModelsConfig::default(), &loader);

        assert_eq!(registry.loaded_count(), 2);
        assert!(registry.is_loaded(DiseaseKey::Diabetes));
        assert!(registry.is_loaded(DiseaseKey::Heart));
        assert!(matches!(
            registry.get(DiseaseKey::Parkinson),
            Err(DomainError::ModelUnavailable {
                disease: DiseaseKey::Parkinson
            })
        ));
    }

    #[test]
    fn test_load_uses_configured_paths() {
        let mut loader = MockModelLoader::new();
        loader
            .expect_load()
            .withf(|disease, path| {
                *disease != DiseaseKey::Heart || path == Path::new("/srv/heart.onnx")
            })
            .times(3)
            .returning(|_, _| {
                let classifier: Arc<dyn Classifier> = Arc::new(FixedClassifier::new(0.1));
                Ok(classifier)
            });

        let config = ModelsConfig {
            heart: PathBuf::from("/srv/heart.onnx"),
            ..ModelsConfig::default()
        };
        let registry = ModelRegistry::load(&config, &loader);

        let entry = registry.get(DiseaseKey::Heart).unwrap();
        assert_eq!(entry.artifact, PathBuf::from("/srv/heart.onnx"));
        assert_eq!(entry.expected_feature_count, 13);
    }

    #[test]
    fn test_statuses_report_every_disease() {
        let registry = ModelRegistry::builder()
            .with_classifier(
                DiseaseKey::Diabetes,
                "datasets/diabetes_model.onnx",
                Arc::new(FixedClassifier::new(0.2)),
            )
            .with_failure(DiseaseKey::Heart, "datasets/heart_model.onnx", "corrupt")
            .build();

        let statuses = registry.statuses();

        assert_eq!(statuses.len(), 3);
        assert!(statuses[0].loaded);
        assert_eq!(statuses[1].error.as_deref(), Some("corrupt"));
        assert!(!statuses[2].loaded);
        assert_eq!(statuses[2].error.as_deref(), Some("Model not configured"));
    }

    #[test]
    fn test_public_reason_hides_load_error() {
        let registry = ModelRegistry::builder()
            .with_classifier(
                DiseaseKey::Diabetes,
                "datasets/diabetes_model.onnx",
                Arc::new(FixedClassifier::new(0.2)),
            )
            .with_failure(
                DiseaseKey::Heart,
                "/opt/models/heart_model.onnx",
                "Failed to load model from /opt/models/heart_model.onnx: invalid wire type",
            )
            .build();

        let statuses = registry.statuses();

        assert_eq!(statuses[0].public_reason(), None);
        assert_eq!(statuses[1].public_reason(), Some(LOAD_FAILED_REASON));
        assert!(statuses[1].error.as_deref().unwrap().contains("invalid wire type"));
        assert_eq!(statuses[2].public_reason(), Some(NOT_CONFIGURED_REASON));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ModelRegistry::builder().build();

        assert_eq!(registry.loaded_count(), 0);
        for disease in DiseaseKey::ALL {
            assert!(registry.get(disease).is_err());
        }
    }
}
