//! ONNX classifier backend built on tract.
//!
//! Artifacts are scikit-learn classifiers exported with `skl2onnx` and the
//! ZipMap post-processor disabled, so the graph yields a `[1]` int64 label
//! tensor and a `[1, n_classes]` float probability tensor.

use std::path::Path;
use std::sync::Arc;

use tract_onnx::prelude::*;
use tracing::debug;

use crate::domain::{Classifier, ClassifierOutput, DiseaseKey, DomainError, ModelLoader};

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// A runnable ONNX graph with a fixed `[1, feature_count]` float input
pub struct OnnxClassifier {
    plan: OnnxPlan,
    feature_count: usize,
}

impl OnnxClassifier {
    pub fn load(path: &Path, feature_count: usize) -> TractResult<Self> {
        let plan = tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, feature_count)),
            )?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self {
            plan,
            feature_count,
        })
    }

    fn run(&self, features: &[f32]) -> TractResult<ClassifierOutput> {
        let input = Tensor::from_shape(&[1, self.feature_count], features)?;
        let outputs = self.plan.run(tvec!(input.into()))?;

        let mut output = ClassifierOutput::default();

        for value in outputs.iter() {
            if output.label.is_none() && value.datum_type() == i64::datum_type() {
                output.label = value.to_array_view::<i64>()?.iter().next().copied();
            } else if output.probabilities.is_empty() && value.datum_type() == f32::datum_type() {
                output.probabilities = value
                    .to_array_view::<f32>()?
                    .iter()
                    .map(|p| f64::from(*p))
                    .collect();
            }
        }

        Ok(output)
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f32]) -> Result<ClassifierOutput, DomainError> {
        if features.len() != self.feature_count {
            return Err(DomainError::inference(format!(
                "Model expects {} features, got {}",
                self.feature_count,
                features.len()
            )));
        }

        self.run(features)
            .map_err(|e| DomainError::inference(format!("{:#}", e)))
    }

    fn backend_name(&self) -> &'static str {
        "onnx"
    }
}

/// Loads `.onnx` artifacts, sizing the input to the disease's feature count
#[derive(Debug, Default, Clone, Copy)]
pub struct OnnxModelLoader;

impl ModelLoader for OnnxModelLoader {
    fn load(&self, disease: DiseaseKey, path: &Path) -> Result<Arc<dyn Classifier>, DomainError> {
        let display_path = path.display().to_string();

        if !path.exists() {
            return Err(DomainError::model_load(
                display_path,
                format!(
                    "file not found; place '{}' there or set APP__MODELS__{}",
                    path.file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    disease.as_str().to_uppercase()
                ),
            ));
        }

        debug!(disease = %disease, path = %display_path, "Loading ONNX model");

        let classifier = OnnxClassifier::load(path, disease.expected_feature_count())
            .map_err(|e| DomainError::model_load(&display_path, format!("{:#}", e)))?;

        Ok(Arc::new(classifier))
    }
}
