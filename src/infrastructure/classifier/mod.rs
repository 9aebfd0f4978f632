//! Classifier backends

mod onnx;

pub use onnx::{OnnxClassifier, OnnxModelLoader};
