//! Request, response and error bodies of the HTTP API

pub mod error;
pub mod json;
pub mod models;
pub mod prediction;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use models::{ModelInfo, ModelsResponse};
pub use prediction::{PredictionRequest, PredictionResponse};
