//! Prediction and model listing handlers

mod models;
mod predict;

pub use models::list_models;
pub use predict::predict;
