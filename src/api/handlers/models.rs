use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{Json, ModelInfo, ModelsResponse};

/// GET /models
pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let models = state
        .registry
        .statuses()
        .iter()
        .map(ModelInfo::from_status)
        .collect();

    Json(ModelsResponse::new(models))
}
