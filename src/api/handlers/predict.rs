use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PredictionRequest, PredictionResponse};

/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    debug!(
        disease_type = %request.disease_type,
        feature_count = request.symptoms.len(),
        "Prediction requested"
    );

    let result = state
        .prediction_service
        .predict(&request.disease_type, &request.symptoms)
        .await?;

    Ok(Json(PredictionResponse::from_domain(&result)))
}
