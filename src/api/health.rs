//! Health check endpoints for Kubernetes probes

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;
use crate::infrastructure::registry::ModelStatus;

use super::state::AppState;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthCheck {
    fn from_model_status(status: &ModelStatus) -> Self {
        Self {
            name: format!("{}_model", status.disease),
            status: if status.loaded {
                HealthStatus::Healthy
            } else {
                HealthStatus::Unhealthy
            },
            message: status.public_reason().map(str::to_string),
        }
    }
}

/// Returns 200 whenever the process is serving, whatever the model state
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check over the model registry.
///
/// All models loaded is healthy, some is degraded (still accepting
/// requests), none is unhealthy.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<HealthCheck> = state
        .registry
        .statuses()
        .iter()
        .map(HealthCheck::from_model_status)
        .collect();

    let overall_status = overall_status(&checks);

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - used by Kubernetes to detect crashes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

fn overall_status(checks: &[HealthCheck]) -> HealthStatus {
    let healthy = checks
        .iter()
        .filter(|check| check.status == HealthStatus::Healthy)
        .count();

    if healthy == checks.len() {
        HealthStatus::Healthy
    } else if healthy == 0 {
        HealthStatus::Unhealthy
    } else {
        HealthStatus::Degraded
    }
}
