//! Tracing export and Prometheus endpoint settings

use serde::Deserialize;

use crate::domain::DomainError;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub tracing: TracingConfig,
    pub metrics: MetricsConfig,
}

/// OTLP span export, off unless a collector is configured
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    pub enabled: bool,
    pub otlp_endpoint: String,
    pub service_name: String,
    /// Fraction of traces exported, in [0, 1]
    pub sampling_ratio: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Route serving the Prometheus exposition; must not shadow an API route
    pub path: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            otlp_endpoint: "http://localhost:4317".to_string(),
            service_name: env!("CARGO_PKG_NAME").to_string(),
            sampling_ratio: 1.0,
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Reject settings that would fail later inside the exporter or router.
    ///
    /// `reserved_paths` are the API routes the metrics endpoint may not reuse.
    pub fn validate(&self, reserved_paths: &[&str]) -> Result<(), DomainError> {
        self.tracing.validate()?;
        self.metrics.validate(reserved_paths)
    }
}

impl TracingConfig {
    fn validate(&self) -> Result<(), DomainError> {
        if !(0.0..=1.0).contains(&self.sampling_ratio) {
            return Err(DomainError::configuration(format!(
                "observability.tracing.sampling_ratio must be within [0, 1], got {}",
                self.sampling_ratio
            )));
        }

        if self.enabled && self.otlp_endpoint.trim().is_empty() {
            return Err(DomainError::configuration(
                "observability.tracing.otlp_endpoint is required when tracing is enabled",
            ));
        }

        Ok(())
    }
}

impl MetricsConfig {
    fn validate(&self, reserved_paths: &[&str]) -> Result<(), DomainError> {
        if !self.enabled {
            return Ok(());
        }

        let path = self.path.as_str();

        if !path.starts_with('/') || path.len() < 2 {
            return Err(DomainError::configuration(format!(
                "observability.metrics.path must start with '/' and name a route, got '{}'",
                path
            )));
        }

        if path.contains(['{', '}', '*', ':']) {
            return Err(DomainError::configuration(format!(
                "observability.metrics.path must be a literal route, got '{}'",
                path
            )));
        }

        if reserved_paths.contains(&path) {
            return Err(DomainError::configuration(format!(
                "observability.metrics.path '{}' collides with an API route",
                path
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTES: &[&str] = &["/health", "/predict"];

    fn metrics_at(path: &str) -> ObservabilityConfig {
        ObservabilityConfig {
            metrics: MetricsConfig {
                enabled: true,
                path: path.to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ObservabilityConfig::default();

        assert!(!config.tracing.enabled);
        assert_eq!(config.tracing.service_name, "disease-risk-api");
        assert_eq!(config.metrics.path, "/metrics");
        assert!(config.validate(ROUTES).is_ok());
    }

    #[test]
    fn test_sampling_ratio_out_of_range() {
        let mut config = ObservabilityConfig::default();
        config.tracing.sampling_ratio = 1.5;

        assert!(matches!(
            config.validate(ROUTES),
            Err(DomainError::Configuration { .. })
        ));

        config.tracing.sampling_ratio = f64::NAN;
        assert!(config.validate(ROUTES).is_err());
    }

    #[test]
    fn test_enabled_tracing_needs_endpoint() {
        let mut config = ObservabilityConfig::default();
        config.tracing.enabled = true;
        config.tracing.otlp_endpoint = " ".to_string();

        assert!(config.validate(ROUTES).is_err());
    }

    #[test]
    fn test_metrics_path_without_leading_slash() {
        assert!(metrics_at("metrics").validate(ROUTES).is_err());
        assert!(metrics_at("/").validate(ROUTES).is_err());
    }

    #[test]
    fn test_metrics_path_colliding_with_api_route() {
        let err = metrics_at("/health").validate(ROUTES).unwrap_err();
        assert!(err.to_string().contains("collides"));
    }

    #[test]
    fn test_metrics_path_with_wildcard() {
        assert!(metrics_at("/{*rest}").validate(ROUTES).is_err());
    }

    #[test]
    fn test_disabled_metrics_path_is_not_checked() {
        let mut config = metrics_at("/health");
        config.metrics.enabled = false;

        assert!(config.validate(ROUTES).is_ok());
    }

    #[test]
    fn test_custom_prometheus_path() {
        assert!(metrics_at("/internal/prometheus").validate(ROUTES).is_ok());
    }
}
