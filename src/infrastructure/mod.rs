//! Infrastructure layer - inference backends, model registry, services and observability

pub mod classifier;
pub mod observability;
pub mod registry;
pub mod services;
