// src/services/mod.rs
//
// Shared services module containing business logic services
// that can be used across different domain modules

pub mod placeholder_metrics;

// Re-export commonly used types for convenience
pub use placeholder_metrics::{PlaceholderMetrics, PlaceholderSample};
