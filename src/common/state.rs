// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::common::dev_mode::DevModeConfig;
use crate::profile::handlers::ActionRegistry;
use crate::services::PlaceholderMetrics;

/// Application state containing database pool, services, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_secret: String,
    pub dev_mode: DevModeConfig,
    pub actions: Arc<ActionRegistry>,
    pub placeholder_metrics: Arc<PlaceholderMetrics>,
}
