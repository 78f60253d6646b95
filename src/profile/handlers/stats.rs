// src/profile/handlers/stats.rs

use tracing::{debug, error};

use super::ActionContext;
use crate::common::{success_with, ActionResult, ApiError};
use crate::profile::models::ProfileStats;

const STATS_FAILED: &str = "Failed to load statistics";

/// GET action `get_stats` - Candidate dashboard counters
///
/// Only candidates get numbers; every other role receives `stats: {}`.
/// `profile_views` and `response_rate` are placeholder draws, see
/// `services::placeholder_metrics`.
pub async fn get_stats(ctx: ActionContext) -> ActionResult {
    let session = &ctx.session;

    if !session.is_candidate() {
        debug!(user_id = %session.user_id, role = %session.role, "No stats for role");
        return success_with("stats", &ProfileStats::default());
    }

    let applications_sent = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM applications WHERE candidate_id = ?",
    )
    .bind(&session.user_id)
    .fetch_one(&ctx.state.db)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            user_id = %session.user_id,
            "Database error counting applications for stats"
        );
        ApiError::persistence(STATS_FAILED, e)
    })?;

    let interviews_scheduled = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM interviews i
        JOIN applications a ON i.application_id = a.id
        WHERE a.candidate_id = ? AND i.status = 'scheduled'
        "#,
    )
    .bind(&session.user_id)
    .fetch_one(&ctx.state.db)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            user_id = %session.user_id,
            "Database error counting scheduled interviews for stats"
        );
        ApiError::persistence(STATS_FAILED, e)
    })?;

    let stats = ProfileStats::candidate(
        applications_sent,
        interviews_scheduled,
        ctx.state.placeholder_metrics.sample(),
    );

    success_with("stats", &stats)
}
