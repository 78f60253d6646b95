// src/profile/handlers/resume.rs

use tracing::{error, info};

use super::ActionContext;
use crate::common::{success_message, ActionResult, ApiError};
use crate::profile::models::SaveResumeRequest;

const PROFILE_UPDATE_FAILED: &str = "Failed to update profile";
const RESUME_SAVE_FAILED: &str = "Failed to save resume data";

/// POST action `save_resume` - Summary fields on users, sections on user_resume
///
/// Both writes share one transaction: if the resume upsert fails the users
/// update is rolled back with it, and the upsert is never attempted when the
/// users update fails.
pub async fn save_resume(ctx: ActionContext) -> ActionResult {
    let request: SaveResumeRequest = ctx.params.decode()?;
    let user_id = &ctx.session.user_id;

    info!(
        user_id = %user_id,
        experience_years = request.experience_years,
        "Resume save request received"
    );

    let mut tx = ctx.state.db.begin().await.map_err(|e| {
        error!(error = %e, user_id = %user_id, "Failed to open resume transaction");
        ApiError::persistence(PROFILE_UPDATE_FAILED, e)
    })?;

    sqlx::query(
        r#"
        UPDATE users SET
            experience_years = ?,
            skills = ?,
            bio = ?
        WHERE id = ?
        "#,
    )
    .bind(request.experience_years)
    .bind(&request.skills)
    .bind(&request.summary)
    .bind(user_id)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            user_id = %user_id,
            "Database error updating resume summary on user"
        );
        ApiError::persistence(PROFILE_UPDATE_FAILED, e)
    })?;

    sqlx::query(
        r#"
        INSERT INTO user_resume (
            user_id, work_experience, education, projects, certifications, updated_at
        ) VALUES (?, ?, ?, ?, ?, datetime('now'))
        ON CONFLICT(user_id) DO UPDATE SET
            work_experience = excluded.work_experience,
            education = excluded.education,
            projects = excluded.projects,
            certifications = excluded.certifications,
            updated_at = datetime('now')
        "#,
    )
    .bind(user_id)
    .bind(&request.work_experience)
    .bind(&request.education)
    .bind(&request.projects)
    .bind(&request.certifications)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            user_id = %user_id,
            "Database error upserting resume sections"
        );
        ApiError::persistence(RESUME_SAVE_FAILED, e)
    })?;

    tx.commit().await.map_err(|e| {
        error!(error = %e, user_id = %user_id, "Failed to commit resume transaction");
        ApiError::persistence(RESUME_SAVE_FAILED, e)
    })?;

    info!(user_id = %user_id, "Resume saved successfully");

    Ok(success_message("Resume saved successfully"))
}
