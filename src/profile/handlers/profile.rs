// src/profile/handlers/profile.rs

use tracing::{error, info};

use super::ActionContext;
use crate::common::{safe_email_log, success_message, success_with, ActionResult, ApiError};
use crate::profile::completion::completion_percentage;
use crate::profile::models::{ProfileRecord, ProfileView, UpdateProfileRequest};

/// POST action `update_profile` - Overwrite the six contact/profile fields
///
/// Absent fields are written as "", so an empty post clears the profile.
/// Matching zero rows is not an error.
pub async fn update_profile(ctx: ActionContext) -> ActionResult {
    let request: UpdateProfileRequest = ctx.params.decode()?;
    let user_id = &ctx.session.user_id;

    info!(
        user_id = %user_id,
        email = %safe_email_log(&request.email),
        "Profile update request received"
    );

    let result = sqlx::query(
        r#"
        UPDATE users SET
            first_name = ?,
            last_name = ?,
            email = ?,
            phone = ?,
            location = ?,
            bio = ?
        WHERE id = ?
        "#,
    )
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.location)
    .bind(&request.bio)
    .bind(user_id)
    .execute(&ctx.state.db)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            user_id = %user_id,
            "Database error updating profile"
        );
        ApiError::persistence("Failed to update profile", e)
    })?;

    info!(
        user_id = %user_id,
        rows_affected = result.rows_affected(),
        "Profile updated successfully"
    );

    Ok(success_message("Profile updated successfully"))
}

/// GET action `get_profile` - User row, resume sections and completion
pub async fn get_profile(ctx: ActionContext) -> ActionResult {
    let user_id = &ctx.session.user_id;

    let record = sqlx::query_as::<_, ProfileRecord>(
        r#"
        SELECT
            u.id, u.first_name, u.last_name, u.email, u.phone, u.location,
            u.bio, u.skills, u.experience_years, u.role, u.created_at,
            ur.work_experience, ur.education, ur.projects, ur.certifications
        FROM users u
        LEFT JOIN user_resume ur ON u.id = ur.user_id
        WHERE u.id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(&ctx.state.db)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            user_id = %user_id,
            "Database error loading profile"
        );
        ApiError::persistence("Failed to load profile", e)
    })?;

    let Some(record) = record else {
        info!(user_id = %user_id, "Profile requested for unknown user");
        return Err(ApiError::NotFound("Profile not found"));
    };

    let profile_completion = completion_percentage(&record.completion_fields());

    success_with(
        "profile",
        &ProfileView {
            record,
            profile_completion,
        },
    )
}
