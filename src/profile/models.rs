// src/profile/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::helpers::{lenient_i64, lenient_string};
use crate::services::PlaceholderSample;

// ============================================================================
// Request Models
// ============================================================================
//
// Every field is optional on the wire and falls back to "" / 0. Values are
// stored as sent; no format or length checks happen here.

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UpdateProfileRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub bio: String,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SaveResumeRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub work_experience: String,
    #[serde(deserialize_with = "lenient_string")]
    pub skills: String,
    #[serde(deserialize_with = "lenient_string")]
    pub education: String,
    #[serde(deserialize_with = "lenient_string")]
    pub projects: String,
    #[serde(deserialize_with = "lenient_string")]
    pub certifications: String,
    /// Stored as the user's bio
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub experience_years: i64,
}

// ============================================================================
// Profile Models
// ============================================================================

/// A users row joined with its (optional) resume sections
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProfileRecord {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub experience_years: Option<i64>,
    pub role: Option<String>,
    pub created_at: Option<String>,
    pub work_experience: Option<String>,
    pub education: Option<String>,
    pub projects: Option<String>,
    pub certifications: Option<String>,
}

impl ProfileRecord {
    /// The nine values profile completion is measured over
    pub fn completion_fields(&self) -> [Option<&str>; 9] {
        [
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.location.as_deref(),
            self.bio.as_deref(),
            self.skills.as_deref(),
            self.work_experience.as_deref(),
            self.education.as_deref(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub record: ProfileRecord,
    pub profile_completion: u8,
}

// ============================================================================
// Stats Models
// ============================================================================

/// Serializes as `{}` unless populated for a candidate
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct ProfileStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications_sent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviews_scheduled: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_views: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_rate: Option<i64>,
}

impl ProfileStats {
    pub fn candidate(
        applications_sent: i64,
        interviews_scheduled: i64,
        placeholder: PlaceholderSample,
    ) -> Self {
        Self {
            applications_sent: Some(applications_sent),
            interviews_scheduled: Some(interviews_scheduled),
            profile_views: Some(placeholder.profile_views),
            response_rate: Some(placeholder.response_rate),
        }
    }
}
