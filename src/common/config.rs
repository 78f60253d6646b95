// src/common/config.rs
//! Startup configuration read from the environment

use std::env;
use std::ops::RangeInclusive;
use thiserror::Error;
use tracing::warn;

use crate::auth::tokens::DEFAULT_JWT_SECRET;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://profile_api.db";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:3001,http://localhost:5173";
pub const DEFAULT_PROFILE_VIEWS_RANGE: RangeInclusive<i64> = 100..=200;
pub const DEFAULT_RESPONSE_RATE_RANGE: RangeInclusive<i64> = 20..=40;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected a range written as `min-max`, got `{0}`")]
    MalformedRange(String),
    #[error("range lower bound {min} is greater than upper bound {max}")]
    InvertedRange { min: i64, max: i64 },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub reset_db: bool,
    pub log_bodies: bool,
    pub profile_views_range: RangeInclusive<i64>,
    pub response_rate_range: RangeInclusive<i64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, falling back to the built-in development secret");
            DEFAULT_JWT_SECRET.to_string()
        });

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins =
            parse_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()));

        Self {
            database_url,
            jwt_secret,
            port,
            cors_origins,
            reset_db: env_flag("RESET_DB"),
            log_bodies: env_flag("LOG_BODIES"),
            profile_views_range: range_from_env(
                "PLACEHOLDER_PROFILE_VIEWS",
                DEFAULT_PROFILE_VIEWS_RANGE,
            ),
            response_rate_range: range_from_env(
                "PLACEHOLDER_RESPONSE_RATE",
                DEFAULT_RESPONSE_RATE_RANGE,
            ),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn range_from_env(key: &str, default: RangeInclusive<i64>) -> RangeInclusive<i64> {
    match env::var(key) {
        Ok(raw) => parse_range(&raw).unwrap_or_else(|e| {
            warn!(key = %key, error = %e, "Ignoring malformed range setting");
            default
        }),
        Err(_) => default,
    }
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parses `min-max` (inclusive) into a non-empty range.
pub fn parse_range(raw: &str) -> Result<RangeInclusive<i64>, ConfigError> {
    let malformed = || ConfigError::MalformedRange(raw.to_string());

    let (min, max) = raw.trim().split_once('-').ok_or_else(malformed)?;
    let min: i64 = min.trim().parse().map_err(|_| malformed())?;
    let max: i64 = max.trim().parse().map_err(|_| malformed())?;

    if min > max {
        return Err(ConfigError::InvertedRange { min, max });
    }

    Ok(min..=max)
}
