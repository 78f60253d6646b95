// src/services/placeholder_metrics.rs
//
// Stand-in engagement numbers for candidate stats. Nothing records profile
// views or employer responses yet, so these values are random draws from a
// configured range and must not be read as measurements.

use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;

use crate::common::config::{ConfigError, DEFAULT_PROFILE_VIEWS_RANGE, DEFAULT_RESPONSE_RATE_RANGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaceholderSample {
    pub profile_views: i64,
    pub response_rate: i64,
}

#[derive(Debug, Clone)]
pub struct PlaceholderMetrics {
    profile_views: RangeInclusive<i64>,
    response_rate: RangeInclusive<i64>,
}

impl PlaceholderMetrics {
    pub fn new(
        profile_views: RangeInclusive<i64>,
        response_rate: RangeInclusive<i64>,
    ) -> Result<Self, ConfigError> {
        for range in [&profile_views, &response_rate] {
            if range.is_empty() {
                return Err(ConfigError::InvertedRange {
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }

        Ok(Self {
            profile_views,
            response_rate,
        })
    }

    pub fn sample(&self) -> PlaceholderSample {
        let mut rng = rand::thread_rng();
        PlaceholderSample {
            profile_views: rng.gen_range(self.profile_views.clone()),
            response_rate: rng.gen_range(self.response_rate.clone()),
        }
    }
}

impl Default for PlaceholderMetrics {
    fn default() -> Self {
        Self {
            profile_views: DEFAULT_PROFILE_VIEWS_RANGE,
            response_rate: DEFAULT_RESPONSE_RATE_RANGE,
        }
    }
}
