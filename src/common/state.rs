// Application state shared across all modules

use sqlx::SqlitePool;
use std::env;
use std::sync::Arc;

use crate::services::Mailer;

/// Screening policy constants, loaded from the environment
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Minimum matching score for an interview slot
    pub match_threshold: u32,
    /// Minimum matching score for the shortlist
    pub shortlist_cutoff: u32,
    /// Gap between consecutive interview slots, in minutes
    pub interview_interval_minutes: i64,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            match_threshold: 50,
            shortlist_cutoff: 50,
            interview_interval_minutes: 30,
        }
    }
}

impl ScreeningConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            match_threshold: env::var("MATCH_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.match_threshold),
            shortlist_cutoff: env::var("SHORTLIST_CUTOFF")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.shortlist_cutoff),
            interview_interval_minutes: env::var("INTERVIEW_INTERVAL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.interview_interval_minutes),
        }
    }
}

/// Application state containing database pool, services, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub screening: ScreeningConfig,
    pub mailer: Arc<Mailer>,
}
