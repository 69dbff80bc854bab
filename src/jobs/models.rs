// src/jobs/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Job Models
// ============================================================================

/// A stored job posting. The description is always the canonical three-line
/// form produced by the section parser.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// One uploaded posting echoed back with its normalized description
#[derive(Serialize, Debug)]
pub struct JobSummary {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Debug)]
pub struct UploadJobsResponse {
    pub summaries: Vec<JobSummary>,
}
