// src/candidates/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Candidate Models
// ============================================================================

/// A stored candidate row. Email, phone and skills carry the literal "N/A"
/// sentinel when extraction found nothing, never NULL.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
}

/// One uploaded resume after text extraction. The name is the file's base
/// name with the .pdf extension stripped; the text is empty when extraction
/// failed.
#[derive(Debug, Clone)]
pub struct CvDocument {
    pub name: String,
    pub text: String,
}

/// Fields parsed out of a resume's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvProfile {
    /// Inferred job title, empty string when absent
    pub job_title: String,
    /// Work-experience section body, empty string when absent
    pub work_experience: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
}

// ============================================================================
// Matching Models
// ============================================================================

#[derive(Serialize, Debug, Clone)]
pub struct MatchResult {
    pub candidate_name: String,
    pub job_title: String,
    pub score: u32,
}

#[derive(Serialize, Debug, Clone)]
pub struct ShortlistEntry {
    pub candidate_name: String,
    pub job_title: String,
}

#[derive(Serialize, Debug)]
pub struct MatchResponse {
    pub results: Vec<MatchResult>,
    pub shortlisted_candidates: Vec<ShortlistEntry>,
}

// ============================================================================
// Scheduling Models
// ============================================================================

/// One interview slot as reported to the caller, including the outcome of
/// the invitation email for that recipient
#[derive(Serialize, Debug, Clone)]
pub struct ScheduledInterview {
    pub candidate_name: String,
    pub job_title: String,
    pub score: u32,
    pub interview_time: String,
    pub email_status: String,
}

#[derive(Serialize, Debug)]
pub struct ScheduleResponse {
    pub scheduled_interviews: Vec<ScheduledInterview>,
}
