// src/services/scheduling.rs
//! Interview scheduling
//!
//! The planning pass walks every (job, candidate) pair in job-major,
//! candidate-minor order and assigns qualifying pairs a slot from a single
//! time cursor that advances by one interval per scheduled interview. The
//! cursor is global across the whole pass, so slots never collide no matter
//! how many pairs qualify. All scheduling state lives in the request scope.

use crate::candidates::extract::{parse_cv_text, NOT_AVAILABLE};
use crate::candidates::models::{CvDocument, CvProfile, ScheduledInterview};
use crate::common::{ApiError, ScreeningConfig};
use crate::jobs::models::Job;
use crate::services::email::{MailError, Mailer};
use crate::services::matching::score_candidate;
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Slot timestamps use this format everywhere: responses, rows, emails
const SLOT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One slot produced by the planning pass, before persistence and email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedInterview {
    pub job_index: usize,
    pub candidate_index: usize,
    pub score: u32,
    pub interview_time: DateTime<Utc>,
}

/// Assign interview slots to every (job, candidate) pair whose score meets
/// the threshold. Pairs are visited job-major, candidate-minor; the time
/// cursor starts at `start` and advances by the configured interval after
/// each scheduled slot.
pub fn plan_interviews(
    jobs: &[Job],
    profiles: &[CvProfile],
    config: &ScreeningConfig,
    start: DateTime<Utc>,
) -> Vec<PlannedInterview> {
    let interval = Duration::minutes(config.interview_interval_minutes);
    let mut cursor = start;
    let mut planned = Vec::new();

    for (job_index, job) in jobs.iter().enumerate() {
        debug!(job_title = %job.title, "Scheduling interviews for job");

        for (candidate_index, profile) in profiles.iter().enumerate() {
            let score = score_candidate(profile, &job.title, &job.description);
            if score >= config.match_threshold {
                planned.push(PlannedInterview {
                    job_index,
                    candidate_index,
                    score,
                    interview_time: cursor,
                });
                cursor = cursor + interval;
            }
        }
    }

    planned
}

/// Run the full scheduling operation: load jobs, plan slots, persist each
/// slot, and send one invitation per slot with its delivery outcome
/// recorded on the returned record.
///
/// A failed job-list load aborts with zero interviews; everything after
/// that is recovered per unit (bad CV -> empty text -> score 0, failed
/// email -> status on the record).
pub async fn schedule_and_notify(
    pool: &SqlitePool,
    mailer: &Mailer,
    config: &ScreeningConfig,
    cvs: &[CvDocument],
    start: DateTime<Utc>,
) -> Result<Vec<ScheduledInterview>, ApiError> {
    let jobs = sqlx::query_as::<_, Job>("SELECT * FROM job_descriptions")
        .fetch_all(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    if jobs.is_empty() {
        return Err(ApiError::BadRequest(
            "No job descriptions uploaded. Please upload job descriptions first.".to_string(),
        ));
    }

    let profiles: Vec<CvProfile> = cvs.iter().map(|cv| parse_cv_text(&cv.text)).collect();
    let planned = plan_interviews(&jobs, &profiles, config, start);

    let mut scheduled = Vec::with_capacity(planned.len());
    for slot in planned {
        let job = &jobs[slot.job_index];
        let cv = &cvs[slot.candidate_index];
        let profile = &profiles[slot.candidate_index];
        let interview_time = slot.interview_time.format(SLOT_TIME_FORMAT).to_string();

        let candidate_id = find_or_insert_candidate(pool, &cv.name, profile)
            .await
            .map_err(ApiError::DatabaseError)?;

        sqlx::query(
            "INSERT INTO interview_schedules (candidate_id, job_id, interview_date) VALUES (?, ?, ?)",
        )
        .bind(candidate_id)
        .bind(job.id)
        .bind(&interview_time)
        .execute(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

        let email_status = deliver_invitation(mailer, profile, &job.title, &interview_time).await;

        info!(
            candidate = %cv.name,
            job_title = %job.title,
            score = slot.score,
            interview_time = %interview_time,
            email_status = %email_status,
            "Scheduled interview"
        );

        scheduled.push(ScheduledInterview {
            candidate_name: cv.name.clone(),
            job_title: job.title.clone(),
            score: slot.score,
            interview_time,
            email_status,
        });
    }

    Ok(scheduled)
}

/// Candidates scheduled straight from an uploaded CV may not have a stored
/// row yet; reuse the existing row by name or insert one from the parsed
/// profile.
async fn find_or_insert_candidate(
    pool: &SqlitePool,
    name: &str,
    profile: &CvProfile,
) -> Result<i64, sqlx::Error> {
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM candidates WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let result = sqlx::query("INSERT INTO candidates (name, email, phone, skills) VALUES (?, ?, ?, ?)")
        .bind(name)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.skills)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

async fn deliver_invitation(
    mailer: &Mailer,
    profile: &CvProfile,
    job_title: &str,
    interview_time: &str,
) -> String {
    if profile.email == NOT_AVAILABLE {
        return "no address".to_string();
    }

    match mailer
        .send_interview_invitation(&profile.email, job_title, interview_time)
        .await
    {
        Ok(()) => "sent".to_string(),
        Err(MailError::NotConfigured) => "skipped: mailer not configured".to_string(),
        Err(e) => {
            warn!(error = %e, recipient = %profile.email, "Failed to send interview invitation");
            format!("failed: {}", e)
        }
    }
}
