// src/services/tests.rs

use crate::candidates::extract::parse_cv_text;
use crate::candidates::models::{CvDocument, CvProfile};
use crate::common::{ApiError, ScreeningConfig};
use crate::jobs::models::Job;
use crate::services::email::Mailer;
use crate::services::matching::score_candidate;
use crate::services::scheduling::{plan_interviews, schedule_and_notify};
use chrono::{Duration, TimeZone, Utc};

fn profile(job_title: &str, work_experience: &str) -> CvProfile {
    CvProfile {
        job_title: job_title.to_string(),
        work_experience: work_experience.to_string(),
        email: "N/A".to_string(),
        phone: "N/A".to_string(),
        skills: "N/A".to_string(),
    }
}

fn job(id: i64, title: &str, description: &str) -> Job {
    Job {
        id,
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn config(match_threshold: u32) -> ScreeningConfig {
    ScreeningConfig {
        match_threshold,
        shortlist_cutoff: 50,
        interview_interval_minutes: 30,
    }
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_title_gate_is_case_insensitive() {
    let p = profile("ENGINEER", "engineer at acme");
    assert!(score_candidate(&p, "engineer", "engineer wanted") > 0);
}

#[test]
fn test_title_gate_mismatch_scores_zero_despite_overlap() {
    let p = profile("Analyst", "engineer wanted engineer wanted");
    assert_eq!(score_candidate(&p, "Engineer", "engineer wanted"), 0);
}

#[test]
fn test_duplicate_keywords_count_per_occurrence() {
    let p = profile("Engineer", "python developer");
    assert_eq!(score_candidate(&p, "Engineer", "Python Python SQL"), 2);

    let p = profile("Engineer", "python and sql");
    assert_eq!(score_candidate(&p, "Engineer", "Python Python SQL"), 3);
}

#[test]
fn test_keywords_match_as_substrings() {
    // "a" occurs inside "acme", so it counts even though it is not a word
    // of the work-experience text
    let p = profile("Engineer", "acme");
    assert_eq!(score_candidate(&p, "Engineer", "a job"), 1);
}

#[test]
fn test_empty_resume_scores_zero() {
    let p = parse_cv_text("");
    assert_eq!(score_candidate(&p, "Engineer", "engineer wanted"), 0);
}

#[test]
fn test_score_against_parsed_resume() {
    let p = parse_cv_text("Work Experience\nEngineer at Acme\nSkills: Python, SQL");
    assert_eq!(p.job_title, "Engineer");

    let description =
        "Description: an engineer at a startup\nQualification: \nResponsibilities: ";
    // Tokens contained in "engineer at acme": "engineer", "at", "a"
    assert_eq!(score_candidate(&p, "Engineer", description), 3);
    assert_eq!(score_candidate(&p, "Manager", description), 0);
}

// ============================================================================
// Scheduling
// ============================================================================

#[test]
fn test_plan_interviews_spaces_slots_by_one_interval() {
    let jobs = vec![job(1, "Engineer", "engineer wanted")];
    let profiles = vec![
        profile("Engineer", "engineer at acme"),
        profile("Engineer", "engineer at globex"),
    ];
    let start = Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap();

    let planned = plan_interviews(&jobs, &profiles, &config(1), start);

    assert_eq!(planned.len(), 2);
    assert_eq!(planned[0].candidate_index, 0);
    assert_eq!(planned[1].candidate_index, 1);
    assert_eq!(planned[0].interview_time, start);
    assert_eq!(
        planned[1].interview_time - planned[0].interview_time,
        Duration::minutes(30)
    );
}

#[test]
fn test_plan_interviews_threshold_is_inclusive() {
    let jobs = vec![job(1, "Engineer", "engineer wanted")];
    // Scores exactly 1: only "engineer" is contained
    let profiles = vec![profile("Engineer", "engineer")];
    let start = Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap();

    assert_eq!(plan_interviews(&jobs, &profiles, &config(1), start).len(), 1);
    assert_eq!(plan_interviews(&jobs, &profiles, &config(2), start).len(), 0);
}

#[test]
fn test_plan_interviews_cursor_is_global_across_jobs() {
    let jobs = vec![
        job(1, "Engineer", "engineer wanted"),
        job(2, "Engineer", "engineer needed"),
    ];
    let profiles = vec![profile("Engineer", "engineer at acme")];
    let start = Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap();

    let planned = plan_interviews(&jobs, &profiles, &config(1), start);

    assert_eq!(planned.len(), 2);
    assert_eq!(planned[0].job_index, 0);
    assert_eq!(planned[1].job_index, 1);
    // The second job's slot continues from the cursor, it does not restart
    assert_eq!(planned[1].interview_time, start + Duration::minutes(30));
}

#[test]
fn test_plan_interviews_skips_gate_failures_without_advancing_cursor() {
    let jobs = vec![job(1, "Engineer", "engineer wanted")];
    let profiles = vec![
        profile("Manager", "engineer at acme"),
        profile("Engineer", "engineer at acme"),
    ];
    let start = Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap();

    let planned = plan_interviews(&jobs, &profiles, &config(1), start);

    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].candidate_index, 1);
    assert_eq!(planned[0].interview_time, start);
}

#[tokio::test]
async fn test_schedule_and_notify_persists_slots_and_reports_email_status() {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::common::migrations::run_migrations(&pool).await.unwrap();

    sqlx::query("INSERT INTO job_descriptions (title, description) VALUES (?, ?)")
        .bind("Engineer")
        .bind("Description: engineer wanted\nQualification: \nResponsibilities: ")
        .execute(&pool)
        .await
        .unwrap();

    let cvs = vec![
        CvDocument {
            name: "jane_doe".to_string(),
            text: "jane@example.com\nWork Experience\nEngineer at Acme\nSkills: Rust".to_string(),
        },
        CvDocument {
            name: "john_roe".to_string(),
            text: "Work Experience\nEngineer at Globex".to_string(),
        },
    ];

    let start = Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap();
    let scheduled = schedule_and_notify(&pool, &Mailer::unconfigured(), &config(1), &cvs, start)
        .await
        .unwrap();

    assert_eq!(scheduled.len(), 2);
    assert_eq!(scheduled[0].candidate_name, "jane_doe");
    assert_eq!(scheduled[0].interview_time, "2026-08-06 09:00:00");
    assert_eq!(scheduled[0].email_status, "skipped: mailer not configured");
    assert_eq!(scheduled[1].candidate_name, "john_roe");
    assert_eq!(scheduled[1].interview_time, "2026-08-06 09:30:00");
    assert_eq!(scheduled[1].email_status, "no address");

    let slot_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM interview_schedules")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(slot_count, 2);

    let candidate_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(candidate_count, 2);
}

#[tokio::test]
async fn test_schedule_and_notify_reuses_stored_candidate_rows() {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::common::migrations::run_migrations(&pool).await.unwrap();

    for title in ["Engineer", "Engineer"] {
        sqlx::query("INSERT INTO job_descriptions (title, description) VALUES (?, ?)")
            .bind(title)
            .bind("engineer wanted")
            .execute(&pool)
            .await
            .unwrap();
    }

    let cvs = vec![CvDocument {
        name: "jane_doe".to_string(),
        text: "Work Experience\nEngineer at Acme".to_string(),
    }];

    let start = Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap();
    let scheduled = schedule_and_notify(&pool, &Mailer::unconfigured(), &config(1), &cvs, start)
        .await
        .unwrap();

    // One slot per job, but only one candidate row for the repeated name
    assert_eq!(scheduled.len(), 2);
    let candidate_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(candidate_count, 1);
}

#[tokio::test]
async fn test_schedule_and_notify_requires_stored_jobs() {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::common::migrations::run_migrations(&pool).await.unwrap();

    let cvs = vec![CvDocument {
        name: "jane_doe".to_string(),
        text: "Work Experience\nEngineer at Acme".to_string(),
    }];

    let start = Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap();
    let result =
        schedule_and_notify(&pool, &Mailer::unconfigured(), &config(1), &cvs, start).await;

    assert!(matches!(result, Err(ApiError::BadRequest(_))));
}
