// src/candidates/handlers.rs

use crate::candidates::extract::{candidate_name_from_filename, extract_text, parse_cv_text};
use crate::candidates::models::{
    Candidate, CvDocument, MatchResponse, MatchResult, ScheduleResponse, ShortlistEntry,
};
use crate::common::{ApiError, AppState};
use crate::jobs::models::Job;
use crate::services::matching::score_candidate;
use crate::services::scheduling::schedule_and_notify;
use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Pull every "cv_files" part out of the multipart payload and extract its
/// text. Non-PDF parts are skipped; a part whose text cannot be extracted
/// still yields a document with empty text.
async fn collect_cv_documents(mut multipart: Multipart) -> Result<Vec<CvDocument>, ApiError> {
    let mut cvs = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() != Some("cv_files") {
            continue;
        }
        let Some(filename) = field.file_name().map(|f| f.to_string()) else {
            continue;
        };
        if !filename.ends_with(".pdf") {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|_| ApiError::BadRequest("Invalid file".to_string()))?;

        cvs.push(CvDocument {
            name: candidate_name_from_filename(&filename),
            text: extract_text(&data),
        });
    }

    Ok(cvs)
}

/// POST /upload_candidates - Parse uploaded CVs and store candidate rows
pub async fn upload_candidates(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await;

    let cvs = collect_cv_documents(multipart).await?;
    if cvs.is_empty() {
        return Err(ApiError::BadRequest("No CV files uploaded".to_string()));
    }

    let mut candidates = Vec::with_capacity(cvs.len());
    for cv in &cvs {
        let profile = parse_cv_text(&cv.text);

        let result =
            sqlx::query("INSERT INTO candidates (name, email, phone, skills) VALUES (?, ?, ?, ?)")
                .bind(&cv.name)
                .bind(&profile.email)
                .bind(&profile.phone)
                .bind(&profile.skills)
                .execute(&state.db)
                .await
                .map_err(ApiError::DatabaseError)?;

        let id = result.last_insert_rowid();
        info!(candidate = %cv.name, candidate_id = id, "Inserted candidate");

        candidates.push(Candidate {
            id,
            name: cv.name.clone(),
            email: profile.email,
            phone: profile.phone,
            skills: profile.skills,
        });
    }

    Ok((StatusCode::CREATED, Json(json!({ "candidates": candidates }))))
}

/// POST /match_candidates - Score uploaded CVs against every stored job
///
/// Returns every pairing with a positive score, plus the shortlist of
/// pairings whose score clears the shortlist cutoff.
pub async fn match_candidates(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    multipart: Multipart,
) -> Result<Json<MatchResponse>, ApiError> {
    let state = state_lock.read().await;

    let jobs = sqlx::query_as::<_, Job>("SELECT * FROM job_descriptions")
        .fetch_all(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    if jobs.is_empty() {
        return Err(ApiError::BadRequest(
            "No job descriptions uploaded. Please upload job descriptions first.".to_string(),
        ));
    }

    let cvs = collect_cv_documents(multipart).await?;
    if cvs.is_empty() {
        return Err(ApiError::BadRequest("No CV files uploaded".to_string()));
    }

    let profiles: Vec<_> = cvs.iter().map(|cv| parse_cv_text(&cv.text)).collect();

    let mut results = Vec::new();
    let mut shortlisted_candidates = Vec::new();
    for job in &jobs {
        for (cv, profile) in cvs.iter().zip(profiles.iter()) {
            let score = score_candidate(profile, &job.title, &job.description);
            if score == 0 {
                continue;
            }

            results.push(MatchResult {
                candidate_name: cv.name.clone(),
                job_title: job.title.clone(),
                score,
            });

            if score > state.screening.shortlist_cutoff {
                shortlisted_candidates.push(ShortlistEntry {
                    candidate_name: cv.name.clone(),
                    job_title: job.title.clone(),
                });
            }
        }
    }

    info!(
        jobs = jobs.len(),
        cvs = cvs.len(),
        matches = results.len(),
        shortlisted = shortlisted_candidates.len(),
        "Candidate matching completed"
    );

    Ok(Json(MatchResponse {
        results,
        shortlisted_candidates,
    }))
}

/// POST /schedule_interviews - Schedule interviews for qualifying CVs
///
/// Runs the scheduler over stored jobs and the uploaded CVs, persists each
/// slot, and sends one invitation per slot. The delivery outcome is
/// reported per recipient on the returned records.
pub async fn schedule_interviews(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await;

    let cvs = collect_cv_documents(multipart).await?;
    if cvs.is_empty() {
        return Err(ApiError::BadRequest("No CV files uploaded".to_string()));
    }

    let scheduled = schedule_and_notify(
        &state.db,
        &state.mailer,
        &state.screening,
        &cvs,
        Utc::now(),
    )
    .await?;

    if scheduled.is_empty() {
        return Ok(Json(json!({
            "message": "No CVs have been shortlisted for interviews."
        })));
    }

    let response = ScheduleResponse {
        scheduled_interviews: scheduled,
    };
    Ok(Json(serde_json::to_value(response).map_err(|e| {
        ApiError::InternalServer(format!("Failed to serialize response: {}", e))
    })?))
}
