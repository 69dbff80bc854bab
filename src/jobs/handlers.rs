// src/jobs/handlers.rs

use crate::common::{ApiError, AppState};
use crate::jobs::csv::read_jobs;
use crate::jobs::models::{JobSummary, UploadJobsResponse};
use crate::jobs::sections::normalize_description;
use axum::{
    extract::{Extension, Multipart},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// POST /upload_job_descriptions - Upload a CSV of job postings
///
/// Expects a multipart field named "file" containing the CSV. Every row's
/// description is normalized to the canonical three-line form before it is
/// stored, so reads always see the same shape.
pub async fn upload_job_descriptions(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    mut multipart: Multipart,
) -> Result<Json<UploadJobsResponse>, ApiError> {
    let state = state_lock.read().await;

    let mut csv_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|_| ApiError::BadRequest("Invalid file".to_string()))?;
            csv_bytes = Some(data);
            break;
        }
    }

    let csv_bytes = csv_bytes.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    let records = read_jobs(csv_bytes.as_ref()).map_err(|e| {
        warn!(error = %e, "Failed to parse job descriptions CSV");
        ApiError::BadRequest(format!("Error reading job descriptions: {}", e))
    })?;

    if records.is_empty() {
        return Err(ApiError::BadRequest(
            "No job descriptions found in the uploaded file.".to_string(),
        ));
    }

    let mut summaries = Vec::with_capacity(records.len());
    for record in records {
        let description = normalize_description(&record.description);

        let result = sqlx::query("INSERT INTO job_descriptions (title, description) VALUES (?, ?)")
            .bind(&record.title)
            .bind(&description)
            .execute(&state.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(
            job_id = result.last_insert_rowid(),
            job_title = %record.title,
            "Inserted job description"
        );

        summaries.push(JobSummary {
            title: record.title,
            description,
        });
    }

    Ok(Json(UploadJobsResponse { summaries }))
}
