// src/dashboard.rs
//! Minimal HTML dashboard of persisted interviews

use crate::common::{ApiError, AppState};
use axum::{
    extract::Extension,
    response::Html,
    routing::get,
    Router,
};
use sqlx::FromRow;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(FromRow, Debug)]
struct InterviewRow {
    candidate_name: Option<String>,
    job_title: Option<String>,
    interview_date: Option<String>,
}

pub fn dashboard_routes() -> Router {
    Router::new().route("/", get(index))
}

/// GET / - Dashboard listing every scheduled interview
async fn index(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Html<String>, ApiError> {
    let state = state_lock.read().await;

    let rows = sqlx::query_as::<_, InterviewRow>(
        r#"
        SELECT c.name AS candidate_name, j.title AS job_title, s.interview_date
        FROM interview_schedules s
        LEFT JOIN candidates c ON c.id = s.candidate_id
        LEFT JOIN job_descriptions j ON j.id = s.job_id
        ORDER BY s.id
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    let mut table_rows = String::new();
    for row in &rows {
        table_rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(row.candidate_name.as_deref().unwrap_or("-")),
            escape_html(row.job_title.as_deref().unwrap_or("-")),
            escape_html(row.interview_date.as_deref().unwrap_or("-")),
        ));
    }

    let body = if rows.is_empty() {
        "<p>No interviews scheduled yet.</p>".to_string()
    } else {
        format!(
            "<table>\n<tr><th>Candidate</th><th>Job Title</th><th>Interview Time</th></tr>\n{}</table>",
            table_rows
        )
    };

    Ok(Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Scheduled Interviews</title></head>\n\
         <body>\n<h1>Scheduled Interviews</h1>\n{}\n</body>\n</html>",
        body
    )))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
