// src/jobs/routes.rs

use crate::jobs::handlers;
use axum::{routing::post, Router};

pub fn jobs_routes() -> Router {
    Router::new().route(
        "/upload_job_descriptions",
        post(handlers::upload_job_descriptions),
    )
}
