// src/candidates/routes.rs

use crate::candidates::handlers;
use axum::{routing::post, Router};

pub fn candidates_routes() -> Router {
    Router::new()
        .route("/upload_candidates", post(handlers::upload_candidates))
        .route("/match_candidates", post(handlers::match_candidates))
        .route("/schedule_interviews", post(handlers::schedule_interviews))
}
