//! Axum Router Configuration
//!
//! This module defines the HTTP routing for the application: the topic
//! catalog, plan generation, and the Q&A endpoint.

use crate::{handlers, state::AppState};

use axum::{
    Router,
    routing::{get, post},
};

/// Creates the main Axum router for the application.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/topics", get(handlers::list_topics))
        .route("/topics/{id}/plan", post(handlers::generate_plan))
        .route("/ask", post(handlers::ask))
        .with_state(app_state)
}
