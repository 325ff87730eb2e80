//! Axum Handlers for the REST API
//!
//! The handlers are the boundary described by the UI contract: topic listing,
//! plan generation, and Q&A. Input validation (trimming and rejecting empty
//! questions) happens here, before the content service is ever invoked;
//! content failures ride inside the `RequestOutcome` body with a 200 status.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pawsteps_core::topic::{self, TrainingTopic};
use tracing::error;

use crate::{models::{AskPayload, ErrorResponse}, state::AppState};

pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { message })).into_response()
            }
            ApiError::InternalServerError(err) => {
                error!("Internal Server Error: {:?}", err);
                let message = "An internal server error occurred.".to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

/// List the fixed training-topic catalog.
pub async fn list_topics() -> Json<&'static [TrainingTopic]> {
    Json(topic::catalog())
}

/// Generate (or, in demo mode, look up) a training plan for a catalog topic.
pub async fn generate_plan(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let topic = topic::find_topic(&topic_id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown training topic: {topic_id}")))?;

    let outcome = state.content.training_plan(topic).await;
    Ok(Json(outcome))
}

/// Answer a free-text training question.
///
/// A whitespace-only question is an input error: it is rejected here and the
/// content service (and therefore the backend) is never called.
pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let question = payload.question.trim();
    if question.is_empty() {
        return Err(ApiError::BadRequest("Please enter a question.".to_string()));
    }

    let outcome = state.content.answer(question).await;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use pawsteps_core::content::ContentService;
    use pawsteps_core::fallback::DemoContentService;
    use pawsteps_core::outcome::RequestOutcome;
    use pawsteps_core::plan::TrainingPlan;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::Level;

    /// Counts service invocations so tests can assert that rejected input
    /// never reaches the content layer.
    struct CountingService {
        plan_calls: AtomicUsize,
        answer_calls: AtomicUsize,
    }

    impl CountingService {
        fn new() -> Self {
            Self {
                plan_calls: AtomicUsize::new(0),
                answer_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ContentService for CountingService {
        async fn training_plan(&self, topic: &TrainingTopic) -> RequestOutcome<TrainingPlan> {
            self.plan_calls.fetch_add(1, Ordering::SeqCst);
            DemoContentService.training_plan(topic).await
        }

        async fn answer(&self, question: &str) -> RequestOutcome<String> {
            self.answer_calls.fetch_add(1, Ordering::SeqCst);
            DemoContentService.answer(question).await
        }
    }

    fn test_config() -> Config {
        Config {
            bind_address: "127.0.0.1:0".parse().unwrap(),
            credential: None,
            chat_model: "gemini-2.5-flash".to_string(),
            require_credential: false,
            log_level: Level::INFO,
        }
    }

    fn state_with(service: Arc<CountingService>) -> AppState {
        AppState {
            content: service,
            config: Arc::new(test_config()),
        }
    }

    #[tokio::test]
    async fn empty_and_whitespace_questions_never_reach_the_service() {
        let service = Arc::new(CountingService::new());
        let state = state_with(service.clone());

        for question in ["", "   "] {
            let result = ask(
                State(state.clone()),
                Json(AskPayload { question: question.to_string() }),
            )
            .await;
            let response = match result {
                Err(err) => err.into_response(),
                Ok(_) => panic!("expected rejection for {question:?}"),
            };
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        assert_eq!(service.answer_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn a_trimmed_question_is_forwarded_once() {
        let service = Arc::new(CountingService::new());
        let state = state_with(service.clone());

        let result = ask(
            State(state),
            Json(AskPayload { question: "  How do I stop jumping?  ".to_string() }),
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(service.answer_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_topic_id_is_a_404_without_a_service_call() {
        let service = Arc::new(CountingService::new());
        let state = state_with(service.clone());

        let result = generate_plan(State(state), Path("agility".to_string())).await;
        let response = match result {
            Err(err) => err.into_response(),
            Ok(_) => panic!("expected a not-found rejection"),
        };
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(service.plan_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn known_topic_id_resolves_a_plan_outcome() {
        let service = Arc::new(CountingService::new());
        let state = state_with(service.clone());

        let result = generate_plan(State(state), Path("leash".to_string())).await;
        assert!(result.is_ok());
        assert_eq!(service.plan_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn topic_listing_returns_the_full_catalog() {
        let Json(topics) = list_topics().await;
        assert_eq!(topics.len(), 4);
    }
}
