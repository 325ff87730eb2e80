//! The Content Request Service.
//!
//! [`ContentService`] is the contract the HTTP layer programs against. The
//! live implementation translates a domain request into one backend call and
//! a validated domain result; the demo implementation in [`crate::fallback`]
//! serves canned content. [`from_credential`] is the availability gate that
//! picks between them, once, at startup.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::fallback::DemoContentService;
use crate::llm_client::{GeminiClient, LlmClient};
use crate::outcome::RequestOutcome;
use crate::plan::{self, TrainingPlan};
use crate::prompts;
use crate::topic::TrainingTopic;

/// Fixed user-facing copy for a failed plan request. The underlying error is
/// logged for operators but never shown to the end user.
pub const PLAN_FAILURE_MESSAGE: &str = "Failed to generate a training plan. Please try again.";

/// Fixed user-facing copy for a failed Q&A request.
pub const ANSWER_FAILURE_MESSAGE: &str = "Failed to get an answer. Please try again.";

/// Produces training plans and Q&A answers for the presentation layer.
///
/// Both operations resolve to a [`RequestOutcome`]; implementations must not
/// panic or propagate errors in any other form. Each call is attempted
/// exactly once; resubmission is the caller's decision.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Produces a multi-session training plan for a catalog topic.
    async fn training_plan(&self, topic: &TrainingTopic) -> RequestOutcome<TrainingPlan>;

    /// Answers a free-text training question. The question must already be
    /// trimmed and non-empty; that validation lives at the HTTP boundary.
    async fn answer(&self, question: &str) -> RequestOutcome<String>;
}

/// A [`ContentService`] backed by a live completion backend.
pub struct LiveContentService {
    client: Arc<dyn LlmClient>,
}

impl LiveContentService {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentService for LiveContentService {
    async fn training_plan(&self, topic: &TrainingTopic) -> RequestOutcome<TrainingPlan> {
        let raw = match self
            .client
            .generate_json(
                prompts::SYSTEM_INSTRUCTION_TRAINER,
                topic.prompt,
                plan::response_schema(),
                prompts::PLAN_TEMPERATURE,
            )
            .await
        {
            Ok(text) => text,
            Err(err) => {
                error!(topic = topic.id, %err, "training plan request failed");
                return RequestOutcome::failure(PLAN_FAILURE_MESSAGE);
            }
        };

        match plan::parse_plan(&raw) {
            Ok(sessions) => RequestOutcome::success(sessions),
            Err(err) => {
                error!(topic = topic.id, %err, "training plan response failed validation");
                RequestOutcome::failure(PLAN_FAILURE_MESSAGE)
            }
        }
    }

    async fn answer(&self, question: &str) -> RequestOutcome<String> {
        match self
            .client
            .generate_text(
                prompts::SYSTEM_INSTRUCTION_QA,
                &prompts::qa_prompt(question),
                prompts::QA_TEMPERATURE,
            )
            .await
        {
            Ok(text) => RequestOutcome::success(text),
            Err(err) => {
                error!(%err, "question request failed");
                RequestOutcome::failure(ANSWER_FAILURE_MESSAGE)
            }
        }
    }
}

/// The availability gate. Builds the live service when a credential is
/// configured, the canned demo service otherwise. The decision is made once
/// here; the gate itself cannot fail, it only branches.
pub fn from_credential(credential: Option<&str>, model: &str) -> Arc<dyn ContentService> {
    match credential {
        Some(key) => Arc::new(LiveContentService::new(Arc::new(GeminiClient::new(key, model)))),
        None => Arc::new(DemoContentService),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{BackendError, MockLlmClient};
    use crate::topic;

    const VALID_PLAN_JSON: &str = r#"[
        {"sessionTitle": "Day 1: Getting Started",
         "steps": ["Load a treat pouch", "Practice indoors"],
         "tips": "Keep it short and fun!"},
        {"sessionTitle": "Day 2: Building Consistency",
         "steps": ["Repeat Day 1", "Add one new cue"],
         "tips": "A little every day beats one long session."}
    ]"#;

    fn live_with(client: MockLlmClient) -> LiveContentService {
        LiveContentService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn training_plan_returns_validated_sessions_on_success() {
        let mut client = MockLlmClient::new();
        client
            .expect_generate_json()
            .times(1)
            .returning(|_, _, _, _| Ok(VALID_PLAN_JSON.to_string()));

        let outcome = live_with(client).training_plan(&topic::catalog()[0]).await;
        let plan = outcome.value().expect("expected success");
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].session_title, "Day 1: Getting Started");
    }

    #[tokio::test]
    async fn malformed_json_becomes_the_fixed_plan_failure() {
        let mut client = MockLlmClient::new();
        client
            .expect_generate_json()
            .returning(|_, _, _, _| Ok("I am not JSON".to_string()));

        let outcome = live_with(client).training_plan(&topic::catalog()[0]).await;
        assert_eq!(outcome, RequestOutcome::failure(PLAN_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn schema_mismatch_becomes_the_fixed_plan_failure() {
        let mut client = MockLlmClient::new();
        // Valid JSON, but `tips` is missing.
        client
            .expect_generate_json()
            .returning(|_, _, _, _| Ok(r#"[{"sessionTitle": "Day 1", "steps": ["a"]}]"#.into()));

        let outcome = live_with(client).training_plan(&topic::catalog()[1]).await;
        assert_eq!(outcome, RequestOutcome::failure(PLAN_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn transport_error_becomes_the_fixed_plan_failure() {
        let mut client = MockLlmClient::new();
        client
            .expect_generate_json()
            .returning(|_, _, _, _| Err(BackendError::Transport("connection refused".into())));

        let outcome = live_with(client).training_plan(&topic::catalog()[2]).await;
        assert_eq!(outcome, RequestOutcome::failure(PLAN_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn plan_requests_are_independent_and_shape_stable() {
        let mut client = MockLlmClient::new();
        client
            .expect_generate_json()
            .times(2)
            .returning(|_, _, _, _| Ok(VALID_PLAN_JSON.to_string()));

        let service = live_with(client);
        let first = service.training_plan(&topic::catalog()[0]).await;
        let second = service.training_plan(&topic::catalog()[0]).await;
        let (first, second) = (first.value().unwrap(), second.value().unwrap());
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second) {
            assert_eq!(a.steps.len(), b.steps.len());
        }
    }

    #[tokio::test]
    async fn answer_wraps_the_question_in_the_fixed_template() {
        let mut client = MockLlmClient::new();
        client
            .expect_generate_text()
            .withf(|system, prompt, temperature| {
                system == prompts::SYSTEM_INSTRUCTION_QA
                    && prompt == "Here is the user's question: \"Why does she bark at night?\""
                    && *temperature == prompts::QA_TEMPERATURE
            })
            .returning(|_, _, _| Ok("Try a calm evening routine.".to_string()));

        let outcome = live_with(client).answer("Why does she bark at night?").await;
        assert_eq!(outcome, RequestOutcome::success("Try a calm evening routine.".to_string()));
    }

    #[tokio::test]
    async fn answer_transport_error_becomes_the_fixed_answer_failure() {
        let mut client = MockLlmClient::new();
        client
            .expect_generate_text()
            .returning(|_, _, _| Err(BackendError::Api { status: 429, body: "rate limited".into() }));

        let outcome = live_with(client).answer("How do I stop jumping?").await;
        assert_eq!(outcome, RequestOutcome::failure(ANSWER_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn gate_flips_between_canned_and_live_behavior() {
        // Absent credential: canned content, zero network calls.
        let demo = from_credential(None, "gemini-2.5-flash");
        let canned = demo.answer("How do I stop jumping?").await;
        assert!(canned.value().unwrap().contains("How do I stop jumping?"));

        // Present credential (injected client): live content for the same input.
        let mut client = MockLlmClient::new();
        client
            .expect_generate_text()
            .returning(|_, _, _| Ok("Turn away until all four paws are down.".to_string()));
        let live = live_with(client);
        let generated = live.answer("How do I stop jumping?").await;
        assert_eq!(
            generated,
            RequestOutcome::success("Turn away until all four paws are down.".to_string())
        );
        assert_ne!(canned, generated);
    }
}
