//! Training-plan wire types and schema validation.
//!
//! The backend is asked for JSON constrained to an array of sessions; this
//! module is the boundary that refuses to let a malformed document become a
//! [`TrainingPlan`] value.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One session of a multi-day training plan. Field names are camelCase on
/// the wire to match the backend's structured-output schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub session_title: String,
    pub steps: Vec<String>,
    pub tips: String,
}

/// An ordered curriculum of training sessions (five in practice, not enforced).
pub type TrainingPlan = Vec<TrainingSession>;

/// Why a backend response was rejected by [`parse_plan`].
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("response was not valid JSON for the plan schema: {0}")]
    Json(#[from] serde_json::Error),
    #[error("plan contained no sessions")]
    Empty,
    #[error("session {index} has an empty `{field}` field")]
    EmptyField { index: usize, field: &'static str },
}

/// Parses and validates backend text into a [`TrainingPlan`].
///
/// Required fields are enforced by deserialization; on top of that, an empty
/// plan or blank `sessionTitle`/`steps`/`tips` values are rejected so that no
/// hollow session ever reaches the presentation layer.
pub fn parse_plan(raw: &str) -> Result<TrainingPlan, PlanError> {
    let plan: TrainingPlan = serde_json::from_str(raw.trim())?;
    if plan.is_empty() {
        return Err(PlanError::Empty);
    }
    for (index, session) in plan.iter().enumerate() {
        if session.session_title.trim().is_empty() {
            return Err(PlanError::EmptyField { index, field: "sessionTitle" });
        }
        if session.steps.is_empty() || session.steps.iter().any(|s| s.trim().is_empty()) {
            return Err(PlanError::EmptyField { index, field: "steps" });
        }
        if session.tips.trim().is_empty() {
            return Err(PlanError::EmptyField { index, field: "tips" });
        }
    }
    Ok(plan)
}

/// The response schema sent with every training-plan request, constraining
/// the backend to an array of `{sessionTitle, steps, tips}` objects.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "sessionTitle": {
                    "type": "STRING",
                    "description": "A brief, encouraging title for the training session, e.g., \"Day 1: Getting Started\".",
                },
                "steps": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "A list of 2-4 simple, actionable steps for the training session.",
                },
                "tips": {
                    "type": "STRING",
                    "description": "A helpful tip or a reminder for the session, e.g., \"Keep it short and fun!\"",
                },
            },
            "required": ["sessionTitle", "steps", "tips"],
        },
    })
}
