//! API Models
//!
//! Request and response payloads for the HTTP surface. The content payloads
//! themselves (`RequestOutcome`, `TrainingPlan`, the topic catalog) are
//! defined in `pawsteps-core` and serialized as-is.

use serde::{Deserialize, Serialize};

/// Body of `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskPayload {
    pub question: String,
}

/// Uniform error body for non-2xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
