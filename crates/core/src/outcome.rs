use serde::Serialize;

/// The uniform result shape the presentation layer consumes.
///
/// Every content operation resolves to exactly one of these variants; no
/// error is allowed to propagate past the content-service boundary in any
/// other form. Serializes as a tagged union, e.g.
/// `{"status":"success","value":...}` or
/// `{"status":"failure","message":"..."}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RequestOutcome<T> {
    Success { value: T },
    Failure { message: String },
}

impl<T> RequestOutcome<T> {
    pub fn success(value: T) -> Self {
        Self::Success { value }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the success value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value } => Some(value),
            Self::Failure { .. } => None,
        }
    }
}
