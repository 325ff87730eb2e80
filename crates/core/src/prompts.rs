//! Prompt text and generation parameters for the two content operations.

/// System instruction for structured training-plan generation.
pub const SYSTEM_INSTRUCTION_TRAINER: &str =
    "You are a patient, encouraging, and professional service dog trainer specializing in \
     assisting elderly handlers. Your language must be simple, clear, and always positive. \
     Avoid jargon. Structure your training plans logically with short, actionable steps. \
     Ensure all advice prioritizes the safety and well-being of both the handler and the dog.";

/// System instruction for free-text Q&A answers.
pub const SYSTEM_INSTRUCTION_QA: &str =
    "You are a patient, encouraging, and professional service dog training assistant for an \
     elderly person. Your language must be simple, clear, and always positive. You are \
     answering a specific question about a training issue. Provide a concise, \
     easy-to-understand, and actionable answer using positive reinforcement principles. Keep \
     the response focused on the question and under 150 words.";

/// Low temperature keeps structured plan output close to the schema.
pub const PLAN_TEMPERATURE: f32 = 0.5;

/// Conversational answers tolerate more varied phrasing.
pub const QA_TEMPERATURE: f32 = 0.7;

/// Wraps a user question in the fixed instructional template sent to the backend.
pub fn qa_prompt(question: &str) -> String {
    format!("Here is the user's question: \"{question}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qa_prompt_quotes_the_question() {
        assert_eq!(
            qa_prompt("How do I stop jumping?"),
            "Here is the user's question: \"How do I stop jumping?\""
        );
    }
}
