//! Core logic for the pawsteps dog-training assistant.
//!
//! This crate holds everything the HTTP service layer consumes: the static
//! training-topic catalog, the training-plan wire schema and its validation,
//! the Gemini backend client behind the [`llm_client::LlmClient`] seam, and
//! the [`content::ContentService`] implementations (live generation and the
//! canned demo fallback used when no API credential is configured).

pub mod content;
pub mod fallback;
pub mod llm_client;
pub mod outcome;
pub mod plan;
pub mod prompts;
pub mod topic;
