//! Pawsteps API Library Crate
//!
//! This library contains the HTTP surface of the dog-training assistant:
//! configuration loading, the shared application state, the axum handlers
//! and routing. The `api` binary is a thin wrapper around this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
