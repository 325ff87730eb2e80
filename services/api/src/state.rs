//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the content
//! service selected by the availability gate and the loaded configuration.

use crate::config::Config;
use pawsteps_core::content::ContentService;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentService>,
    pub config: Arc<Config>,
}
