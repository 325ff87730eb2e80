use std::net::SocketAddr;
use tracing::Level;

/// The credential sources checked by the availability gate, in order.
/// They are equivalent in meaning; the first non-empty one wins.
const CREDENTIAL_VARS: [&str; 3] = ["GEMINI_API_KEY", "API_KEY", "PAWSTEPS_API_KEY"];

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
///
/// The credential decision is made exactly once here. `credential: None` is a
/// valid, supported state (demo mode), not an error, unless strict mode is
/// enabled via `REQUIRE_API_KEY`.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub credential: Option<String>,
    pub chat_model: String,
    pub require_credential: bool,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let credential = CREDENTIAL_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        let require_credential = std::env::var("REQUIRE_API_KEY")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        if require_credential && credential.is_none() {
            return Err(ConfigError::MissingVar(
                "GEMINI_API_KEY must be set when REQUIRE_API_KEY is enabled".to_string(),
            ));
        }

        let chat_model =
            std::env::var("CHAT_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            credential,
            chat_model,
            require_credential,
            log_level,
        })
    }

    /// True when a backend credential is configured (live mode).
    pub fn credential_available(&self) -> bool {
        self.credential.is_some()
    }
}
