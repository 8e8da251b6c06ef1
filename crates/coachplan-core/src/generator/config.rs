//! Generator configuration loaded from environment variables.

use std::{env, time::Duration};

use crate::error::{CoachError, Result};

pub const API_KEY_VAR: &str = "COACHPLAN_API_KEY";
pub const API_URL_VAR: &str = "COACHPLAN_API_URL";
pub const MODEL_VAR: &str = "COACHPLAN_MODEL";
pub const TIMEOUT_VAR: &str = "COACHPLAN_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for the hosted chat-completion API.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Bearer token for the API
    pub api_key: String,
    /// Base URL; `/chat/completions` is appended
    pub base_url: String,
    pub model: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl GeneratorConfig {
    /// Builds a config with default endpoint, model and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::Configuration` when `COACHPLAN_API_KEY` is unset
    /// or blank, or when `COACHPLAN_TIMEOUT_SECS` is not a whole number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`GeneratorConfig::from_env`] with an injectable variable
    /// source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                CoachError::configuration(format!(
                    "{API_KEY_VAR} is not set; remote plan generation is unavailable"
                ))
            })?;

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                CoachError::configuration(format!("{TIMEOUT_VAR} must be whole seconds, got '{raw}'"))
            })?),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            base_url: lookup(API_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout,
        })
    }

    /// Full URL of the chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
