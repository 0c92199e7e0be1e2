use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{AssistantError, Result};

const DEFAULT_GREETING: &str = "Hello! I'm your oceanographic research assistant. \
I can help you analyze ARGO float data, generate visualizations, and answer questions \
about ocean conditions. What would you like to explore today?";

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_reply_delay_min_ms() -> u64 {
    1000
}

fn default_reply_delay_max_ms() -> u64 {
    3000
}

/// Session configuration. Templates and their fill ranges are fixed in code;
/// only the greeting, the simulated thinking-time bounds, and the speech
/// capability override are configurable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Lower bound (inclusive) of the simulated reply delay, milliseconds.
    #[serde(default = "default_reply_delay_min_ms")]
    pub reply_delay_min_ms: u64,
    /// Upper bound (exclusive) of the simulated reply delay, milliseconds.
    #[serde(default = "default_reply_delay_max_ms")]
    pub reply_delay_max_ms: u64,
    /// Force the speech-recognition capability on or off instead of probing
    /// the host environment.
    #[serde(default)]
    pub speech: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            reply_delay_min_ms: default_reply_delay_min_ms(),
            reply_delay_max_ms: default_reply_delay_max_ms(),
            speech: None,
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())
            .map_err(|e| AssistantError::Config(format!("read {:?}: {e}", path.as_ref())))?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| AssistantError::Config(format!("parse {:?}: {e}", path.as_ref())))?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.reply_delay_min_ms >= self.reply_delay_max_ms {
            return Err(AssistantError::Config(format!(
                "reply delay bounds must satisfy min < max (got {}..{})",
                self.reply_delay_min_ms, self.reply_delay_max_ms
            )));
        }
        if self.greeting.trim().is_empty() {
            return Err(AssistantError::Config("greeting must not be blank".into()));
        }
        Ok(self)
    }
}
