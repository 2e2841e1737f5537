use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://jisho.org/api/v1/search/words".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Word search endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl NetworkConfig {
    /// Apply `JISHO_API_URL` and `JISHO_TIMEOUT_SECONDS` if set
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var("JISHO_API_URL")
            && !url.trim().is_empty()
        {
            self.api_url = url;
        }

        if let Some(timeout) = env::var("JISHO_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.timeout_seconds = timeout;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
