//! Application Configuration
//!
//! Defaults suit the public JSONPlaceholder API. A JSON object stored in the
//! `taskfeed.config` slot overrides individual fields.

use serde::{Deserialize, Serialize};

use crate::feed::DEFAULT_PAGE_SIZE;
use crate::storage::KeyValueStore;
use crate::task_store::TASKS_KEY;

/// Storage slot holding configuration overrides
pub const CONFIG_KEY: &str = "taskfeed.config";

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the posts endpoint
    pub api_base_url: String,
    pub page_size: u32,
    /// Storage slot for the task list
    pub tasks_key: String,
    /// `log` level name: error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            tasks_key: TASKS_KEY.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults merged with whatever override slot `store` holds
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.read(CONFIG_KEY) {
            Ok(Some(raw)) => Self::from_json(&raw),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[CONFIG] {}", e);
                Self::default()
            }
        }
    }

    /// Parse overrides, falling back to defaults when malformed
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("[CONFIG] Ignoring malformed overrides: {}", e);
                Self::default()
            }
        }
    }

    /// Parsed log level, `Info` when unrecognised
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.tasks_key.trim().is_empty() {
            self.tasks_key = TASKS_KEY.to_string();
        }
        self
    }
}
