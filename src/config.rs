//! Widget Configuration
//!
//! Optional JSON configuration embedded in the host page:
//!
//! ```html
//! <script id="todo-config" type="application/json">
//!   { "seed": [{ "id": 1, "name": "Learn Leptos" }], "log_level": "debug" }
//! </script>
//! ```
//!
//! Every field is optional; missing fields fall back to the defaults below.

use std::collections::HashSet;
use std::str::FromStr;

use leptos::prelude::*;
use serde::Deserialize;

use crate::models::{default_seed, Todo};

/// Id of the script element the configuration is read from
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Initial contents of the list
    pub seed: Vec<Todo>,
    /// Placeholder of the new-todo input
    pub placeholder: String,
    pub current_title: String,
    pub completed_title: String,
    /// `KeyboardEvent.key` value that submits the new-todo input
    pub activation_key: String,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            placeholder: "Write a todo name".to_string(),
            current_title: "Current Todos".to_string(),
            completed_title: "Completed Todos".to_string(),
            activation_key: "Enter".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    DuplicateId(u64),
    InvalidLogLevel(String),
    EmptyActivationKey,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Invalid config JSON: {}", msg),
            ConfigError::DuplicateId(id) => write!(f, "Duplicate todo id in seed: {}", id),
            ConfigError::InvalidLogLevel(level) => write!(f, "Unknown log level: {}", level),
            ConfigError::EmptyActivationKey => write!(f, "Activation key must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl WidgetConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for todo in &self.seed {
            if !seen.insert(todo.id) {
                return Err(ConfigError::DuplicateId(todo.id));
            }
        }
        if self.activation_key.is_empty() {
            return Err(ConfigError::EmptyActivationKey);
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// Read the configuration from the host page.
///
/// A missing element gives the defaults; an invalid one is an error.
#[cfg(target_arch = "wasm32")]
pub fn load() -> Result<WidgetConfig, ConfigError> {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(text) if !text.trim().is_empty() => WidgetConfig::from_json(&text),
        _ => Ok(WidgetConfig::default()),
    }
}

/// Outside the browser there is no host page; always the defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Result<WidgetConfig, ConfigError> {
    Ok(WidgetConfig::default())
}

/// Get the widget configuration from context, or the defaults
pub fn use_config() -> WidgetConfig {
    use_context::<WidgetConfig>().unwrap_or_default()
}
