//! Configuration loading for nlsql-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variable NLSQL_CONFIG_PATH
//! 2. ~/.nlsql/config.toml
//! 3. Default values
//!
//! Individual settings can then be overridden via NLSQL_SCHEMA_DIR,
//! NLSQL_MODEL and OPENAI_BASE_URL. The API key itself is read from the
//! environment by the completion backend, never from the config file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Schema directory settings
    #[serde(default)]
    pub schemas: SchemaConfig,
    /// Completion model settings
    #[serde(default)]
    pub model: ModelConfig,
    /// Calculator settings
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Schema directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Directory holding one `.sql` definition file per table
    #[serde(default = "default_schema_dir")]
    pub dir: PathBuf,
}

/// Completion model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier sent with each completion request
    #[serde(default = "default_model")]
    pub name: String,
    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variable the API key is read from
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Strict mode rejects expressions containing characters outside the
    /// arithmetic set; lenient mode strips them before evaluation.
    #[serde(default = "default_true")]
    pub strict: bool,
}

fn default_schema_dir() -> PathBuf {
    PathBuf::from("schemas")
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            dir: default_schema_dir(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            strict: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let mut config = if let Some(path) = config_path {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            } else {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        } else {
            tracing::info!("No config path available, using defaults");
            Self::default()
        };

        // Environment overrides (highest priority)
        if let Ok(dir) = std::env::var("NLSQL_SCHEMA_DIR") {
            config.schemas.dir = PathBuf::from(dir);
        }
        if let Ok(model) = std::env::var("NLSQL_MODEL") {
            config.model.name = model;
        }
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            config.model.base_url = url;
        }

        Ok(config)
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("NLSQL_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".nlsql").join("config.toml"));
        }

        None
    }
}
