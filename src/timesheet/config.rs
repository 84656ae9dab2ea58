//! Settings persisted as `config.json` in the timesheet config directory.

use crate::error::{Result, TimesheetError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CONFIG_DIR_ENV: &str = "TIMESHEET_CONFIG_DIR";

pub const DEFAULT_STYLE: &str = "Rewrite each line of these IT-support activity notes as one \
concise, professional, client-facing timesheet sentence in past tense. Keep one output line per \
input line, in the same order. Keep any trailing client code annotation such as \" – TCG\". Do \
not add bullets, numbering, or commentary.";

/// Configuration for timesheet, stored in `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimesheetConfig {
    /// Client code appended to lines that carry none.
    #[serde(default)]
    pub default_client: Option<String>,

    /// Style prompt sent to the remote rewriter.
    #[serde(default = "default_style")]
    pub style: String,

    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmConfig {
    /// Use the remote rewriter unless told otherwise on the command line.
    #[serde(default)]
    pub enabled: bool,

    /// Base URL of an OpenAI-compatible API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            default_client: None,
            style: default_style(),
            llm: LlmConfig::default(),
        }
    }
}

impl TimesheetConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TimesheetConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Applies `key = value`, where `key` is one of [`CONFIG_KEYS`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-client" => {
                let value = value.trim();
                self.default_client = if value.is_empty() || value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.to_uppercase())
                };
            }
            "style" => self.style = value.to_string(),
            "llm-enabled" => self.llm.enabled = parse_bool(value)?,
            "llm-endpoint" => self.llm.endpoint = value.trim().to_string(),
            "llm-model" => self.llm.model = value.trim().to_string(),
            "llm-api-key-env" => self.llm.api_key_env = value.trim().to_string(),
            "llm-timeout" => {
                self.llm.timeout_secs = value.trim().parse().map_err(|_| {
                    TimesheetError::Config(format!("llm-timeout expects seconds, got {}", value))
                })?
            }
            other => return Err(TimesheetError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    /// Current value of `key` as shown to the user.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "default-client" => self.default_client.clone().unwrap_or_else(|| "none".into()),
            "style" => self.style.clone(),
            "llm-enabled" => self.llm.enabled.to_string(),
            "llm-endpoint" => self.llm.endpoint.clone(),
            "llm-model" => self.llm.model.clone(),
            "llm-api-key-env" => self.llm.api_key_env.clone(),
            "llm-timeout" => self.llm.timeout_secs.to_string(),
            other => return Err(TimesheetError::Config(format!("Unknown config key: {}", other))),
        };
        Ok(value)
    }
}

/// Keys accepted by [`TimesheetConfig::get`] and [`TimesheetConfig::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "default-client",
    "style",
    "llm-enabled",
    "llm-endpoint",
    "llm-model",
    "llm-api-key-env",
    "llm-timeout",
];

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(TimesheetError::Config(format!(
            "Expected true or false, got {}",
            value
        ))),
    }
}

/// Directory holding `config.json`: `$TIMESHEET_CONFIG_DIR` if set, otherwise
/// the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    ProjectDirs::from("com", "timesheet", "timesheet")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TimesheetError::Config("Could not determine config dir".to_string()))
}
