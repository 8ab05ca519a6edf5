mod schema;

pub use schema::{
    RegexSettings, Settings, DEFAULT_REGEX_DFA_SIZE_LIMIT, DEFAULT_REGEX_NEST_LIMIT,
    DEFAULT_REGEX_SIZE_LIMIT,
};

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

use crate::observability::{log_debug, log_warn};

/// parse settings from a JSON string; missing keys take their defaults
pub fn from_json_str(content: &str) -> Result<Settings> {
    serde_json::from_str(content).context("Failed to parse settings")
}

pub fn load(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    log_debug!(
        component = "config",
        event = "settings_loaded",
        path = %path.display(),
        regex_size_limit = settings.regex.size_limit,
    );

    Ok(settings)
}

/// Verify configuration file and return a list of errors
pub fn verify(path: &Path) -> Result<Vec<String>> {
    let mut errors = Vec::new();

    if !path.exists() {
        return Err(anyhow!("config file not found: {}", path.display()));
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let settings: Settings = match serde_json::from_str(&content) {
        Ok(s) => s,
        Err(e) => {
            return Err(anyhow!("invalid JSON: {}", e));
        }
    };

    if settings.regex.size_limit == 0 {
        errors.push("regex.size_limit: must be greater than 0".to_string());
    }
    if settings.regex.dfa_size_limit == 0 {
        errors.push("regex.dfa_size_limit: must be greater than 0".to_string());
    }
    if settings.regex.nest_limit == 0 {
        errors.push("regex.nest_limit: must be greater than 0".to_string());
    }

    for error in &errors {
        log_warn!(component = "config", event = "invalid_setting", path = %path.display(), %error);
    }

    Ok(errors)
}

const VALID_KEYS: [&str; 3] = ["regex.size_limit", "regex.dfa_size_limit", "regex.nest_limit"];

pub fn set_value(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["regex", "size_limit"] => {
            settings.regex.size_limit = value
                .parse()
                .with_context(|| format!("Invalid number: {}", value))?;
        }
        ["regex", "dfa_size_limit"] => {
            settings.regex.dfa_size_limit = value
                .parse()
                .with_context(|| format!("Invalid number: {}", value))?;
        }
        ["regex", "nest_limit"] => {
            settings.regex.nest_limit = value
                .parse()
                .with_context(|| format!("Invalid number: {}", value))?;
        }
        _ => {
            return Err(anyhow!(
                "Unknown config key: {}. Valid keys are: {}",
                key,
                VALID_KEYS.join(", ")
            ));
        }
    }

    Ok(())
}
