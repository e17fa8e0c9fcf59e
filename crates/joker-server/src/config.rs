use joker_model::{LanguageRegistry, ParseError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

pub const CONFIG_SCHEMA_VERSION: &str = "1";

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_languages() -> BTreeMap<String, String> {
    [("en", "English"), ("de", "German"), ("es", "Spanish")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Origins echoed back by the CORS middleware; a `"*"` entry allows any.
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    /// Supported language codes mapped to display names.
    #[serde(default = "default_languages")]
    pub languages: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_allowed_origins: default_cors_allowed_origins(),
            languages: default_languages(),
        }
    }
}

impl AppConfig {
    pub fn registry(&self) -> Result<LanguageRegistry, ParseError> {
        LanguageRegistry::from_map(self.languages.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    Io(String, String),
    Parse(String, String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, cause) => write!(f, "reading config {path} failed: {cause}"),
            Self::Parse(path, cause) => write!(f, "parsing config {path} failed: {cause}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;
    toml::from_str(&raw).map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))
}

pub fn validate_startup_config(config: &AppConfig) -> Result<(), String> {
    if config.languages.is_empty() {
        return Err("language registry must not be empty".to_string());
    }
    if config.bind.parse::<std::net::SocketAddr>().is_err() {
        return Err(format!("invalid bind address {}", config.bind));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_startup_validation() {
        let config = AppConfig::default();
        validate_startup_config(&config).expect("defaults valid");
    }

    #[test]
    fn startup_validation_rejects_empty_registry() {
        let config = AppConfig {
            languages: BTreeMap::new(),
            ..AppConfig::default()
        };
        let err = validate_startup_config(&config).expect_err("empty registry");
        assert!(err.contains("registry"));
    }

    #[test]
    fn startup_validation_rejects_unparseable_bind() {
        let config = AppConfig {
            bind: "not-an-addr".to_string(),
            ..AppConfig::default()
        };
        let err = validate_startup_config(&config).expect_err("bad bind");
        assert!(err.contains("bind address"));
    }
}
