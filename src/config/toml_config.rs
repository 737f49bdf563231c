use crate::config::RelayConfig;
use crate::utils::error::{RelayError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8888";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub notion: NotionSection,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionSection {
    pub api_key: Option<String>,
    pub database_id: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub listen: Option<String>,
}

impl TomlConfig {
    /// TOML 파일에서 설정 읽기
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RelayError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |key| std::env::var(key).ok())
    }

    /// Parses with `${VAR}` references resolved through `lookup`.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed = substitute_vars(content, lookup)?;

        toml::from_str(&processed).map_err(|e| RelayError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Overlays file values on top of `base`; keys absent from the file keep
    /// the base value.
    pub fn apply_to(&self, base: RelayConfig) -> RelayConfig {
        RelayConfig {
            api_key: self.notion.api_key.clone().or(base.api_key),
            database_id: self.notion.database_id.clone().or(base.database_id),
            base_url: self.notion.base_url.clone().unwrap_or(base.base_url),
        }
    }

    pub fn listen_addr(&self) -> &str {
        self.server.listen.as_deref().unwrap_or(DEFAULT_LISTEN_ADDR)
    }
}

/// `${VAR}` 치환. 정의되지 않은 변수는 그대로 둔다.
fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RelayError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
