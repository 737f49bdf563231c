#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::notion::NOTION_API_BASE_URL;
use crate::domain::ports::NotionCredentials;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{validate_url, Validate};

pub const API_KEY_VAR: &str = "NOTION_API_KEY";
pub const DATABASE_ID_VAR: &str = "DATABASE_ID";
pub const BASE_URL_VAR: &str = "NOTION_API_BASE_URL";

/// Process-wide, read-only relay settings. Built once at startup and handed
/// to the translator; the two Notion values are only checked per request.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub database_id: Option<String>,
    pub base_url: String,
}

impl RelayConfig {
    pub fn new(api_key: Option<String>, database_id: Option<String>) -> Self {
        Self {
            api_key,
            database_id,
            base_url: NOTION_API_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so callers (and tests) are not
    /// tied to the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| NOTION_API_BASE_URL.to_string());

        Self {
            api_key: lookup(API_KEY_VAR),
            database_id: lookup(DATABASE_ID_VAR),
            base_url,
        }
    }

    /// Both Notion values, or the missing-configuration error. Empty strings
    /// count as missing.
    pub fn credentials(&self) -> Result<NotionCredentials<'_>> {
        let api_key = non_empty(&self.api_key);
        let database_id = non_empty(&self.database_id);

        match (api_key, database_id) {
            (Some(api_key), Some(database_id)) => Ok(NotionCredentials {
                api_key,
                database_id,
            }),
            _ => Err(RelayError::missing_config()),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.credentials().is_ok()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("database_id", &self.database_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;

        // 자격 증명 누락은 요청마다 500 으로 처리하므로 여기서는 경고만 남긴다
        if !self.is_complete() {
            tracing::warn!(
                "{} or {} is not set; every submission will fail until configured",
                API_KEY_VAR,
                DATABASE_ID_VAR
            );
        }

        tracing::debug!("Relay configuration validation passed");
        Ok(())
    }
}
