use crate::domain::model::{CreatedPage, ExternalPage};
use crate::domain::ports::{NotionCredentials, PageCreator};
use crate::utils::error::{RelayError, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

pub const NOTION_API_BASE_URL: &str = "https://api.notion.com";
pub const NOTION_VERSION: &str = "2022-06-28";

/// Thin reqwest wrapper around `POST /v1/pages`.
#[derive(Debug, Clone)]
pub struct NotionClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl NotionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn pages_url(&self) -> String {
        format!("{}/v1/pages", self.base_url.trim_end_matches('/'))
    }
}

impl Default for NotionClient {
    fn default() -> Self {
        Self::new(NOTION_API_BASE_URL)
    }
}

#[async_trait::async_trait]
impl PageCreator for NotionClient {
    async fn create_page(
        &self,
        credentials: NotionCredentials<'_>,
        page: &ExternalPage,
    ) -> Result<CreatedPage> {
        let url = self.pages_url();
        tracing::debug!("Creating Notion page via {}", url);

        // Content-Type 은 json() 이 설정한다
        let response = self
            .client
            .post(&url)
            .bearer_auth(credentials.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(page)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Notion API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::NotionApiError {
                status: status.as_u16(),
                message: remote_error_message(status, &body),
            });
        }

        let body = response.bytes().await?;
        let created: CreatedPage = serde_json::from_slice(&body)?;
        Ok(created)
    }
}

/// Best-effort extraction of the remote message: Notion's `message` field,
/// then the raw body, then the status line.
fn remote_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(error_body) = serde_json::from_str::<NotionErrorBody>(body) {
        if let Some(code) = &error_body.code {
            tracing::debug!("Notion error code: {}", code);
        }
        if let Some(message) = error_body.message {
            return message;
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status.to_string()
}
