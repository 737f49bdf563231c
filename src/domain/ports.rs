use crate::domain::model::{CreatedPage, ExternalPage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Credentials resolved from configuration for a single outbound call.
#[derive(Clone, Copy)]
pub struct NotionCredentials<'a> {
    pub api_key: &'a str,
    pub database_id: &'a str,
}

impl std::fmt::Debug for NotionCredentials<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionCredentials")
            .field("api_key", &"<redacted>")
            .field("database_id", &self.database_id)
            .finish()
    }
}

/// Destination for translated pages. One call per inbound submission, no
/// retries.
#[async_trait]
pub trait PageCreator: Send + Sync {
    async fn create_page(
        &self,
        credentials: NotionCredentials<'_>,
        page: &ExternalPage,
    ) -> Result<CreatedPage>;
}
