//! Notion client — the single point of entry for all document-store calls.
//!
//! Page creation goes through the `PageStore` capability so the formatter,
//! composer, and publisher stay testable without a network dependency.
//! There is deliberately no retry loop here: a failed submission is the
//! caller's to log and drop.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

pub mod types;

use crate::notion::types::{
    Block, CreatePageRequest, CreatedPage, NotionApiError, PageProperties, Parent,
};

const NOTION_API_URL: &str = "https://api.notion.com";
/// Pinned API revision sent with every request.
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, Error)]
pub enum NotionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// The single asynchronous capability the tool needs from the document
/// store: create one remote page from a property map and a block list.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn create_page(
        &self,
        properties: PageProperties,
        children: Vec<Block>,
    ) -> Result<CreatedPage, NotionError>;
}

/// Notion API client. One instance is shared by every in-flight submission.
#[derive(Clone)]
pub struct NotionClient {
    client: Client,
    api_key: String,
    database_id: String,
    base_url: String,
}

impl NotionClient {
    pub fn new(api_key: String, database_id: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            database_id,
            base_url: NOTION_API_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(api_key: String, database_id: String, base_url: String) -> Self {
        let mut client = Self::new(api_key, database_id);
        client.base_url = base_url;
        client
    }
}

#[async_trait]
impl PageStore for NotionClient {
    async fn create_page(
        &self,
        properties: PageProperties,
        children: Vec<Block>,
    ) -> Result<CreatedPage, NotionError> {
        let request_body = CreatePageRequest {
            parent: Parent {
                database_id: self.database_id.clone(),
            },
            properties,
            children,
        };

        let response = self
            .client
            .post(format!("{}/v1/pages", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's message field when the body parses
            let message = serde_json::from_str::<NotionApiError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(NotionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let page: CreatedPage = response.json().await?;
        debug!("Created page {}", page.id);
        Ok(page)
    }
}
