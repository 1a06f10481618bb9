use crate::model::FeedError;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;

#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch_csv(&self, url: &str) -> Result<String, FeedError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; VitrinaStore/0.1)")
            .timeout(Duration::from_secs(15))
            .build()
            .expect("❗ Failed to create HTTP client");

        Self { client }
    }

    /// The published exports sit behind an aggressive CDN cache; a timestamp
    /// query token forces a fresh copy on every refresh.
    fn cache_busted(url: &str) -> String {
        let token = Utc::now().timestamp_millis();
        if url.contains('?') {
            format!("{url}&t={token}")
        } else {
            format!("{url}?t={token}")
        }
    }
}

#[async_trait]
impl FeedFetcher for HttpFetcher {
    async fn fetch_csv(&self, url: &str) -> Result<String, FeedError> {
        let url = Self::cache_busted(url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FeedError::InvalidResponse(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FeedError::Http(e.to_string()))
    }
}
