//! Clubhouse tracker client using reqwest

use crate::error::{Error, Result};
use crate::tracker::StoryTracker;
use crate::types::Story;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://api.clubhouse.io/api/v3";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Clubhouse API client
pub struct ClubhouseClient {
    client: Client,
    token: String,
    base_url: String,
}

impl ClubhouseClient {
    /// Create a client against the public API
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl StoryTracker for ClubhouseClient {
    async fn fetch_story(&self, story_id: &str) -> Result<Story> {
        let url = format!("{}/stories/{story_id}", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Clubhouse-Token", &self.token)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(Error::StoryNotFound(story_id.to_string())),
            status if !status.is_success() => Err(Error::Tracker(format!(
                "story fetch failed with status {status}"
            ))),
            _ => Ok(response.json::<Story>().await?),
        }
    }
}
