use crate::models::SportGroup;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

pub const SPORTS_API_URL: &str = "https://618d3aa7fe09aa001744060a.mockapi.io/api/sports";
const JSON_MIME: &str = "application/json";

/// Ways fetching the events feed can fail
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to reach sports feed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("sports feed returned error: {0}")]
    Status(StatusCode),

    #[error("failed to decode sports feed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode a raw feed payload into sport groups
///
/// Events keep their feed order here; filtering and sorting happen in
/// `normalize`.
pub fn decode_feed(payload: &[u8]) -> Result<Vec<SportGroup>, FeedError> {
    let sports: Vec<SportGroup> = serde_json::from_slice(payload)?;
    Ok(sports)
}

pub struct SportsApiClient {
    url: String,
    client: Client,
}

impl SportsApiClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        Ok(Self {
            url: url.into(),
            client: Client::builder().timeout(timeout).build()?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the feed once and decode it
    pub async fn fetch_sports(&self) -> Result<Vec<SportGroup>, FeedError> {
        debug!(url = %self.url, "Requesting sports feed");

        let response = self
            .client
            .get(&self.url)
            .header(CONTENT_TYPE, JSON_MIME)
            .header(ACCEPT, JSON_MIME)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let payload = response.bytes().await?;
        let sports = decode_feed(&payload)?;
        info!(
            url = %self.url,
            sports = sports.len(),
            bytes = payload.len(),
            "Fetched sports feed"
        );
        Ok(sports)
    }
}
