// src/fetch.rs
use reqwest::Client;

use crate::config::FetchConfig;
use crate::error::FeedError;
use crate::feed::{parse_feed, Feed};

/// Issues the one GET of a run and hands the body to the feed parser.
#[derive(Clone)]
pub struct FeedFetcher {
    client: Client,
    config: FetchConfig,
}

impl FeedFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// GET `url`, require a 2xx status and parse the body. No retries.
    pub async fn fetch(&self, url: &str) -> Result<Feed, FeedError> {
        let t0 = std::time::Instant::now();
        tracing::info!(url, timeout_secs = self.config.timeout.as_secs(), "fetching feed");

        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(error = ?e, url, "feed http error");
                return Err(e.into());
            }
        };

        let status = resp.status();
        let resp = resp.error_for_status().map_err(|e| {
            tracing::debug!(%status, url, "feed http status");
            FeedError::from(e)
        })?;

        let body = resp.bytes().await?;
        tracing::info!(
            url,
            %status,
            bytes = body.len(),
            fetch_ms = t0.elapsed().as_secs_f64() * 1_000.0,
            "feed fetched"
        );

        parse_feed(&body)
    }
}
