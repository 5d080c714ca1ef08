use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{error, warn};

use crate::config::Config;
use crate::error::FeedError;

pub fn create_client(config: &Config) -> reqwest::Result<Client> {
    ClientBuilder::new()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .pool_max_idle_per_host(2)
        .build()
}

/// One GET of `url`, returning the body as text. Non-2xx statuses are errors.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, FeedError> {
    let response = client.get(url).send().await.map_err(|source| {
        error!("Request failed for {}: {}", url, source);
        FeedError::Request {
            url: url.to_string(),
            source,
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("HTTP error {}: {}", status, url);
        return Err(FeedError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| FeedError::Body {
        url: url.to_string(),
        source,
    })
}
