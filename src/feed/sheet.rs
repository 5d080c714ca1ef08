use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::error::FeedError;
use crate::feed::ListingSource;
use crate::models::Listing;
use crate::parsers::parse_listings;
use crate::utils::http::fetch_text;

/// A spreadsheet published to the web as CSV.
pub struct SheetFeed {
    client: Client,
    url: String,
}

impl SheetFeed {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ListingSource for SheetFeed {
    async fn fetch_listings(&self) -> Result<Vec<Listing>, FeedError> {
        info!("Fetching inventory sheet from {}", self.url);

        let text = fetch_text(&self.client, &self.url).await?;
        let listings = parse_listings(&text);

        info!("Parsed {} listings from {} bytes of CSV", listings.len(), text.len());
        Ok(listings)
    }

    fn source_url(&self) -> &str {
        &self.url
    }
}
