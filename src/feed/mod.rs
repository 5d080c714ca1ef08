use async_trait::async_trait;

use crate::error::FeedError;
use crate::models::Listing;

mod sheet;

pub use sheet::SheetFeed;

/// Somewhere the shop's inventory can be loaded from.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch and parse the full inventory. Only transport problems are errors.
    async fn fetch_listings(&self) -> Result<Vec<Listing>, FeedError>;
    fn source_url(&self) -> &str;
}
