use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::error::FeedError;
use crate::feed::ListingSource;
use crate::models::Listing;

/// What a call to [`ListingBoard::reload`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// No sheet configured; nothing happened.
    Skipped,
    /// Listings were replaced with this many entries.
    Loaded(usize),
    /// The fetch failed; previous listings were kept.
    Failed,
}

/// The inventory currently on display, plus loading and error state.
///
/// The parsing pipeline is stateless; this is the only place results are kept.
/// A failed reload leaves the previous listings in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingBoard {
    listings: Vec<Listing>,
    loading: bool,
    error: Option<String>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl ListingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Time of the last successful reload.
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Mark a reload as in flight. Pair with [`ListingBoard::finish_reload`].
    ///
    /// Callers that render while the fetch runs hold the board only for these
    /// two calls, not across the await.
    pub fn begin_reload(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the result of a fetch started after [`ListingBoard::begin_reload`].
    ///
    /// Success replaces the listings wholesale. Failure records the error message
    /// and keeps the current listings.
    pub fn finish_reload(&mut self, result: Result<Vec<Listing>, FeedError>) -> ReloadOutcome {
        let outcome = match result {
            Ok(listings) => {
                let count = listings.len();
                self.listings = listings;
                self.refreshed_at = Some(Utc::now());
                info!("Loaded {} listings", count);
                ReloadOutcome::Loaded(count)
            }
            Err(e) => {
                error!("Failed to load listings: {}", e);
                self.error = Some(e.to_string());
                ReloadOutcome::Failed
            }
        };

        self.loading = false;
        outcome
    }

    /// Fetch once from `source` and replace the listings on success.
    ///
    /// `None` means no sheet is configured and is a no-op.
    pub async fn reload(&mut self, source: Option<&dyn ListingSource>) -> ReloadOutcome {
        let Some(source) = source else {
            return ReloadOutcome::Skipped;
        };

        self.begin_reload();
        let result = source.fetch_listings().await;
        self.finish_reload(result)
    }
}
