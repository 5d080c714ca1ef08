pub mod condition;
pub mod csv;
pub mod listing;

pub use condition::*;
pub use csv::*;
pub use listing::*;

use crate::models::Listing;

/// Parse a published sheet export into display listings.
///
/// Never fails: malformed quoting, ragged rows and junk cells all fall back to defaults.
pub fn parse_listings(text: &str) -> Vec<Listing> {
    normalize_listings(&csv_to_records(text))
}
