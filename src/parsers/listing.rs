use tracing::debug;

use crate::models::{Listing, Record};

use super::to_condition;

const DEFAULT_CONDITION: &str = "NM";

/// Trimmed cell text, or `default` when the column or cell is missing.
fn cell<'a>(record: &'a Record, key: &str, default: &'a str) -> &'a str {
    record.get(key).unwrap_or(default).trim()
}

/// Sheet rows are live unless `active` reads "false" (any case, surrounding spaces ignored).
pub fn is_active(record: &Record) -> bool {
    cell(record, "active", "").to_lowercase() != "false"
}

/// Build a listing from one row, filling every missing field with its default.
pub fn record_to_listing(record: &Record) -> Listing {
    let img = cell(record, "img", "");

    Listing {
        name: cell(record, "name", "").to_string(),
        condition: to_condition(cell(record, "condition", DEFAULT_CONDITION)),
        price: cell(record, "price", "").to_string(),
        img: (!img.is_empty()).then(|| img.to_string()),
    }
}

/// Listings for every active row, in sheet order.
pub fn normalize_listings(records: &[Record]) -> Vec<Listing> {
    let listings: Vec<Listing> = records
        .iter()
        .filter(|record| is_active(record))
        .map(record_to_listing)
        .collect();

    let hidden = records.len() - listings.len();
    if hidden > 0 {
        debug!("Skipped {} inactive rows", hidden);
    }

    listings
}
