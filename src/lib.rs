pub mod board;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod parsers;
pub mod utils;

pub use crate::board::{ListingBoard, ReloadOutcome};
pub use crate::config::Config;
pub use crate::error::{ConfigError, FeedError};
pub use crate::feed::{ListingSource, SheetFeed};
pub use crate::models::{Condition, Listing, Record};
pub use crate::parsers::parse_listings;
