use anyhow::{Context, Result};
use chrono::Local;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use card_listings::utils::http::create_client;
use card_listings::{Config, ListingBoard, ListingSource, ReloadOutcome, SheetFeed};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs to stderr; stdout carries the JSON board
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("card_listings=info".parse()?),
        )
        .init();

    info!("Starting card listings loader");

    let config = Config::load().context("Failed to load configuration")?;

    let mut board = ListingBoard::new();

    let Some(url) = config.sheet_url() else {
        warn!("No sheet URL configured (set LISTINGS_SHEET_CSV_URL); nothing to load");
        return print_board(&board);
    };

    let client = create_client(&config).context("Failed to build HTTP client")?;
    let feed = SheetFeed::new(client, url);
    let source: Option<&dyn ListingSource> = Some(&feed);

    if config.check_interval_seconds == 0 {
        board.reload(source).await;
        print_board(&board)?;
        return Ok(());
    }

    // Reloads run one after another, so they never overlap
    let mut interval = interval(Duration::from_secs(config.check_interval_seconds));

    loop {
        interval.tick().await;

        info!("--- Reloading inventory at {} ---", Local::now().format("%Y-%m-%d %H:%M:%S"));

        match board.reload(source).await {
            ReloadOutcome::Loaded(_) => print_board(&board)?,
            ReloadOutcome::Failed => warn!(
                "Keeping {} previously loaded listings",
                board.listings().len()
            ),
            ReloadOutcome::Skipped => {}
        }

        info!("Reload completed, waiting {} seconds", config.check_interval_seconds);
    }
}

fn print_board(board: &ListingBoard) -> Result<()> {
    let json = serde_json::to_string_pretty(board).context("Failed to serialize listings")?;
    println!("{}", json);
    Ok(())
}
