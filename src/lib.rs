pub mod api;
pub mod board;
pub mod config;
pub mod models;
pub mod utils;

pub use api::*;
pub use board::*;
pub use models::*;
pub use utils::*;

use anyhow::{Context, Result};
use api::sports_api::SportsApiClient;
use config::Config;
use std::path::Path;

/// Fetch the events feed once and build the board from it
///
/// Events starting at or before `now` are dropped; pass `now_epoch()` for the
/// current time.
pub async fn load_sports_board(config: &Config, now: i64) -> Result<SportsBoard> {
    let client = SportsApiClient::new(config.feed_url.as_str(), config.timeout)
        .context("Failed to build sports feed client")?;
    let sports = client
        .fetch_sports()
        .await
        .with_context(|| format!("Failed to load sports feed from {}", client.url()))?;

    Ok(SportsBoard::from_feed(sports, now))
}

/// Build the board from a feed payload saved on disk
pub fn load_sports_board_from_file(path: &Path, now: i64) -> Result<SportsBoard> {
    let payload = std::fs::read(path)
        .with_context(|| format!("Failed to read feed file {}", path.display()))?;
    let sports = decode_feed(&payload)
        .with_context(|| format!("Failed to decode feed file {}", path.display()))?;

    Ok(SportsBoard::from_feed(sports, now))
}
