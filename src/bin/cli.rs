use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use sport_events::config::Config;
use sport_events::countdown::{format_countdown, now_epoch};
use sport_events::display::{collapse_indicator, event_lines, favorite_marker, sport_icon};
use sport_events::{load_sports_board, load_sports_board_from_file, SportsBoard};
use std::path::PathBuf;

/// Upcoming sport events with countdowns, favorites first
#[derive(Debug, Parser)]
#[command(name = "sport-events", version)]
struct Args {
    /// Feed URL (overrides SPORTS_FEED_URL)
    #[arg(long)]
    url: Option<String>,

    /// Read the feed from a JSON file instead of fetching it
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Reference time in epoch seconds (defaults to now)
    #[arg(long, allow_hyphen_values = true)]
    now: Option<i64>,

    /// Toggle the favorite flag of an event, in order (repeatable)
    #[arg(long = "favorite", value_name = "EVENT_ID")]
    favorites: Vec<String>,

    /// Collapse a sport group (repeatable)
    #[arg(long = "collapse", value_name = "SPORT_ID")]
    collapse: Vec<String>,

    /// Print the board as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SportView<'a> {
    id: &'a str,
    name: &'a str,
    icon: &'a str,
    collapsed: bool,
    events: Vec<EventView<'a>>,
}

#[derive(Debug, Serialize)]
struct EventView<'a> {
    id: &'a str,
    name: &'a str,
    short_name: &'a str,
    start_time: i64,
    countdown: String,
    favorite: bool,
}

fn board_view(board: &SportsBoard, now: i64) -> Vec<SportView<'_>> {
    board
        .sports()
        .iter()
        .map(|sport| SportView {
            id: &sport.id,
            name: &sport.name,
            icon: sport_icon(&sport.id),
            collapsed: sport.collapsed,
            events: sport
                .events
                .iter()
                .map(|event| EventView {
                    id: &event.id,
                    name: &event.name,
                    short_name: &event.short_name,
                    start_time: event.start_time,
                    countdown: format_countdown(event.start_time, now),
                    favorite: event.favorite,
                })
                .collect(),
        })
        .collect()
}

fn print_board(board: &SportsBoard, now: i64) {
    for sport in board_view(board, now) {
        println!(
            "{} {} ({} events) {}",
            sport.icon,
            sport.name,
            sport.events.len(),
            collapse_indicator(sport.collapsed)
        );
        if sport.collapsed {
            continue;
        }

        for event in &sport.events {
            let name = event_lines(event.name);
            let mut lines = name.lines();
            println!(
                "  {} {}  {}",
                favorite_marker(event.favorite),
                event.countdown,
                lines.next().unwrap_or_default()
            );
            // Continuation lines line up under the first competitor
            let indent = " ".repeat(4 + event.countdown.chars().count() + 2);
            for line in lines {
                println!("{}{}", indent, line);
            }
        }
        println!();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let now = args.now.unwrap_or_else(now_epoch);

    let mut board = match &args.file {
        Some(path) => load_sports_board_from_file(path, now)?,
        None => {
            let mut config = Config::from_env().context("Failed to load configuration")?;
            if let Some(url) = args.url {
                config.feed_url = url;
            }
            load_sports_board(&config, now).await?
        }
    };

    for event_id in &args.favorites {
        board
            .toggle_favorite_by_id(event_id)
            .with_context(|| format!("Failed to toggle favorite {}", event_id))?;
    }

    for sport_id in &args.collapse {
        let index = board
            .sport_index(sport_id)
            .with_context(|| format!("Unknown sport {}", sport_id))?;
        if !board.sports()[index].collapsed {
            board.toggle_collapsed(index)?;
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&board_view(&board, now))
            .context("Failed to serialize board")?;
        println!("{}", json);
    } else if board.sports().is_empty() {
        println!("No sports in feed.");
    } else {
        print_board(&board, now);
    }

    Ok(())
}
