//! # fitlog
//!
//! Command-line front end for the fitlog fitness tracker.
//!
//! All data lives in a local SQLite database managed by `fitlog-store`. The
//! binary provides:
//! - **User profiles** (create, list, show, update, delete)
//! - **Workout logging** with per-exercise detail, written atomically
//! - **Goals** with progress tracking
//! - **Friends** and the friends leaderboard
//! - **Insights**: per-user workout statistics
//!
//! Every command accepts `--json` for machine-readable output and `--db` to
//! point at a specific database file (`FITLOG_DB` works too).

mod commands;
mod config;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitlog_store::Database;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(
    name = "fitlog",
    author,
    version,
    about = "Track workouts, goals and friends from the command line"
)]
struct Cli {
    /// Path to the SQLite database file (overrides FITLOG_DB and the
    /// platform default)
    #[arg(long, value_name = "PATH", global = true)]
    db: Option<PathBuf>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage user profiles
    User(commands::user::UserArgs),
    /// Log workouts and inspect past sessions
    Workout(commands::workout::WorkoutArgs),
    /// Set goals and track progress against them
    Goal(commands::goal::GoalArgs),
    /// Manage the friends list
    Friend(commands::friend::FriendArgs),
    /// Show aggregate workout statistics for a user
    Insights(commands::stats::InsightsArgs),
    /// Rank a user and their friends on a workout metric
    Leaderboard(commands::stats::LeaderboardArgs),
}

fn main() -> Result<()> {
    // Respects RUST_LOG; quiet by default so tables stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mut db = open_database(cli.db.as_deref())?;

    match cli.command {
        Commands::User(args) => commands::run_user(&mut db, args, cli.json),
        Commands::Workout(args) => commands::run_workout(&mut db, args, cli.json),
        Commands::Goal(args) => commands::run_goal(&db, args, cli.json),
        Commands::Friend(args) => commands::run_friend(&db, args, cli.json),
        Commands::Insights(args) => commands::run_insights(&db, args, cli.json),
        Commands::Leaderboard(args) => commands::run_leaderboard(&db, args, cli.json),
    }
}

/// Open the database, preferring the `--db` flag, then `FITLOG_DB`, then the
/// platform data directory.
fn open_database(flag: Option<&Path>) -> Result<Database> {
    let config = CliConfig::from_env();

    let db = match flag.map(Path::to_path_buf).or(config.db_path) {
        Some(path) => Database::open_at(&path)?,
        None => Database::new()?,
    };

    if let Some(path) = db.path() {
        tracing::debug!(path = %path.display(), "database opened");
    }
    Ok(db)
}
