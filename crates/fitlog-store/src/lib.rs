//! # fitlog-store
//!
//! SQLite-backed storage for the fitlog fitness tracker.
//!
//! The crate exposes a synchronous [`Database`] handle that wraps a
//! `rusqlite::Connection` and provides typed CRUD helpers for every domain
//! model: users, workouts and their exercises, goals, and the friends graph.
//! On top of plain CRUD it implements the two aggregate queries the
//! application is built around: per-user workout insights and the friends
//! leaderboard.
//!
//! Every statement is bound-parameterized. Multi-statement writes (logging a
//! workout with its exercises, deleting a user and everything they own) run
//! inside a single transaction and roll back as a unit on failure.

pub mod database;
pub mod friends;
pub mod goals;
pub mod insights;
pub mod leaderboard;
pub mod migrations;
pub mod models;
pub mod users;
pub mod workouts;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use insights::WorkoutInsights;
pub use leaderboard::{LeaderboardEntry, LeaderboardMetric};
pub use models::*;
