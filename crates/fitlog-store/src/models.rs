//! Domain model structs persisted in the fitness database.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to a UI layer. Rows map to named fields rather than positional
//! tuples; the `row_to_*` helpers in each entity module do the conversion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user profile. The primary key is a SQLite rowid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique across all users; a duplicate surfaces as
    /// [`StoreError::DuplicateEmail`](crate::StoreError::DuplicateEmail).
    pub email: String,
    /// Body weight in kilograms.
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// Workout
// ---------------------------------------------------------------------------

/// A logged workout session. Owns zero or more [`Exercise`] rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub id: i64,
    /// The user this workout belongs to.
    pub user_id: i64,
    /// Calendar date of the session, stored as ISO-8601 text in SQLite.
    pub date: NaiveDate,
    pub duration_minutes: i64,
}

// ---------------------------------------------------------------------------
// Exercise
// ---------------------------------------------------------------------------

/// One exercise performed during a workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: i64,
    /// The workout this exercise belongs to.
    pub workout_id: i64,
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    /// Weight used, in kilograms.
    pub weight: f64,
}

/// Input record for one exercise when logging a workout.
///
/// Ids are assigned by the database inside the batch transaction, so the
/// caller only supplies the measured values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewExercise {
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// Goal
// ---------------------------------------------------------------------------

/// A personal goal: free-form description with a numeric target and the
/// progress made towards it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: i64,
    /// The user this goal belongs to.
    pub user_id: i64,
    pub description: String,
    pub target_value: f64,
    /// Starts at zero when the goal is created.
    pub progress_value: f64,
}
