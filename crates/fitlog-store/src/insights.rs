//! Per-user workout statistics.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Result;

/// Aggregate statistics over all workouts of one user.
///
/// For a user with no workouts every field is zero; a missing user is
/// indistinguishable from a user who never trained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutInsights {
    pub total_workouts: i64,
    /// Sum of all workout durations, in minutes.
    pub total_duration: i64,
    pub avg_duration: f64,
    pub min_duration: i64,
    pub max_duration: i64,
}

impl Database {
    /// Compute workout statistics for a user in a single aggregate query.
    pub fn get_workout_insights(&self, user_id: i64) -> Result<WorkoutInsights> {
        let insights = self.conn().query_row(
            "SELECT COUNT(workout_id),
                    COALESCE(SUM(duration_minutes), 0),
                    COALESCE(AVG(duration_minutes), 0),
                    COALESCE(MIN(duration_minutes), 0),
                    COALESCE(MAX(duration_minutes), 0)
             FROM workouts
             WHERE user_id = ?1",
            params![user_id],
            |row| {
                Ok(WorkoutInsights {
                    total_workouts: row.get(0)?,
                    total_duration: row.get(1)?,
                    avg_duration: row.get(2)?,
                    min_duration: row.get(3)?,
                    max_duration: row.get(4)?,
                })
            },
        )?;
        Ok(insights)
    }
}
