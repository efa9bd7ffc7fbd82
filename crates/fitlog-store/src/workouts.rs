//! Workout sessions and the exercises performed in them.
//!
//! A workout and its exercises are written in one transaction; either the
//! whole session lands or none of it does.

use chrono::NaiveDate;
use rusqlite::params;

use crate::database::Database;
use crate::error::Result;
use crate::models::{Exercise, NewExercise, Workout};

impl Database {
    /// Record a workout session together with the exercises performed.
    ///
    /// Returns the new workout's id. The exercise list may be empty; a
    /// failure inserting any exercise rolls back the workout row as well.
    pub fn create_workout_with_exercises(
        &mut self,
        user_id: i64,
        date: NaiveDate,
        duration_minutes: i64,
        exercises: &[NewExercise],
    ) -> Result<i64> {
        let tx = self.conn_mut().transaction()?;

        tx.execute(
            "INSERT INTO workouts (user_id, workout_date, duration_minutes)
             VALUES (?1, ?2, ?3)",
            params![user_id, date.to_string(), duration_minutes],
        )?;
        let workout_id = tx.last_insert_rowid();

        for exercise in exercises {
            insert_exercise(&tx, workout_id, exercise)?;
        }

        tx.commit()?;

        tracing::debug!(
            workout_id,
            user_id,
            exercises = exercises.len(),
            "workout logged"
        );
        Ok(workout_id)
    }

    /// All workouts of a user, most recent date first.
    ///
    /// Same-day workouts are returned newest insertion first.
    pub fn get_workouts_for_user(&self, user_id: i64) -> Result<Vec<Workout>> {
        let mut stmt = self.conn().prepare(
            "SELECT workout_id, user_id, workout_date, duration_minutes
             FROM workouts
             WHERE user_id = ?1
             ORDER BY workout_date DESC, workout_id DESC",
        )?;

        let rows = stmt.query_map(params![user_id], row_to_workout)?;

        let mut workouts = Vec::new();
        for row in rows {
            workouts.push(row?);
        }
        Ok(workouts)
    }

    /// The exercises of one workout, in the order they were entered.
    pub fn get_exercises_for_workout(&self, workout_id: i64) -> Result<Vec<Exercise>> {
        let mut stmt = self.conn().prepare(
            "SELECT exercise_id, workout_id, exercise_name, sets, reps, weight
             FROM exercises
             WHERE workout_id = ?1
             ORDER BY exercise_id ASC",
        )?;

        let rows = stmt.query_map(params![workout_id], row_to_exercise)?;

        let mut exercises = Vec::new();
        for row in rows {
            exercises.push(row?);
        }
        Ok(exercises)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn insert_exercise(
    tx: &rusqlite::Transaction<'_>,
    workout_id: i64,
    exercise: &NewExercise,
) -> Result<()> {
    tx.execute(
        "INSERT INTO exercises (workout_id, exercise_name, sets, reps, weight)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            workout_id,
            exercise.name,
            exercise.sets,
            exercise.reps,
            exercise.weight
        ],
    )?;
    Ok(())
}

fn row_to_workout(row: &rusqlite::Row<'_>) -> rusqlite::Result<Workout> {
    let date: String = row.get(2)?;
    let date = date.parse::<NaiveDate>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Workout {
        id: row.get(0)?,
        user_id: row.get(1)?,
        date,
        duration_minutes: row.get(3)?,
    })
}

fn row_to_exercise(row: &rusqlite::Row<'_>) -> rusqlite::Result<Exercise> {
    Ok(Exercise {
        id: row.get(0)?,
        workout_id: row.get(1)?,
        name: row.get(2)?,
        sets: row.get(3)?,
        reps: row.get(4)?,
        weight: row.get(5)?,
    })
}
