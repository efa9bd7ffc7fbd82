//! Fitness goals and progress tracking.

use rusqlite::params;

use crate::database::Database;
use crate::error::Result;
use crate::models::Goal;

impl Database {
    /// Create a goal for a user. Progress starts at zero.
    pub fn create_goal(&self, user_id: i64, description: &str, target_value: f64) -> Result<i64> {
        self.conn().execute(
            "INSERT INTO goals (user_id, goal_description, target_value)
             VALUES (?1, ?2, ?3)",
            params![user_id, description, target_value],
        )?;
        Ok(self.conn().last_insert_rowid())
    }

    /// All goals of a user, oldest first.
    pub fn get_goals_for_user(&self, user_id: i64) -> Result<Vec<Goal>> {
        let mut stmt = self.conn().prepare(
            "SELECT goal_id, user_id, goal_description, target_value, progress_value
             FROM goals
             WHERE user_id = ?1
             ORDER BY goal_id ASC",
        )?;

        let rows = stmt.query_map(params![user_id], row_to_goal)?;

        let mut goals = Vec::new();
        for row in rows {
            goals.push(row?);
        }
        Ok(goals)
    }

    /// Overwrite a goal's progress value. Returns `true` if the goal exists.
    ///
    /// Progress is an absolute value, not an increment, and may exceed the
    /// target; interpretation is left to the caller.
    pub fn update_goal_progress(&self, goal_id: i64, progress: f64) -> Result<bool> {
        let affected = self.conn().execute(
            "UPDATE goals SET progress_value = ?1 WHERE goal_id = ?2",
            params![progress, goal_id],
        )?;
        Ok(affected > 0)
    }

    /// Delete a goal. Returns `true` if it existed.
    pub fn delete_goal(&self, goal_id: i64) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM goals WHERE goal_id = ?1", params![goal_id])?;
        Ok(affected > 0)
    }
}

fn row_to_goal(row: &rusqlite::Row<'_>) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get(0)?,
        user_id: row.get(1)?,
        description: row.get(2)?,
        target_value: row.get(3)?,
        progress_value: row.get(4)?,
    })
}
