//! CRUD operations for [`User`] records.
//!
//! `delete_user` is the one multi-statement operation here: a user owns their
//! workouts, exercises, goals and friend edges, and none of those may outlive
//! the user row, so the whole removal runs in a single transaction.

use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::error::{is_unique_violation, Result, StoreError};
use crate::models::User;

impl Database {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Insert a new user and return the assigned id.
    ///
    /// A duplicate email maps to [`StoreError::DuplicateEmail`] so the caller
    /// can report a conflict rather than a generic failure.
    pub fn create_user(&self, name: &str, email: &str, weight: f64) -> Result<i64> {
        self.conn()
            .execute(
                "INSERT INTO users (name, email, weight) VALUES (?1, ?2, ?3)",
                params![name, email, weight],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateEmail(email.to_string())
                } else {
                    StoreError::Sqlite(e)
                }
            })?;
        Ok(self.conn().last_insert_rowid())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Fetch a single user profile. Returns `Ok(None)` when the id is absent.
    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.conn()
            .query_row(
                "SELECT user_id, name, email, weight FROM users WHERE user_id = ?1",
                params![id],
                row_to_user,
            )
            .optional()
            .map_err(StoreError::Sqlite)
    }

    /// List all users, ordered by name.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT user_id, name, email, weight FROM users ORDER BY name ASC")?;

        let rows = stmt.query_map([], row_to_user)?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row?);
        }
        Ok(users)
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Update an existing user's profile. Returns `true` if a row changed.
    pub fn update_user(&self, id: i64, name: &str, email: &str, weight: f64) -> Result<bool> {
        let affected = self
            .conn()
            .execute(
                "UPDATE users SET name = ?1, email = ?2, weight = ?3 WHERE user_id = ?4",
                params![name, email, weight, id],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateEmail(email.to_string())
                } else {
                    StoreError::Sqlite(e)
                }
            })?;
        Ok(affected > 0)
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Delete a user and all data they own: exercises of their workouts, the
    /// workouts themselves, goals, and friend edges in both directions.
    ///
    /// Runs as one transaction; a failure at any step rolls the whole
    /// removal back, so no orphaned rows are ever observable. Returns `true`
    /// if the user existed.
    pub fn delete_user(&mut self, id: i64) -> Result<bool> {
        let tx = self.conn_mut().transaction()?;

        // Children first: the foreign keys have no ON DELETE CASCADE.
        tx.execute(
            "DELETE FROM exercises WHERE workout_id IN
                 (SELECT workout_id FROM workouts WHERE user_id = ?1)",
            params![id],
        )?;
        tx.execute("DELETE FROM workouts WHERE user_id = ?1", params![id])?;
        tx.execute("DELETE FROM goals WHERE user_id = ?1", params![id])?;
        tx.execute(
            "DELETE FROM friends WHERE user_id = ?1 OR friend_id = ?1",
            params![id],
        )?;
        let affected = tx.execute("DELETE FROM users WHERE user_id = ?1", params![id])?;

        tx.commit()?;

        if affected > 0 {
            tracing::info!(user_id = id, "deleted user and all owned data");
        }
        Ok(affected > 0)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a `rusqlite::Row` to a [`User`].
///
/// Shared with the friends module, whose list query returns user rows.
pub(crate) fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        weight: row.get(3)?,
    })
}
