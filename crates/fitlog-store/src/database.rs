//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and guarantees that
//! migrations are run before any other operation.
//!
//! There is deliberately no pooling, caching, or retry here: the handle is a
//! single synchronous connection, and callers that need a transaction reach
//! for [`Database::conn_mut`].

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::Connection;

use crate::error::{Result, StoreError};
use crate::migrations;

/// Wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/fitlog/fitlog.db`
    /// - macOS:   `~/Library/Application Support/com.fitlog.fitlog/fitlog.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\fitlog\fitlog\data\fitlog.db`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "fitlog", "fitlog").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("fitlog.db");

        tracing::info!(path = %db_path.display(), "opening database");

        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// This is useful for tests and for pointing the CLI at a custom database
    /// file.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Recommended SQLite settings. `foreign_keys` must be ON: the schema
        // relies on referential integrity between users, workouts, exercises,
        // goals and friend edges.
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        // Run schema migrations.
        migrations::run_migrations(&conn)?;

        Ok(Self { conn })
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    ///
    /// Callers should prefer the typed CRUD helpers, but direct access is
    /// occasionally needed for ad-hoc queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return a mutable reference to the underlying connection, as required
    /// to begin a [`rusqlite::Transaction`].
    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::Database;

    /// Open a throwaway database in a fresh temporary directory.
    ///
    /// The `TempDir` must be kept alive for the duration of the test or the
    /// database file disappears from under the connection.
    pub(crate) fn open_test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).expect("should open");
        (dir, db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        let db = Database::open_at(&path).expect("should open");
        assert!(db.path().is_some());
    }

    #[test]
    fn reopen_existing_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        let first = Database::open_at(&path).unwrap();
        let id = first.create_user("Mara", "mara@example.com", 61.5).unwrap();
        drop(first);

        let second = Database::open_at(&path).unwrap();
        let user = second.get_user(id).unwrap().expect("user should persist");
        assert_eq!(user.email, "mara@example.com");
    }
}
