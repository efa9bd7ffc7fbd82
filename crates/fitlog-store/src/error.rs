use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error (failed statement, constraint violation, unreachable
    /// database file).
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the database directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Another user already registered this email address.
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),

    /// A friendship edge between the two users already exists, in either
    /// direction.
    #[error("Users {0} and {1} are already friends")]
    AlreadyFriends(i64, i64),

    /// A user tried to befriend themselves.
    #[error("Cannot add yourself as a friend")]
    SelfFriendship,

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

/// True when the error is a `UNIQUE` constraint violation.
///
/// Used to turn the raw SQLite failure into the conflict variants above
/// (duplicate email, duplicate friendship edge).
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
