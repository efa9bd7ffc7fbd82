//! v001 -- Initial schema creation.
//!
//! Creates the five core tables: `users`, `workouts`, `exercises`, `goals`,
//! and `friends`.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
///
/// Foreign keys carry no `ON DELETE CASCADE` on purpose: removing a user
/// deletes everything they own in one explicit transaction
/// (`Database::delete_user`), which keeps the ownership rule visible in code
/// rather than buried in the schema.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Users
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY,              -- rowid alias
    name    TEXT NOT NULL,
    email   TEXT NOT NULL UNIQUE,
    weight  REAL NOT NULL                     -- body weight, kilograms
);

-- ----------------------------------------------------------------
-- Workouts
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS workouts (
    workout_id       INTEGER PRIMARY KEY,
    user_id          INTEGER NOT NULL,        -- FK -> users(user_id)
    workout_date     TEXT NOT NULL,           -- ISO-8601 date (YYYY-MM-DD)
    duration_minutes INTEGER NOT NULL,

    FOREIGN KEY (user_id) REFERENCES users(user_id)
);

CREATE INDEX IF NOT EXISTS idx_workouts_user_date
    ON workouts(user_id, workout_date DESC);

-- ----------------------------------------------------------------
-- Exercises
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS exercises (
    exercise_id   INTEGER PRIMARY KEY,
    workout_id    INTEGER NOT NULL,           -- FK -> workouts(workout_id)
    exercise_name TEXT NOT NULL,
    sets          INTEGER NOT NULL,
    reps          INTEGER NOT NULL,
    weight        REAL NOT NULL,              -- kilograms

    FOREIGN KEY (workout_id) REFERENCES workouts(workout_id)
);

CREATE INDEX IF NOT EXISTS idx_exercises_workout ON exercises(workout_id);

-- ----------------------------------------------------------------
-- Goals
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS goals (
    goal_id          INTEGER PRIMARY KEY,
    user_id          INTEGER NOT NULL,        -- FK -> users(user_id)
    goal_description TEXT NOT NULL,
    target_value     REAL NOT NULL,
    progress_value   REAL NOT NULL DEFAULT 0,

    FOREIGN KEY (user_id) REFERENCES users(user_id)
);

CREATE INDEX IF NOT EXISTS idx_goals_user ON goals(user_id);

-- ----------------------------------------------------------------
-- Friends
-- ----------------------------------------------------------------
-- One directed row per friendship; every read query treats the relation
-- as undirected.
CREATE TABLE IF NOT EXISTS friends (
    user_id   INTEGER NOT NULL,               -- FK -> users(user_id)
    friend_id INTEGER NOT NULL,               -- FK -> users(user_id)

    FOREIGN KEY (user_id)   REFERENCES users(user_id),
    FOREIGN KEY (friend_id) REFERENCES users(user_id),
    CHECK (user_id <> friend_id)
);

-- At most one edge per unordered pair, whichever direction it was
-- inserted in. Closes the check-then-insert race between two sessions
-- adding the same friendship concurrently.
CREATE UNIQUE INDEX IF NOT EXISTS idx_friends_pair
    ON friends(MIN(user_id, friend_id), MAX(user_id, friend_id));
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
