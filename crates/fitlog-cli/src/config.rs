//! CLI configuration loaded from environment variables.
//!
//! Everything has a sensible default so the tool works with zero
//! configuration; command-line flags take precedence over the environment.

use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Path of the SQLite database file.
    /// Env: `FITLOG_DB`
    /// Default: the platform data directory (see `Database::new`).
    pub db_path: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults. An empty `FITLOG_DB` counts as unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("FITLOG_DB") {
            if !path.is_empty() {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}
