//! Command implementations for the hoops-league CLI

pub mod init;
pub mod listing;
pub mod report;
pub mod stats;


use crate::{error::LeagueError, storage::LeagueDatabase, Result, DB_PATH_ENV_VAR};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the database path from the `--db` option, the environment, or the
/// platform data directory, in that order
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    resolve_db_path_with(db, std::env::var(DB_PATH_ENV_VAR).ok())
}

pub(crate) fn resolve_db_path_with(
    db: Option<PathBuf>,
    env_value: Option<String>,
) -> Result<PathBuf> {
    db.or_else(|| {
        env_value
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
    })
    .or_else(LeagueDatabase::default_path)
    .ok_or_else(|| LeagueError::MissingDatabasePath {
        env_var: DB_PATH_ENV_VAR.to_string(),
    })
}

/// Open the league database at `path`, creating tables if needed
pub fn open_database(path: &Path) -> Result<LeagueDatabase> {
    debug!(path = %path.display(), "connecting to database");
    LeagueDatabase::open(path)
}

/// Open an existing league database for the read-only commands
pub fn open_read_only_database(path: &Path) -> Result<LeagueDatabase> {
    debug!(path = %path.display(), "connecting to database read-only");
    LeagueDatabase::open_read_only(path)
}

/// Pretty-print any serializable value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render an optional average, "-" when the player has no stat lines
pub(crate) fn format_average(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "-".to_string())
}
