//! Error types for the basketball league store and reports

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid stat category: {category}")]
    InvalidCategory { category: String },

    #[error("No stats recorded for player {player_id} in game {game_id}")]
    StatsNotFound { player_id: u32, game_id: u32 },

    #[error("Database path not provided and {env_var} environment variable not set")]
    MissingDatabasePath { env_var: String },

    #[error("Background report task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
