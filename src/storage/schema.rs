//! Database schema and connection management

use crate::error::Result;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Connection handle for the league database.
///
/// Every report and CRUD operation borrows one of these; nothing holds a
/// process-wide connection. Open one handle per thread or task.
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
}

impl LeagueDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening league database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an existing database for reading only.
    ///
    /// Fails if `path` does not exist. Nothing is created on disk and the
    /// schema is left as found.
    pub fn open_read_only(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening league database read-only");
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;
        Ok(Self { conn })
    }

    /// Create an ephemeral in-memory database
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;

        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default on-disk location, under the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("hoops-league").join("league.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS team (
                team_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                coach TEXT
            );

            CREATE TABLE IF NOT EXISTS player (
                player_id INTEGER PRIMARY KEY,
                team_id INTEGER REFERENCES team(team_id),
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                position TEXT,
                jersey_number INTEGER
            );

            CREATE TABLE IF NOT EXISTS game (
                game_id INTEGER PRIMARY KEY,
                date TEXT NOT NULL,
                time TEXT,
                location TEXT,
                home_team_id INTEGER NOT NULL REFERENCES team(team_id),
                home_score INTEGER NOT NULL CHECK (home_score >= 0),
                away_team_id INTEGER NOT NULL REFERENCES team(team_id),
                away_score INTEGER NOT NULL CHECK (away_score >= 0),
                CHECK (home_team_id <> away_team_id)
            );

            CREATE TABLE IF NOT EXISTS stats (
                player_id INTEGER NOT NULL REFERENCES player(player_id),
                game_id INTEGER NOT NULL REFERENCES game(game_id),
                points INTEGER NOT NULL CHECK (points >= 0),
                assists INTEGER NOT NULL CHECK (assists >= 0),
                rebounds INTEGER NOT NULL CHECK (rebounds >= 0),
                blocks INTEGER NOT NULL CHECK (blocks >= 0),
                steals INTEGER NOT NULL CHECK (steals >= 0),
                PRIMARY KEY (player_id, game_id)
            );",
        )?;

        // Indexes for the per-team report lookups
        self.conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_player_team ON player(team_id);
             CREATE INDEX IF NOT EXISTS idx_game_home ON game(home_team_id);
             CREATE INDEX IF NOT EXISTS idx_game_away ON game(away_team_id);",
        )?;

        Ok(())
    }
}
