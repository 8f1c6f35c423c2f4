//! Basketball League Reporting Library
//!
//! Storage and reporting for a small basketball league: teams, players,
//! games and per-player box scores kept in SQLite, with read-only reports
//! computed on top of them.
//!
//! ## Features
//!
//! - **Team Records**: win/loss counts across home and away games (ties count as neither)
//! - **Game Logs**: each game from the team's own perspective, with opponent, score and W/L
//! - **Roster Averages**: per-game averages for every player, including those without stats
//! - **Stat Leaders**: the top player in each of PPG, APG, RPG, BPG and SPG
//! - **Stat Line CRUD**: add, edit and delete one player's stats for one game
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hoops_league::{storage::LeagueDatabase, TeamId};
//!
//! # fn example() -> hoops_league::Result<()> {
//! let mut db = LeagueDatabase::new_in_memory()?;
//! db.seed_sample_data()?;
//!
//! let record = db.get_team_record(TeamId::new(1))?;
//! println!("{} wins, {} losses", record.wins, record.losses);
//!
//! for leader in db.get_team_stats_leaders(TeamId::new(1))? {
//!     println!("{}: {} ({:.1})", leader.category, leader.player_name, leader.average);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file to avoid passing `--db` every time:
//! ```bash
//! export HOOPS_LEAGUE_DB=$HOME/league.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameId, PlayerId, StatCategory, TeamId};
pub use error::{LeagueError, Result};

pub const DB_PATH_ENV_VAR: &str = "HOOPS_LEAGUE_DB";
