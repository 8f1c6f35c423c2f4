//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{GameId, PlayerId, TeamId};

/// Arguments shared by the per-team reports
#[derive(Debug, Args)]
pub struct TeamArgs {
    /// Team to report on.
    #[clap(long, short)]
    pub team_id: TeamId,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

/// Identifies one stat line: a player in a game
#[derive(Debug, Args)]
pub struct StatKey {
    #[clap(long, short)]
    pub player_id: PlayerId,

    #[clap(long, short)]
    pub game_id: GameId,
}

/// Box score values for a stat line. Every value is required, so an edit
/// always replaces the whole line.
#[derive(Debug, Args)]
pub struct StatValues {
    #[clap(long)]
    pub points: u32,

    #[clap(long)]
    pub assists: u32,

    #[clap(long)]
    pub rebounds: u32,

    #[clap(long)]
    pub blocks: u32,

    #[clap(long)]
    pub steals: u32,
}

#[derive(Debug, Subcommand)]
pub enum ReportCmd {
    /// Win/loss record for a team. Tied games are not counted.
    Record {
        #[clap(flatten)]
        team: TeamArgs,
    },

    /// Every game a team has played, oldest first, with score and W/L.
    PastGames {
        #[clap(flatten)]
        team: TeamArgs,
    },

    /// Per-game averages for every player on a team.
    Roster {
        #[clap(flatten)]
        team: TeamArgs,
    },

    /// The team's top player in each statistical category.
    Leaders {
        #[clap(flatten)]
        team: TeamArgs,
    },

    /// Record, game log, roster averages and leaders together.
    Team {
        #[clap(flatten)]
        team: TeamArgs,
    },

    /// Win/loss records for every team, best first.
    Standings {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum StatsCmd {
    /// Show every recorded stat line.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Record a player's stats for a game.
    Add {
        #[clap(flatten)]
        key: StatKey,

        #[clap(flatten)]
        values: StatValues,
    },

    /// Replace a player's stats for a game.
    Edit {
        #[clap(flatten)]
        key: StatKey,

        #[clap(flatten)]
        values: StatValues,
    },

    /// Remove a player's stats for a game.
    Delete {
        #[clap(flatten)]
        key: StatKey,
    },
}

#[derive(Debug, Subcommand)]
pub enum ListCmd {
    /// All teams.
    Teams {
        #[clap(long)]
        json: bool,
    },

    /// All players, or one team's roster.
    Players {
        /// Only list this team's players.
        #[clap(long, short)]
        team_id: Option<TeamId>,

        #[clap(long)]
        json: bool,
    },

    /// All games, oldest first.
    Games {
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "hoops-league", about = "Basketball league stats and reports")]
pub struct HoopsLeague {
    /// SQLite database file (or set `HOOPS_LEAGUE_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database tables
    Init {
        /// Also load a small sample league.
        #[clap(long)]
        sample: bool,

        /// Delete all existing data first.
        #[clap(long)]
        clear: bool,
    },

    /// Team reports
    Report {
        #[clap(subcommand)]
        cmd: ReportCmd,
    },

    /// Add, edit, delete and list stat lines
    Stats {
        #[clap(subcommand)]
        cmd: StatsCmd,
    },

    /// List teams, players and games
    List {
        #[clap(subcommand)]
        cmd: ListCmd,
    },
}
