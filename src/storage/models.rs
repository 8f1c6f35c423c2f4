//! Data models for the storage layer

use crate::cli::types::{GameId, PlayerId, StatCategory, TeamId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A team in the league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub coach: Option<String>,
}

/// A rostered player. `team_id` may be empty for free agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub team_id: Option<TeamId>,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub jersey_number: Option<u32>,
}

impl Player {
    /// Display name, "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A played game between two different teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: GameId,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub home_team_id: TeamId,
    pub home_score: u32,
    pub away_team_id: TeamId,
    pub away_score: u32,
}

/// One player's box score for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub points: u32,
    pub assists: u32,
    pub rebounds: u32,
    pub blocks: u32,
    pub steals: u32,
}

/// Win/loss record for a team. Tied games count toward neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Outcome of a game from one team's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    W,
    L,
}

impl GameResult {
    /// A win requires strictly outscoring the opponent; ties are reported as `L`.
    pub fn from_scores(own_score: u32, opponent_score: u32) -> Self {
        if own_score > opponent_score {
            GameResult::W
        } else {
            GameResult::L
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::W => write!(f, "W"),
            GameResult::L => write!(f, "L"),
        }
    }
}

/// One line of a team's game log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastGame {
    pub game_id: GameId,
    pub date: NaiveDate,
    pub opponent: String,
    pub score: String, // "<own score> - <opponent score>"
    pub result: GameResult,
    pub home: bool,
}

/// Per-game averages for a rostered player; `None` when no stats are recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterAverages {
    pub player_id: PlayerId,
    pub player_name: String,
    pub ppg: Option<f64>,
    pub apg: Option<f64>,
    pub rpg: Option<f64>,
    pub bpg: Option<f64>,
    pub spg: Option<f64>,
}

/// The team's top player in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatLeader {
    pub category: StatCategory,
    pub player_id: PlayerId,
    pub player_name: String,
    pub average: f64,
}

/// A team's position in the league table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team_id: TeamId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

/// Everything reported for a single team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub team_id: TeamId,
    pub record: TeamRecord,
    pub past_games: Vec<PastGame>,
    pub roster: Vec<RosterAverages>,
    pub leaders: Vec<StatLeader>,
}
