//! Statistical categories tracked per game.

use crate::error::LeagueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-game average categories reported by the leaders calculator.
///
/// # Examples
///
/// ```rust
/// use hoops_league::StatCategory;
///
/// assert_eq!(StatCategory::Ppg.to_string(), "PPG");
/// assert_eq!(StatCategory::Ppg.column(), "points");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatCategory {
    Ppg,
    Apg,
    Rpg,
    Bpg,
    Spg,
}

impl StatCategory {
    /// Every category, in the order leaders are reported.
    pub const ALL: [StatCategory; 5] = [
        StatCategory::Ppg,
        StatCategory::Apg,
        StatCategory::Rpg,
        StatCategory::Bpg,
        StatCategory::Spg,
    ];

    /// Column of the `stats` table averaged for this category.
    pub fn column(&self) -> &'static str {
        match self {
            StatCategory::Ppg => "points",
            StatCategory::Apg => "assists",
            StatCategory::Rpg => "rebounds",
            StatCategory::Bpg => "blocks",
            StatCategory::Spg => "steals",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatCategory::Ppg => "PPG",
            StatCategory::Apg => "APG",
            StatCategory::Rpg => "RPG",
            StatCategory::Bpg => "BPG",
            StatCategory::Spg => "SPG",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StatCategory {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PPG" | "POINTS" => Ok(StatCategory::Ppg),
            "APG" | "ASSISTS" => Ok(StatCategory::Apg),
            "RPG" | "REBOUNDS" => Ok(StatCategory::Rpg),
            "BPG" | "BLOCKS" => Ok(StatCategory::Bpg),
            "SPG" | "STEALS" => Ok(StatCategory::Spg),
            _ => Err(LeagueError::InvalidCategory {
                category: s.to_string(),
            }),
        }
    }
}
