//! Team reports: win/loss record, game log, roster averages and stat leaders.
//!
//! Everything here is read-only. Each report is answered from a single
//! statement (or a single read transaction for the leaders), so it sees one
//! consistent snapshot of the tables even while stat lines are being edited.

use super::{models::*, schema::LeagueDatabase};
use crate::cli::types::{GameId, PlayerId, StatCategory, TeamId};
use crate::error::Result;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

impl LeagueDatabase {
    /// Count a team's wins and losses across home and away games.
    ///
    /// Ties count toward neither side. Unknown teams and teams without games
    /// both come back as 0-0.
    pub fn get_team_record(&self, team_id: TeamId) -> Result<TeamRecord> {
        let (wins, losses) = self.conn.query_row(
            "SELECT
                COALESCE(SUM(CASE
                    WHEN home_team_id = ?1 AND home_score > away_score THEN 1
                    WHEN away_team_id = ?1 AND away_score > home_score THEN 1
                    ELSE 0 END), 0) AS wins,
                COALESCE(SUM(CASE
                    WHEN home_team_id = ?1 AND home_score < away_score THEN 1
                    WHEN away_team_id = ?1 AND away_score < home_score THEN 1
                    ELSE 0 END), 0) AS losses
             FROM game
             WHERE home_team_id = ?1 OR away_team_id = ?1",
            params![team_id.as_u32()],
            |row| Ok((row.get::<_, u32>(0)?, row.get::<_, u32>(1)?)),
        )?;

        debug!(%team_id, wins, losses, "computed team record");
        Ok(TeamRecord { wins, losses })
    }

    /// Game log for a team, oldest first (date, tip-off time, then game id).
    ///
    /// Scores are printed from the team's own perspective.
    pub fn get_team_past_games(&self, team_id: TeamId) -> Result<Vec<PastGame>> {
        let mut stmt = self.conn.prepare(
            "SELECT g.game_id AS game_id, g.date AS date, g.time AS time,
                    opp.name AS opponent,
                    g.home_score AS own_score, g.away_score AS opponent_score,
                    1 AS home
             FROM game g
             JOIN team opp ON opp.team_id = g.away_team_id
             WHERE g.home_team_id = ?1
             UNION ALL
             SELECT g.game_id, g.date, g.time,
                    opp.name,
                    g.away_score, g.home_score,
                    0
             FROM game g
             JOIN team opp ON opp.team_id = g.home_team_id
             WHERE g.away_team_id = ?1
             ORDER BY date, time, game_id",
        )?;

        let rows = stmt.query_map(params![team_id.as_u32()], |row| {
            let own_score: u32 = row.get(4)?;
            let opponent_score: u32 = row.get(5)?;

            Ok(PastGame {
                game_id: GameId::new(row.get(0)?),
                date: row.get(1)?,
                opponent: row.get(3)?,
                score: format!("{} - {}", own_score, opponent_score),
                result: GameResult::from_scores(own_score, opponent_score),
                home: row.get(6)?,
            })
        })?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// Per-game averages for every player on the team, rounded to one decimal.
    ///
    /// Players without any stat lines are still listed, with every average
    /// set to `None`.
    pub fn get_team_roster_stats(&self, team_id: TeamId) -> Result<Vec<RosterAverages>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.player_id,
                    p.first_name || ' ' || p.last_name AS player_name,
                    ROUND(AVG(s.points), 1) AS ppg,
                    ROUND(AVG(s.assists), 1) AS apg,
                    ROUND(AVG(s.rebounds), 1) AS rpg,
                    ROUND(AVG(s.blocks), 1) AS bpg,
                    ROUND(AVG(s.steals), 1) AS spg
             FROM player p
             LEFT JOIN stats s ON s.player_id = p.player_id
             WHERE p.team_id = ?
             GROUP BY p.player_id, p.first_name, p.last_name
             ORDER BY p.player_id",
        )?;

        let rows = stmt.query_map(params![team_id.as_u32()], |row| {
            Ok(RosterAverages {
                player_id: PlayerId::new(row.get(0)?),
                player_name: row.get(1)?,
                ppg: row.get(2)?,
                apg: row.get(3)?,
                rpg: row.get(4)?,
                bpg: row.get(5)?,
                spg: row.get(6)?,
            })
        })?;

        let mut roster = Vec::new();
        for row in rows {
            roster.push(row?);
        }
        Ok(roster)
    }

    /// Top player on the team for each category, in PPG, APG, RPG, BPG, SPG order.
    ///
    /// Only players with at least one stat line qualify. Ranking uses the exact
    /// average; the reported average is rounded the same way as the roster
    /// report. Equal averages go to the lowest player id. Categories with no
    /// qualifying player are left out, so a team without stats gets an empty list.
    pub fn get_team_stats_leaders(&self, team_id: TeamId) -> Result<Vec<StatLeader>> {
        // Deferred transaction keeps the five lookups on one snapshot
        let tx = self.conn.unchecked_transaction()?;
        let mut leaders = Vec::with_capacity(StatCategory::ALL.len());

        for category in StatCategory::ALL {
            let column = category.column();
            let leader = tx
                .query_row(
                    &format!(
                        "SELECT p.player_id,
                                p.first_name || ' ' || p.last_name AS player_name,
                                ROUND(AVG(s.{column}), 1) AS average,
                                AVG(s.{column}) AS exact_average
                         FROM player p
                         JOIN stats s ON s.player_id = p.player_id
                         WHERE p.team_id = ?
                         GROUP BY p.player_id, p.first_name, p.last_name
                         ORDER BY exact_average DESC, p.player_id ASC
                         LIMIT 1"
                    ),
                    params![team_id.as_u32()],
                    |row| {
                        Ok(StatLeader {
                            category,
                            player_id: PlayerId::new(row.get(0)?),
                            player_name: row.get(1)?,
                            average: row.get(2)?,
                        })
                    },
                )
                .optional()?;

            if let Some(leader) = leader {
                leaders.push(leader);
            }
        }

        tx.commit()?;
        Ok(leaders)
    }
}
