//! Basic database query operations

use super::{models::*, schema::LeagueDatabase};
use crate::error::{LeagueError, Result};
use crate::{GameId, PlayerId, TeamId};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

const TEAM_COLUMNS: &str = "team_id, name, coach";
const PLAYER_COLUMNS: &str =
    "player_id, team_id, first_name, last_name, position, jersey_number";
const GAME_COLUMNS: &str =
    "game_id, date, time, location, home_team_id, home_score, away_team_id, away_score";
const STATS_COLUMNS: &str = "player_id, game_id, points, assists, rebounds, blocks, steals";

impl LeagueDatabase {
    /// Insert or replace a team
    pub fn insert_team(&mut self, team: &Team) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO team (team_id, name, coach) VALUES (?, ?, ?)",
            params![team.team_id.as_u32(), team.name, team.coach],
        )?;
        Ok(())
    }

    /// Insert or replace a player
    pub fn insert_player(&mut self, player: &Player) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO player
             (player_id, team_id, first_name, last_name, position, jersey_number)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                player.player_id.as_u32(),
                player.team_id.map(|t| t.as_u32()),
                player.first_name,
                player.last_name,
                player.position,
                player.jersey_number
            ],
        )?;
        Ok(())
    }

    /// Insert a game. Fails if both sides are the same team.
    pub fn insert_game(&mut self, game: &Game) -> Result<()> {
        self.conn.execute(
            "INSERT INTO game
             (game_id, date, time, location, home_team_id, home_score, away_team_id, away_score)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                game.game_id.as_u32(),
                game.date,
                game.time,
                game.location,
                game.home_team_id.as_u32(),
                game.home_score,
                game.away_team_id.as_u32(),
                game.away_score
            ],
        )?;
        Ok(())
    }

    /// Retrieve all rows in the team table
    pub fn get_team_table(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {TEAM_COLUMNS} FROM team ORDER BY team_id"))?;
        let rows = stmt.query_map([], row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Look up a single team
    pub fn get_team(&self, team_id: TeamId) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row(
                &format!("SELECT {TEAM_COLUMNS} FROM team WHERE team_id = ?"),
                params![team_id.as_u32()],
                row_to_team,
            )
            .optional()?;
        Ok(team)
    }

    /// Retrieve all rows in the player table, optionally only one team's roster
    pub fn get_player_table(&self, team_id: Option<TeamId>) -> Result<Vec<Player>> {
        let mut query = format!("SELECT {PLAYER_COLUMNS} FROM player");
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(team) = team_id {
            query.push_str(" WHERE team_id = ?");
            params.push(Box::new(team.as_u32()));
        }
        query.push_str(" ORDER BY player_id");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            row_to_player,
        )?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Look up a single player
    pub fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                &format!("SELECT {PLAYER_COLUMNS} FROM player WHERE player_id = ?"),
                params![player_id.as_u32()],
                row_to_player,
            )
            .optional()?;
        Ok(player)
    }

    /// Retrieve all rows in the game table
    pub fn get_game_table(&self) -> Result<Vec<Game>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {GAME_COLUMNS} FROM game ORDER BY date, time, game_id"
        ))?;
        let rows = stmt.query_map([], row_to_game)?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// Look up a single game
    pub fn get_game(&self, game_id: GameId) -> Result<Option<Game>> {
        let game = self
            .conn
            .query_row(
                &format!("SELECT {GAME_COLUMNS} FROM game WHERE game_id = ?"),
                params![game_id.as_u32()],
                row_to_game,
            )
            .optional()?;
        Ok(game)
    }

    /// Retrieve all rows in the stats table
    pub fn get_stats_table(&self) -> Result<Vec<StatLine>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {STATS_COLUMNS} FROM stats ORDER BY game_id, player_id"
        ))?;
        let rows = stmt.query_map([], row_to_stat_line)?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        Ok(stats)
    }

    /// Get one player's stat line for a game, if recorded
    pub fn get_player_stats(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Option<StatLine>> {
        let stats = self
            .conn
            .query_row(
                &format!("SELECT {STATS_COLUMNS} FROM stats WHERE player_id = ? AND game_id = ?"),
                params![player_id.as_u32(), game_id.as_u32()],
                row_to_stat_line,
            )
            .optional()?;
        Ok(stats)
    }

    /// Add a player's stats for a game.
    /// Fails if a line already exists for the pair or either row is missing.
    pub fn add_player_stats(&mut self, stats: &StatLine) -> Result<()> {
        debug!(
            player_id = %stats.player_id,
            game_id = %stats.game_id,
            "adding stat line"
        );
        self.conn.execute(
            "INSERT INTO stats (player_id, game_id, points, assists, rebounds, blocks, steals)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                stats.player_id.as_u32(),
                stats.game_id.as_u32(),
                stats.points,
                stats.assists,
                stats.rebounds,
                stats.blocks,
                stats.steals
            ],
        )?;
        Ok(())
    }

    /// Overwrite an existing stat line
    pub fn edit_player_stats(&mut self, stats: &StatLine) -> Result<()> {
        let rows_affected = self.conn.execute(
            "UPDATE stats
             SET points = ?, assists = ?, rebounds = ?, blocks = ?, steals = ?
             WHERE player_id = ? AND game_id = ?",
            params![
                stats.points,
                stats.assists,
                stats.rebounds,
                stats.blocks,
                stats.steals,
                stats.player_id.as_u32(),
                stats.game_id.as_u32()
            ],
        )?;

        if rows_affected == 0 {
            return Err(LeagueError::StatsNotFound {
                player_id: stats.player_id.as_u32(),
                game_id: stats.game_id.as_u32(),
            });
        }
        Ok(())
    }

    /// Delete a stat line. Returns false if there was nothing to delete.
    pub fn delete_player_stats(&mut self, player_id: PlayerId, game_id: GameId) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM stats WHERE player_id = ? AND game_id = ?",
            params![player_id.as_u32(), game_id.as_u32()],
        )?;
        Ok(rows_affected > 0)
    }

    /// Clear all data from the database (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        // Children first due to foreign keys
        self.conn.execute_batch(
            "DELETE FROM stats;
             DELETE FROM game;
             DELETE FROM player;
             DELETE FROM team;",
        )?;
        Ok(())
    }
}

pub(crate) fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        team_id: TeamId::new(row.get(0)?),
        name: row.get(1)?,
        coach: row.get(2)?,
    })
}

pub(crate) fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        player_id: PlayerId::new(row.get(0)?),
        team_id: row.get::<_, Option<u32>>(1)?.map(TeamId::new),
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        position: row.get(4)?,
        jersey_number: row.get(5)?,
    })
}

pub(crate) fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
    Ok(Game {
        game_id: GameId::new(row.get(0)?),
        date: row.get(1)?,
        time: row.get(2)?,
        location: row.get(3)?,
        home_team_id: TeamId::new(row.get(4)?),
        home_score: row.get(5)?,
        away_team_id: TeamId::new(row.get(6)?),
        away_score: row.get(7)?,
    })
}

pub(crate) fn row_to_stat_line(row: &Row) -> rusqlite::Result<StatLine> {
    Ok(StatLine {
        player_id: PlayerId::new(row.get(0)?),
        game_id: GameId::new(row.get(1)?),
        points: row.get(2)?,
        assists: row.get(3)?,
        rebounds: row.get(4)?,
        blocks: row.get(5)?,
        steals: row.get(6)?,
    })
}
