//! Sample league used by `hoops-league init --sample`

use super::schema::LeagueDatabase;
use crate::error::Result;
use rusqlite::params;
use tracing::info;

/// (team_id, name, coach)
const SAMPLE_TEAMS: &[(u32, &str, &str)] = &[
    (1, "Harbor City Herons", "Dana Whitfield"),
    (2, "Mesa Ridge Coyotes", "Luis Ortega"),
    (3, "Northgate Foxes", "Priya Raman"),
    (4, "Lakeside Otters", "Sam Becker"),
];

/// (player_id, team_id, first_name, last_name, position, jersey_number)
const SAMPLE_PLAYERS: &[(u32, u32, &str, &str, &str, u32)] = &[
    (1, 1, "Marcus", "Bell", "PG", 3),
    (2, 1, "Andre", "Holloway", "SF", 11),
    (3, 1, "Theo", "Lindqvist", "C", 34),
    (4, 2, "Jalen", "Reyes", "SG", 5),
    (5, 2, "Owen", "Park", "PF", 21),
    (6, 2, "Isaiah", "Grant", "C", 50),
    (7, 3, "Cole", "Ferreira", "PG", 1),
    (8, 3, "Nate", "Osei", "SF", 23),
    (9, 3, "Rafael", "Duarte", "PF", 32),
    (10, 4, "Eli", "Sutton", "SG", 7),
    (11, 4, "Kofi", "Mensah", "PF", 15),
    (12, 4, "Bram", "de Vries", "C", 44),
];

/// (game_id, date, time, location, home_team_id, home_score, away_team_id, away_score)
const SAMPLE_GAMES: &[(u32, &str, &str, &str, u32, u32, u32, u32)] = &[
    (1, "2024-11-02", "19:00:00", "Harbor City Arena", 1, 98, 2, 91),
    (2, "2024-11-02", "19:30:00", "Northgate Fieldhouse", 3, 84, 4, 88),
    (3, "2024-11-09", "18:00:00", "Mesa Ridge Center", 2, 102, 3, 95),
    (4, "2024-11-09", "19:00:00", "Lakeside Pavilion", 4, 90, 1, 97),
    (5, "2024-11-16", "19:00:00", "Harbor City Arena", 1, 86, 3, 92),
    (6, "2024-11-16", "20:00:00", "Lakeside Pavilion", 4, 100, 2, 100),
];

/// (player_id, game_id, points, assists, rebounds, blocks, steals)
const SAMPLE_STATS: &[(u32, u32, u32, u32, u32, u32, u32)] = &[
    (1, 1, 24, 9, 4, 0, 3),
    (2, 1, 18, 3, 7, 1, 1),
    (3, 1, 14, 1, 12, 4, 0),
    (4, 1, 27, 4, 5, 0, 2),
    (5, 1, 12, 2, 9, 1, 1),
    (6, 1, 10, 0, 11, 3, 0),
    (7, 2, 19, 11, 3, 0, 4),
    (8, 2, 22, 2, 6, 1, 1),
    (9, 2, 15, 1, 10, 2, 0),
    (10, 2, 25, 5, 4, 0, 2),
    (11, 2, 16, 2, 8, 1, 1),
    (12, 2, 12, 1, 13, 5, 0),
    (4, 3, 31, 6, 4, 1, 2),
    (5, 3, 17, 3, 10, 0, 1),
    (7, 3, 21, 8, 2, 0, 3),
    (9, 3, 18, 2, 11, 3, 1),
    (10, 4, 20, 3, 3, 0, 1),
    (12, 4, 14, 0, 15, 4, 0),
    (1, 4, 28, 10, 5, 0, 2),
    (3, 4, 16, 2, 14, 3, 1),
    (1, 5, 19, 7, 3, 0, 1),
    (2, 5, 21, 4, 8, 0, 2),
    (7, 5, 23, 9, 4, 1, 2),
    (8, 5, 18, 3, 7, 0, 1),
    (10, 6, 29, 4, 5, 0, 3),
    (11, 6, 18, 3, 9, 2, 0),
    (4, 6, 26, 5, 6, 0, 1),
    (6, 6, 14, 1, 12, 4, 1),
];

impl LeagueDatabase {
    /// Populate the database with a small sample league, all or nothing
    pub fn seed_sample_data(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;

        {
            let mut stmt =
                tx.prepare("INSERT OR REPLACE INTO team (team_id, name, coach) VALUES (?, ?, ?)")?;
            for (team_id, name, coach) in SAMPLE_TEAMS {
                stmt.execute(params![team_id, name, coach])?;
            }

            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO player
                 (player_id, team_id, first_name, last_name, position, jersey_number)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for (player_id, team_id, first, last, position, jersey) in SAMPLE_PLAYERS {
                stmt.execute(params![player_id, team_id, first, last, position, jersey])?;
            }

            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO game
                 (game_id, date, time, location, home_team_id, home_score, away_team_id, away_score)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for (game_id, date, time, location, home_id, home_score, away_id, away_score) in
                SAMPLE_GAMES
            {
                stmt.execute(params![
                    game_id, date, time, location, home_id, home_score, away_id, away_score
                ])?;
            }

            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO stats
                 (player_id, game_id, points, assists, rebounds, blocks, steals)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )?;
            for (player_id, game_id, points, assists, rebounds, blocks, steals) in SAMPLE_STATS {
                stmt.execute(params![
                    player_id, game_id, points, assists, rebounds, blocks, steals
                ])?;
            }
        }

        tx.commit()?;
        info!(
            teams = SAMPLE_TEAMS.len(),
            players = SAMPLE_PLAYERS.len(),
            games = SAMPLE_GAMES.len(),
            stat_lines = SAMPLE_STATS.len(),
            "seeded sample league"
        );
        Ok(())
    }
}
