//! Listing commands for teams, players and games

use super::{open_read_only_database, print_json};
use crate::{
    storage::{Game, Player, Team},
    Result, TeamId,
};
use std::collections::HashMap;
use std::path::Path;

pub fn handle_list_teams(db_path: &Path, as_json: bool) -> Result<()> {
    let teams = open_read_only_database(db_path)?.get_team_table()?;

    if as_json {
        print_json(&teams)?;
    } else {
        for team in &teams {
            match &team.coach {
                Some(coach) => println!("{:>3}  {} (coach: {})", team.team_id.as_u32(), team.name, coach),
                None => println!("{:>3}  {}", team.team_id.as_u32(), team.name),
            }
        }
    }
    Ok(())
}

pub fn handle_list_players(db_path: &Path, team_id: Option<TeamId>, as_json: bool) -> Result<()> {
    let players = open_read_only_database(db_path)?.get_player_table(team_id)?;

    if as_json {
        print_json(&players)?;
    } else {
        print!("{}", format_players(&players));
    }
    Ok(())
}

pub fn handle_list_games(db_path: &Path, as_json: bool) -> Result<()> {
    let db = open_read_only_database(db_path)?;
    let games = db.get_game_table()?;

    if as_json {
        print_json(&games)?;
    } else {
        let teams = db.get_team_table()?;
        print!("{}", format_games(&games, &teams));
    }
    Ok(())
}

pub fn format_players(players: &[Player]) -> String {
    let mut out = String::new();
    for player in players {
        let jersey = player
            .jersey_number
            .map(|n| format!("#{}", n))
            .unwrap_or_default();
        let team = player
            .team_id
            .map(|t| t.to_string())
            .unwrap_or_else(|| "FA".to_string());
        out.push_str(&format!(
            "{:>4}  {:<24} {:<3} {:>4}  team {}\n",
            player.player_id.to_string(),
            player.full_name(),
            player.position.as_deref().unwrap_or("-"),
            jersey,
            team
        ));
    }
    out
}

pub fn format_games(games: &[Game], teams: &[Team]) -> String {
    let names: HashMap<TeamId, &str> = teams
        .iter()
        .map(|team| (team.team_id, team.name.as_str()))
        .collect();
    let name_of = |team_id: TeamId| {
        names
            .get(&team_id)
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("Team {}", team_id))
    };

    let mut out = String::new();
    for game in games {
        out.push_str(&format!(
            "{:>4}  {}  {} {} - {} {}\n",
            game.game_id.to_string(),
            game.date,
            name_of(game.home_team_id),
            game.home_score,
            game.away_score,
            name_of(game.away_team_id)
        ));
    }
    out
}
