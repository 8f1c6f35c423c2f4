//! Team report command implementations
//!
//! The single-report handlers share one connection. The combined team report
//! and the league standings fan out instead, giving each query its own
//! connection so they can run side by side.

use super::{format_average, open_read_only_database, print_json};
use crate::{
    storage::{
        LeagueDatabase, PastGame, RosterAverages, Standing, StatLeader, TeamRecord, TeamReport,
    },
    Result, TeamId,
};
use rayon::prelude::*;
use std::path::Path;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Handle `report record`
pub fn handle_record(db_path: &Path, team_id: TeamId, as_json: bool) -> Result<()> {
    let db = open_read_only_database(db_path)?;
    let record = db.get_team_record(team_id)?;

    if as_json {
        print_json(&record)?;
    } else {
        let label = team_label(&db, team_id)?;
        println!("{}", format_record(&label, &record));
    }
    Ok(())
}

/// Handle `report past-games`
pub fn handle_past_games(db_path: &Path, team_id: TeamId, as_json: bool) -> Result<()> {
    let db = open_read_only_database(db_path)?;
    let games = db.get_team_past_games(team_id)?;
    debug!(%team_id, games = games.len(), "loaded game log");

    if as_json {
        print_json(&games)?;
    } else {
        print!("{}", format_past_games(&games));
    }
    Ok(())
}

/// Handle `report roster`
pub fn handle_roster(db_path: &Path, team_id: TeamId, as_json: bool) -> Result<()> {
    let db = open_read_only_database(db_path)?;
    let roster = db.get_team_roster_stats(team_id)?;

    if as_json {
        print_json(&roster)?;
    } else {
        print!("{}", format_roster(&roster));
    }
    Ok(())
}

/// Handle `report leaders`
pub fn handle_leaders(db_path: &Path, team_id: TeamId, as_json: bool) -> Result<()> {
    let db = open_read_only_database(db_path)?;
    let leaders = db.get_team_stats_leaders(team_id)?;

    if as_json {
        print_json(&leaders)?;
    } else {
        print!("{}", format_leaders(&leaders));
    }
    Ok(())
}

/// Handle `report team`
pub async fn handle_team_report(db_path: &Path, team_id: TeamId, as_json: bool) -> Result<()> {
    let report = build_team_report(db_path, team_id).await?;

    if as_json {
        print_json(&report)?;
        return Ok(());
    }

    let label = team_label(&open_read_only_database(db_path)?, team_id)?;
    println!("{}", format_record(&label, &report.record));
    println!();
    println!("Past games");
    print!("{}", format_past_games(&report.past_games));
    println!();
    println!("Roster");
    print!("{}", format_roster(&report.roster));
    println!();
    println!("Leaders");
    print!("{}", format_leaders(&report.leaders));
    Ok(())
}

/// Handle `report standings`
pub fn handle_standings(db_path: &Path, as_json: bool) -> Result<()> {
    let standings = get_standings(db_path)?;

    if as_json {
        print_json(&standings)?;
    } else {
        print!("{}", format_standings(&standings));
    }
    Ok(())
}

/// Run all four team reports concurrently, one connection each.
///
/// Any failure fails the whole report.
pub async fn build_team_report(db_path: &Path, team_id: TeamId) -> Result<TeamReport> {
    info!(%team_id, "building team report");

    let record = spawn_report(db_path, move |db| db.get_team_record(team_id));
    let past_games = spawn_report(db_path, move |db| db.get_team_past_games(team_id));
    let roster = spawn_report(db_path, move |db| db.get_team_roster_stats(team_id));
    let leaders = spawn_report(db_path, move |db| db.get_team_stats_leaders(team_id));

    let (record, past_games, roster, leaders) =
        tokio::try_join!(record, past_games, roster, leaders)?;

    Ok(TeamReport {
        team_id,
        record: record?,
        past_games: past_games?,
        roster: roster?,
        leaders: leaders?,
    })
}

fn spawn_report<T, F>(db_path: &Path, report: F) -> JoinHandle<Result<T>>
where
    T: Send + 'static,
    F: FnOnce(&LeagueDatabase) -> Result<T> + Send + 'static,
{
    let path = db_path.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let db = LeagueDatabase::open_read_only(&path)?;
        report(&db)
    })
}

/// Every team's record, computed in parallel and sorted best first
/// (most wins, then fewest losses, then team id)
pub fn get_standings(db_path: &Path) -> Result<Vec<Standing>> {
    let teams = open_read_only_database(db_path)?.get_team_table()?;
    info!(teams = teams.len(), "computing standings");

    let mut standings = teams
        .into_par_iter()
        .map(|team| -> Result<Standing> {
            let db = LeagueDatabase::open_read_only(db_path)?;
            let record = db.get_team_record(team.team_id)?;
            Ok(Standing {
                team_id: team.team_id,
                name: team.name,
                wins: record.wins,
                losses: record.losses,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(a.losses.cmp(&b.losses))
            .then(a.team_id.cmp(&b.team_id))
    });
    Ok(standings)
}

/// Team name if it exists, otherwise "Team <id>"
fn team_label(db: &LeagueDatabase, team_id: TeamId) -> Result<String> {
    Ok(db
        .get_team(team_id)?
        .map(|team| team.name)
        .unwrap_or_else(|| format!("Team {}", team_id)))
}

pub fn format_record(label: &str, record: &TeamRecord) -> String {
    format!("{}: {} W, {} L", label, record.wins, record.losses)
}

pub fn format_past_games(games: &[PastGame]) -> String {
    if games.is_empty() {
        return "No games played.\n".to_string();
    }

    let mut out = String::new();
    for game in games {
        let venue = if game.home { "vs" } else { "@" };
        out.push_str(&format!(
            "{}  {:>2} {:<28} {:>9}  {}\n",
            game.date, venue, game.opponent, game.score, game.result
        ));
    }
    out
}

pub fn format_roster(roster: &[RosterAverages]) -> String {
    if roster.is_empty() {
        return "No players on roster.\n".to_string();
    }

    let mut out = format!(
        "{:<24} {:>5} {:>5} {:>5} {:>5} {:>5}\n",
        "Player", "PPG", "APG", "RPG", "BPG", "SPG"
    );
    for player in roster {
        out.push_str(&format!(
            "{:<24} {:>5} {:>5} {:>5} {:>5} {:>5}\n",
            player.player_name,
            format_average(player.ppg),
            format_average(player.apg),
            format_average(player.rpg),
            format_average(player.bpg),
            format_average(player.spg)
        ));
    }
    out
}

pub fn format_leaders(leaders: &[StatLeader]) -> String {
    if leaders.is_empty() {
        return "No stats recorded.\n".to_string();
    }

    let mut out = String::new();
    for leader in leaders {
        out.push_str(&format!(
            "{:<4} {:<24} {:>5.1}\n",
            leader.category.to_string(),
            leader.player_name,
            leader.average
        ));
    }
    out
}

pub fn format_standings(standings: &[Standing]) -> String {
    let mut out = format!("{:<4} {:<28} {:>3} {:>3}\n", "#", "Team", "W", "L");
    for (rank, standing) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<28} {:>3} {:>3}\n",
            rank + 1,
            standing.name,
            standing.wins,
            standing.losses
        ));
    }
    out
}
