//! Stat line CRUD commands

use super::{open_database, open_read_only_database, print_json};
use crate::{
    cli::{StatKey, StatValues},
    storage::StatLine,
    Result,
};
use std::path::Path;
use tracing::info;

/// Combine a key and box score values into a stat line
pub fn build_stat_line(key: &StatKey, values: &StatValues) -> StatLine {
    StatLine {
        player_id: key.player_id,
        game_id: key.game_id,
        points: values.points,
        assists: values.assists,
        rebounds: values.rebounds,
        blocks: values.blocks,
        steals: values.steals,
    }
}

/// Handle `stats list`
pub fn handle_list_stats(db_path: &Path, as_json: bool) -> Result<()> {
    let db = open_read_only_database(db_path)?;
    let stats = db.get_stats_table()?;

    if as_json {
        print_json(&stats)?;
    } else {
        print!("{}", format_stat_lines(&stats));
    }
    Ok(())
}

/// Handle `stats add`
pub fn handle_add_stats(db_path: &Path, line: StatLine) -> Result<()> {
    let mut db = open_database(db_path)?;
    db.add_player_stats(&line)?;

    info!(player_id = %line.player_id, game_id = %line.game_id, "stat line added");
    println!(
        "✓ Added stats for player {} in game {}",
        line.player_id, line.game_id
    );
    Ok(())
}

/// Handle `stats edit`
pub fn handle_edit_stats(db_path: &Path, line: StatLine) -> Result<()> {
    let mut db = open_database(db_path)?;
    db.edit_player_stats(&line)?;

    info!(player_id = %line.player_id, game_id = %line.game_id, "stat line updated");
    println!(
        "✓ Updated stats for player {} in game {}",
        line.player_id, line.game_id
    );
    Ok(())
}

/// Handle `stats delete`
pub fn handle_delete_stats(db_path: &Path, key: &StatKey) -> Result<()> {
    let mut db = open_database(db_path)?;

    if db.delete_player_stats(key.player_id, key.game_id)? {
        info!(player_id = %key.player_id, game_id = %key.game_id, "stat line deleted");
        println!(
            "✓ Deleted stats for player {} in game {}",
            key.player_id, key.game_id
        );
    } else {
        println!(
            "No stats recorded for player {} in game {}",
            key.player_id, key.game_id
        );
    }
    Ok(())
}

pub fn format_stat_lines(stats: &[StatLine]) -> String {
    if stats.is_empty() {
        return "No stats recorded.\n".to_string();
    }

    let mut out = format!(
        "{:>6} {:>6} {:>4} {:>4} {:>4} {:>4} {:>4}\n",
        "Player", "Game", "PTS", "AST", "REB", "BLK", "STL"
    );
    for line in stats {
        out.push_str(&format!(
            "{:>6} {:>6} {:>4} {:>4} {:>4} {:>4} {:>4}\n",
            line.player_id.to_string(),
            line.game_id.to_string(),
            line.points,
            line.assists,
            line.rebounds,
            line.blocks,
            line.steals
        ));
    }
    out
}
