//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use hoops_league::{
    cli::{Commands, HoopsLeague, ListCmd, ReportCmd, StatsCmd},
    commands::{
        init::handle_init,
        listing::{handle_list_games, handle_list_players, handle_list_teams},
        report::{
            handle_leaders, handle_past_games, handle_record, handle_roster, handle_standings,
            handle_team_report,
        },
        resolve_db_path,
        stats::{
            build_stat_line, handle_add_stats, handle_delete_stats, handle_edit_stats,
            handle_list_stats,
        },
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let app = HoopsLeague::parse();
    let db_path = resolve_db_path(app.db).context("failed to locate league database")?;
    tracing::debug!(path = %db_path.display(), "using database");

    match app.command {
        Commands::Init { sample, clear } => handle_init(&db_path, sample, clear)?,

        Commands::Report { cmd } => match cmd {
            ReportCmd::Record { team } => handle_record(&db_path, team.team_id, team.json)?,
            ReportCmd::PastGames { team } => {
                handle_past_games(&db_path, team.team_id, team.json)?
            }
            ReportCmd::Roster { team } => handle_roster(&db_path, team.team_id, team.json)?,
            ReportCmd::Leaders { team } => handle_leaders(&db_path, team.team_id, team.json)?,
            ReportCmd::Team { team } => {
                handle_team_report(&db_path, team.team_id, team.json).await?
            }
            ReportCmd::Standings { json } => handle_standings(&db_path, json)?,
        },

        Commands::Stats { cmd } => match cmd {
            StatsCmd::List { json } => handle_list_stats(&db_path, json)?,
            StatsCmd::Add { key, values } => {
                handle_add_stats(&db_path, build_stat_line(&key, &values))?
            }
            StatsCmd::Edit { key, values } => {
                handle_edit_stats(&db_path, build_stat_line(&key, &values))?
            }
            StatsCmd::Delete { key } => handle_delete_stats(&db_path, &key)?,
        },

        Commands::List { cmd } => match cmd {
            ListCmd::Teams { json } => handle_list_teams(&db_path, json)?,
            ListCmd::Players { team_id, json } => handle_list_players(&db_path, team_id, json)?,
            ListCmd::Games { json } => handle_list_games(&db_path, json)?,
        },
    }

    Ok(())
}

/// Log to stderr so JSON on stdout stays machine-readable. `RUST_LOG` overrides the level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
