//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{GameId, PlayerId, StatCategory, TeamId};
use chrono::{NaiveDate, NaiveTime};

fn create_test_db() -> LeagueDatabase {
    LeagueDatabase::new_in_memory().unwrap()
}

fn team(id: u32, name: &str) -> Team {
    Team {
        team_id: TeamId::new(id),
        name: name.to_string(),
        coach: None,
    }
}

fn player(id: u32, team_id: u32, first: &str, last: &str) -> Player {
    Player {
        player_id: PlayerId::new(id),
        team_id: Some(TeamId::new(team_id)),
        first_name: first.to_string(),
        last_name: last.to_string(),
        position: None,
        jersey_number: None,
    }
}

fn game(id: u32, date: &str, home: (u32, u32), away: (u32, u32)) -> Game {
    Game {
        game_id: GameId::new(id),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        time: None,
        location: None,
        home_team_id: TeamId::new(home.0),
        home_score: home.1,
        away_team_id: TeamId::new(away.0),
        away_score: away.1,
    }
}

fn stat_line(player_id: u32, game_id: u32, points: u32) -> StatLine {
    StatLine {
        player_id: PlayerId::new(player_id),
        game_id: GameId::new(game_id),
        points,
        assists: 0,
        rebounds: 0,
        blocks: 0,
        steals: 0,
    }
}

/// Two teams, one player each, one game (team 1 wins 100-90 at home)
fn create_test_db_with_game() -> LeagueDatabase {
    let mut db = create_test_db();
    db.insert_team(&team(1, "Herons")).unwrap();
    db.insert_team(&team(2, "Coyotes")).unwrap();
    db.insert_player(&player(10, 1, "Marcus", "Bell")).unwrap();
    db.insert_player(&player(20, 2, "Jalen", "Reyes")).unwrap();
    db.insert_game(&game(1, "2024-11-02", (1, 100), (2, 90)))
        .unwrap();
    db
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let mut db = create_test_db_with_game();
    db.initialize_schema().unwrap();

    assert_eq!(db.get_team_table().unwrap().len(), 2);
}

#[test]
fn test_insert_and_get_team() {
    let mut db = create_test_db();
    let herons = Team {
        team_id: TeamId::new(1),
        name: "Herons".to_string(),
        coach: Some("Dana Whitfield".to_string()),
    };
    db.insert_team(&herons).unwrap();

    assert_eq!(db.get_team(TeamId::new(1)).unwrap(), Some(herons));
    assert_eq!(db.get_team(TeamId::new(2)).unwrap(), None);
}

#[test]
fn test_get_player_table_filters_by_team() {
    let db = create_test_db_with_game();

    let all = db.get_player_table(None).unwrap();
    assert_eq!(all.len(), 2);

    let team_two = db.get_player_table(Some(TeamId::new(2))).unwrap();
    assert_eq!(team_two.len(), 1);
    assert_eq!(team_two[0].full_name(), "Jalen Reyes");
}

#[test]
fn test_game_round_trips_date_and_time() {
    let mut db = create_test_db_with_game();
    let mut night_game = game(2, "2024-11-09", (2, 80), (1, 95));
    night_game.time = Some(NaiveTime::from_hms_opt(19, 30, 0).unwrap());
    night_game.location = Some("Mesa Ridge Center".to_string());
    db.insert_game(&night_game).unwrap();

    let stored = db.get_game(GameId::new(2)).unwrap().unwrap();
    assert_eq!(stored, night_game);
}

#[test]
fn test_self_game_is_rejected() {
    let mut db = create_test_db_with_game();

    let result = db.insert_game(&game(2, "2024-11-09", (1, 80), (1, 70)));
    assert!(result.is_err());
}

#[test]
fn test_game_with_unknown_team_is_rejected() {
    let mut db = create_test_db_with_game();

    let result = db.insert_game(&game(2, "2024-11-09", (1, 80), (99, 70)));
    assert!(result.is_err());
}

#[test]
fn test_add_and_get_player_stats() {
    let mut db = create_test_db_with_game();
    let line = StatLine {
        player_id: PlayerId::new(10),
        game_id: GameId::new(1),
        points: 24,
        assists: 9,
        rebounds: 4,
        blocks: 0,
        steals: 3,
    };

    db.add_player_stats(&line).unwrap();

    let stored = db
        .get_player_stats(PlayerId::new(10), GameId::new(1))
        .unwrap();
    assert_eq!(stored, Some(line));
    assert_eq!(db.get_stats_table().unwrap(), vec![line]);
}

#[test]
fn test_add_duplicate_stats_fails() {
    let mut db = create_test_db_with_game();
    db.add_player_stats(&stat_line(10, 1, 24)).unwrap();

    let result = db.add_player_stats(&stat_line(10, 1, 30));
    assert!(result.is_err());
}

#[test]
fn test_add_stats_for_missing_game_fails() {
    let mut db = create_test_db_with_game();

    let result = db.add_player_stats(&stat_line(10, 42, 24));
    assert!(result.is_err());
}

#[test]
fn test_edit_player_stats() {
    let mut db = create_test_db_with_game();
    db.add_player_stats(&stat_line(10, 1, 24)).unwrap();

    db.edit_player_stats(&stat_line(10, 1, 31)).unwrap();

    let stored = db
        .get_player_stats(PlayerId::new(10), GameId::new(1))
        .unwrap()
        .unwrap();
    assert_eq!(stored.points, 31);
}

#[test]
fn test_edit_missing_stats_returns_not_found() {
    let mut db = create_test_db_with_game();

    let result = db.edit_player_stats(&stat_line(10, 1, 31));
    match result {
        Err(crate::LeagueError::StatsNotFound { player_id, game_id }) => {
            assert_eq!(player_id, 10);
            assert_eq!(game_id, 1);
        }
        other => panic!("Expected StatsNotFound, got {:?}", other),
    }
}

#[test]
fn test_delete_player_stats() {
    let mut db = create_test_db_with_game();
    db.add_player_stats(&stat_line(10, 1, 24)).unwrap();

    assert!(db
        .delete_player_stats(PlayerId::new(10), GameId::new(1))
        .unwrap());
    assert!(!db
        .delete_player_stats(PlayerId::new(10), GameId::new(1))
        .unwrap());
    assert!(db.get_stats_table().unwrap().is_empty());
}

#[test]
fn test_clear_all_data() {
    let mut db = create_test_db_with_game();
    db.add_player_stats(&stat_line(10, 1, 24)).unwrap();

    db.clear_all_data().unwrap();

    assert!(db.get_team_table().unwrap().is_empty());
    assert!(db.get_player_table(None).unwrap().is_empty());
    assert!(db.get_game_table().unwrap().is_empty());
    assert!(db.get_stats_table().unwrap().is_empty());
}

#[test]
fn test_team_record_home_win_away_loss() {
    let mut db = create_test_db_with_game();
    db.insert_game(&game(2, "2024-11-09", (2, 95), (1, 80)))
        .unwrap();

    let record = db.get_team_record(TeamId::new(1)).unwrap();
    assert_eq!(record, TeamRecord { wins: 1, losses: 1 });

    let record = db.get_team_record(TeamId::new(2)).unwrap();
    assert_eq!(record, TeamRecord { wins: 1, losses: 1 });
}

#[test]
fn test_team_record_ignores_ties() {
    let mut db = create_test_db_with_game();
    db.insert_game(&game(2, "2024-11-09", (2, 88), (1, 88)))
        .unwrap();

    assert_eq!(
        db.get_team_record(TeamId::new(1)).unwrap(),
        TeamRecord { wins: 1, losses: 0 }
    );
    assert_eq!(
        db.get_team_record(TeamId::new(2)).unwrap(),
        TeamRecord { wins: 0, losses: 1 }
    );
}

#[test]
fn test_team_record_without_games() {
    let mut db = create_test_db();
    db.insert_team(&team(5, "Idle")).unwrap();

    assert_eq!(
        db.get_team_record(TeamId::new(5)).unwrap(),
        TeamRecord::default()
    );
    // Unknown team is not an error
    assert_eq!(
        db.get_team_record(TeamId::new(404)).unwrap(),
        TeamRecord::default()
    );
}

#[test]
fn test_past_games_away_loss_uses_own_perspective() {
    let mut db = create_test_db();
    db.insert_team(&team(1, "Herons")).unwrap();
    db.insert_team(&team(2, "Coyotes")).unwrap();
    db.insert_game(&game(1, "2024-11-02", (2, 70), (1, 60)))
        .unwrap();

    let games = db.get_team_past_games(TeamId::new(1)).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].opponent, "Coyotes");
    assert_eq!(games[0].score, "60 - 70");
    assert_eq!(games[0].result, GameResult::L);
    assert!(!games[0].home);
}

#[test]
fn test_past_games_tie_is_reported_as_loss() {
    let mut db = create_test_db_with_game();
    db.insert_game(&game(2, "2024-11-09", (2, 88), (1, 88)))
        .unwrap();

    let games = db.get_team_past_games(TeamId::new(2)).unwrap();
    let tie = games.iter().find(|g| g.game_id == GameId::new(2)).unwrap();
    assert_eq!(tie.score, "88 - 88");
    assert_eq!(tie.result, GameResult::L);
}

#[test]
fn test_past_games_sorted_by_date() {
    let mut db = create_test_db_with_game();
    // Inserted out of order on purpose
    db.insert_game(&game(3, "2024-12-01", (1, 90), (2, 85)))
        .unwrap();
    db.insert_game(&game(2, "2024-10-15", (2, 77), (1, 99)))
        .unwrap();

    let games = db.get_team_past_games(TeamId::new(1)).unwrap();
    let ids: Vec<u32> = games.iter().map(|g| g.game_id.as_u32()).collect();
    assert_eq!(ids, vec![2, 1, 3]);
    assert!(games.iter().all(|g| g.result == GameResult::W));
}

#[test]
fn test_roster_average_is_mean_of_stat_lines() {
    let mut db = create_test_db_with_game();
    db.insert_game(&game(2, "2024-11-09", (2, 80), (1, 95)))
        .unwrap();
    db.add_player_stats(&stat_line(10, 1, 10)).unwrap();
    db.add_player_stats(&stat_line(10, 2, 20)).unwrap();

    let roster = db.get_team_roster_stats(TeamId::new(1)).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].player_name, "Marcus Bell");
    assert_eq!(roster[0].ppg, Some(15.0));
    assert_eq!(roster[0].apg, Some(0.0));
}

#[test]
fn test_roster_rounds_to_one_decimal() {
    let mut db = create_test_db_with_game();
    db.insert_game(&game(2, "2024-11-09", (2, 80), (1, 95)))
        .unwrap();
    db.insert_game(&game(3, "2024-11-16", (1, 90), (2, 85)))
        .unwrap();
    for (game_id, points) in [(1, 12), (2, 12), (3, 13)] {
        db.add_player_stats(&stat_line(10, game_id, points)).unwrap();
    }

    let roster = db.get_team_roster_stats(TeamId::new(1)).unwrap();
    assert_eq!(roster[0].ppg, Some(12.3));
}

#[test]
fn test_roster_includes_players_without_stats() {
    let mut db = create_test_db_with_game();
    db.insert_player(&player(11, 1, "Theo", "Lindqvist")).unwrap();
    db.add_player_stats(&stat_line(10, 1, 24)).unwrap();

    let roster = db.get_team_roster_stats(TeamId::new(1)).unwrap();
    assert_eq!(roster.len(), 2);

    let bench = roster
        .iter()
        .find(|r| r.player_id == PlayerId::new(11))
        .unwrap();
    assert_eq!(bench.ppg, None);
    assert_eq!(bench.apg, None);
    assert_eq!(bench.rpg, None);
    assert_eq!(bench.bpg, None);
    assert_eq!(bench.spg, None);
}

#[test]
fn test_leaders_pick_highest_average() {
    let mut db = create_test_db_with_game();
    db.insert_player(&player(11, 1, "Theo", "Lindqvist")).unwrap();
    db.insert_game(&game(2, "2024-11-09", (2, 80), (1, 95)))
        .unwrap();
    db.add_player_stats(&stat_line(10, 1, 8)).unwrap();
    db.add_player_stats(&stat_line(10, 2, 9)).unwrap();
    db.add_player_stats(&StatLine {
        rebounds: 11,
        ..stat_line(11, 1, 14)
    })
    .unwrap();

    let leaders = db.get_team_stats_leaders(TeamId::new(1)).unwrap();
    assert_eq!(leaders.len(), 5);

    let categories: Vec<StatCategory> = leaders.iter().map(|l| l.category).collect();
    assert_eq!(categories, StatCategory::ALL.to_vec());

    assert_eq!(leaders[0].player_name, "Theo Lindqvist");
    assert_eq!(leaders[0].average, 14.0);
    assert_eq!(leaders[2].player_id, PlayerId::new(11));
}

#[test]
fn test_leaders_tie_goes_to_lowest_player_id() {
    let mut db = create_test_db_with_game();
    db.insert_player(&player(5, 1, "Andre", "Holloway")).unwrap();
    db.add_player_stats(&stat_line(10, 1, 20)).unwrap();
    db.add_player_stats(&stat_line(5, 1, 20)).unwrap();

    let leaders = db.get_team_stats_leaders(TeamId::new(1)).unwrap();
    assert!(leaders.iter().all(|l| l.player_id == PlayerId::new(5)));
}

#[test]
fn test_leaders_skip_players_without_stats() {
    let mut db = create_test_db_with_game();
    db.insert_player(&player(1, 1, "Theo", "Lindqvist")).unwrap();
    db.add_player_stats(&stat_line(10, 1, 0)).unwrap();

    // Player 1 has the lower id but no stat lines, so never leads
    let leaders = db.get_team_stats_leaders(TeamId::new(1)).unwrap();
    assert_eq!(leaders.len(), 5);
    assert!(leaders.iter().all(|l| l.player_id == PlayerId::new(10)));
}

#[test]
fn test_leaders_empty_without_stats() {
    let db = create_test_db_with_game();

    let leaders = db.get_team_stats_leaders(TeamId::new(1)).unwrap();
    assert!(leaders.is_empty());
}

#[test]
fn test_leader_average_matches_roster_average() {
    let mut db = create_test_db();
    db.insert_team(&team(1, "Herons")).unwrap();
    db.insert_team(&team(2, "Coyotes")).unwrap();
    db.insert_player(&player(10, 1, "Marcus", "Bell")).unwrap();

    // 3 points over 20 games: 0.15 exactly in decimal, not in binary
    for game_id in 1..=20 {
        let day = format!("2024-11-{:02}", game_id);
        db.insert_game(&game(game_id, &day, (1, 90), (2, 80))).unwrap();
        let points = if game_id <= 3 { 1 } else { 0 };
        db.add_player_stats(&stat_line(10, game_id, points)).unwrap();
    }

    let roster = db.get_team_roster_stats(TeamId::new(1)).unwrap();
    let leaders = db.get_team_stats_leaders(TeamId::new(1)).unwrap();

    let ppg = leaders
        .iter()
        .find(|l| l.category == StatCategory::Ppg)
        .unwrap();
    assert_eq!(Some(ppg.average), roster[0].ppg);
}

#[test]
fn test_leaders_rank_on_exact_average() {
    let mut db = create_test_db_with_game();
    db.insert_player(&player(5, 1, "Andre", "Holloway")).unwrap();
    for game_id in 2..=7 {
        let day = format!("2024-11-{:02}", game_id + 7);
        db.insert_game(&game(game_id, &day, (1, 90), (2, 85))).unwrap();
    }

    // 37/3 = 12.33 and 86/7 = 12.29 both round to 12.3
    for (game_id, points) in [(1, 12), (2, 12), (3, 13)] {
        db.add_player_stats(&stat_line(10, game_id, points)).unwrap();
    }
    for game_id in 1..=7 {
        let points = if game_id == 7 { 14 } else { 12 };
        db.add_player_stats(&stat_line(5, game_id, points)).unwrap();
    }

    let leaders = db.get_team_stats_leaders(TeamId::new(1)).unwrap();
    assert_eq!(leaders[0].category, StatCategory::Ppg);
    assert_eq!(leaders[0].player_id, PlayerId::new(10));
    assert_eq!(leaders[0].average, 12.3);
}

#[test]
fn test_seed_sample_data() {
    let mut db = create_test_db();
    db.seed_sample_data().unwrap();

    assert_eq!(db.get_team_table().unwrap().len(), 4);
    assert_eq!(db.get_player_table(None).unwrap().len(), 12);
    assert_eq!(db.get_game_table().unwrap().len(), 6);

    // Herons: home win, away win, home loss
    assert_eq!(
        db.get_team_record(TeamId::new(1)).unwrap(),
        TeamRecord { wins: 2, losses: 1 }
    );
    // Otters tied the Coyotes in game 6
    assert_eq!(
        db.get_team_record(TeamId::new(4)).unwrap(),
        TeamRecord { wins: 1, losses: 1 }
    );
}

#[test]
fn test_seed_sample_data_twice_is_harmless() {
    let mut db = create_test_db();
    db.seed_sample_data().unwrap();
    db.seed_sample_data().unwrap();

    assert_eq!(db.get_stats_table().unwrap().len(), 28);
}
