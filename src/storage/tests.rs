//! Unit tests for the query layer

use super::*;
use crate::{LeagueId, PlayerId, TeamId};
use chrono::NaiveDate;

const SEED_SQL: &str = include_str!("../../tests/fixtures/seed.sql");

fn create_test_session() -> Session {
    let session = Session::open_in_memory().unwrap();
    session.conn.execute_batch(SEED_SQL).unwrap();
    session
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn player_ids(players: &[Player]) -> Vec<u64> {
    players.iter().map(|p| p.player_id.as_u64()).collect()
}

#[test]
fn test_get_player_found() {
    let session = create_test_session();

    let player = session.get_player(PlayerId::new(1001)).unwrap().unwrap();
    assert_eq!(player.player_id, PlayerId::new(1001));
    assert_eq!(player.first_name, "Aaron");
    assert_eq!(player.last_name, "Rodgers");
    assert_eq!(player.gsis_id.as_deref(), Some("00-0023459"));
    assert_eq!(player.last_changed_date, date(2024, 3, 1));
}

#[test]
fn test_get_player_with_null_gsis_id() {
    let session = create_test_session();

    let player = session.get_player(PlayerId::new(1003)).unwrap().unwrap();
    assert!(player.gsis_id.is_none());
}

#[test]
fn test_get_player_not_found_is_none() {
    let session = create_test_session();

    let result = session.get_player(PlayerId::new(999_999)).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_get_players_no_filters_returns_all_in_id_order() {
    let session = create_test_session();

    let players = session.get_players(&PlayerFilter::default()).unwrap();
    assert_eq!(player_ids(&players), vec![1001, 1002, 1003, 1004, 2009, 2010]);
}

#[test]
fn test_get_players_by_first_and_last_name() {
    let session = create_test_session();

    let filter = PlayerFilter {
        first_name: Some("Bryce".to_string()),
        last_name: Some("Young".to_string()),
        ..Default::default()
    };
    let players = session.get_players(&filter).unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].player_id, PlayerId::new(2009));
}

#[test]
fn test_get_players_single_name_filter() {
    let session = create_test_session();

    let filter = PlayerFilter {
        first_name: Some("Josh".to_string()),
        ..Default::default()
    };
    assert_eq!(player_ids(&session.get_players(&filter).unwrap()), vec![1003, 1004]);
}

#[test]
fn test_get_players_name_match_is_exact() {
    let session = create_test_session();

    let filter = PlayerFilter {
        last_name: Some("Youn".to_string()),
        ..Default::default()
    };
    assert!(session.get_players(&filter).unwrap().is_empty());
}

#[test]
fn test_get_players_conflicting_filters_return_empty() {
    let session = create_test_session();

    let filter = PlayerFilter {
        first_name: Some("Josh".to_string()),
        last_name: Some("Young".to_string()),
        ..Default::default()
    };
    assert!(session.get_players(&filter).unwrap().is_empty());
}

#[test]
fn test_get_players_min_date_is_inclusive() {
    let session = create_test_session();

    let filter = PlayerFilter {
        min_last_changed_date: Some(date(2024, 4, 1)),
        ..Default::default()
    };
    let players = session.get_players(&filter).unwrap();

    // 1002 and 2009 changed exactly on the bound
    assert_eq!(player_ids(&players), vec![1002, 1003, 2009]);
}

#[test]
fn test_get_players_date_and_name_combined() {
    let session = create_test_session();

    let filter = PlayerFilter {
        first_name: Some("Bryce".to_string()),
        min_last_changed_date: Some(date(2024, 4, 1)),
        ..Default::default()
    };
    assert_eq!(player_ids(&session.get_players(&filter).unwrap()), vec![2009]);
}

#[test]
fn test_get_players_pagination_slices_in_order() {
    let session = create_test_session();

    let all = session.get_players(&PlayerFilter::default()).unwrap();

    for skip in 0..8u32 {
        for limit in 0..8u32 {
            let filter = PlayerFilter {
                page: Page::new(skip, limit),
                ..Default::default()
            };
            let page = session.get_players(&filter).unwrap();

            let start = (skip as usize).min(all.len());
            let end = (start + limit as usize).min(all.len());
            assert!(page.len() <= limit as usize);
            assert_eq!(page, all[start..end].to_vec(), "skip={skip} limit={limit}");
        }
    }
}

#[test]
fn test_get_players_limit_zero_is_empty() {
    let session = create_test_session();

    let filter = PlayerFilter {
        page: Page::new(0, 0),
        ..Default::default()
    };
    assert!(session.get_players(&filter).unwrap().is_empty());
}

#[test]
fn test_ids_beyond_sqlite_range_match_nothing() {
    let session = create_test_session();
    let too_big = i64::MAX as u64 + 1;

    assert!(session.get_player(PlayerId::new(too_big)).unwrap().is_none());
    assert!(session.get_league(LeagueId::new(u64::MAX)).unwrap().is_none());

    let teams = session
        .get_teams(&TeamFilter {
            league_id: Some(LeagueId::new(too_big)),
            ..Default::default()
        })
        .unwrap();
    assert!(teams.is_empty());

    assert!(session
        .get_team_players(TeamId::new(too_big), Page::default())
        .unwrap()
        .is_empty());
    assert!(session
        .get_player_teams(PlayerId::new(too_big), Page::default())
        .unwrap()
        .is_empty());
    assert!(session
        .get_player_performances(PlayerId::new(too_big), Page::default())
        .unwrap()
        .is_empty());
}

#[test]
fn test_get_players_skip_past_end_is_empty() {
    let session = create_test_session();

    let filter = PlayerFilter {
        page: Page::new(1000, 10),
        ..Default::default()
    };
    assert!(session.get_players(&filter).unwrap().is_empty());
}

#[test]
fn test_get_players_is_repeatable() {
    let session = create_test_session();

    let filter = PlayerFilter {
        page: Page::new(1, 3),
        ..Default::default()
    };
    let first = session.get_players(&filter).unwrap();
    let second = session.get_players(&filter).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_get_performances_all_and_filtered() {
    let session = create_test_session();

    let all = session
        .get_performances(&PerformanceFilter {
            page: Page::unbounded(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all[0].performance_id.as_u64(), 3001);
    assert_eq!(all[0].week_number, "202301");
    assert!((all[0].fantasy_points - 18.4).abs() < f64::EPSILON);

    let recent = session
        .get_performances(&PerformanceFilter {
            min_last_changed_date: Some(date(2024, 4, 1)),
            ..Default::default()
        })
        .unwrap();
    let ids: Vec<u64> = recent.iter().map(|p| p.performance_id.as_u64()).collect();
    assert_eq!(ids, vec![3002, 3003, 3005]);
}

#[test]
fn test_get_league_found_and_missing() {
    let session = create_test_session();

    let league = session.get_league(LeagueId::new(5002)).unwrap().unwrap();
    assert_eq!(league.league_name, "Recurring Champions League");
    assert_eq!(league.scoring_type, "Half-PPR");

    assert!(session.get_league(LeagueId::new(1)).unwrap().is_none());
}

#[test]
fn test_get_leagues_filters() {
    let session = create_test_session();

    let by_name = session
        .get_leagues(&LeagueFilter {
            league_name: Some("Sunday Scramble".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].league_id, LeagueId::new(5003));

    let recent = session
        .get_leagues(&LeagueFilter {
            min_last_changed_date: Some(date(2024, 4, 1)),
            ..Default::default()
        })
        .unwrap();
    let ids: Vec<u64> = recent.iter().map(|l| l.league_id.as_u64()).collect();
    assert_eq!(ids, vec![5002, 5003]);
}

#[test]
fn test_get_teams_by_name_spans_leagues() {
    let session = create_test_session();

    let teams = session
        .get_teams(&TeamFilter {
            team_name: Some("Avocado Toast".to_string()),
            ..Default::default()
        })
        .unwrap();
    let ids: Vec<u64> = teams.iter().map(|t| t.team_id.as_u64()).collect();
    assert_eq!(ids, vec![6001, 6004]);
}

#[test]
fn test_get_teams_name_and_league_combined() {
    let session = create_test_session();

    let teams = session
        .get_teams(&TeamFilter {
            team_name: Some("Avocado Toast".to_string()),
            league_id: Some(LeagueId::new(5003)),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].team_id, TeamId::new(6004));
}

#[test]
fn test_get_teams_by_league_and_date() {
    let session = create_test_session();

    let teams = session
        .get_teams(&TeamFilter {
            league_id: Some(LeagueId::new(5001)),
            min_last_changed_date: Some(date(2024, 4, 1)),
            ..Default::default()
        })
        .unwrap();
    let ids: Vec<u64> = teams.iter().map(|t| t.team_id.as_u64()).collect();
    assert_eq!(ids, vec![6002]);
}

#[test]
fn test_counts_match_unfiltered_lists() {
    let session = create_test_session();

    let players = session
        .get_players(&PlayerFilter {
            page: Page::unbounded(),
            ..Default::default()
        })
        .unwrap();
    let teams = session
        .get_teams(&TeamFilter {
            page: Page::unbounded(),
            ..Default::default()
        })
        .unwrap();
    let leagues = session
        .get_leagues(&LeagueFilter {
            page: Page::unbounded(),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(session.get_player_count().unwrap(), players.len() as u64);
    assert_eq!(session.get_team_count().unwrap(), teams.len() as u64);
    assert_eq!(session.get_league_count().unwrap(), leagues.len() as u64);
    assert_eq!(session.get_player_count().unwrap(), 6);
}

#[test]
fn test_counts_on_empty_database() {
    let session = Session::open_in_memory().unwrap();

    assert_eq!(session.get_player_count().unwrap(), 0);
    assert_eq!(session.get_team_count().unwrap(), 0);
    assert_eq!(session.get_league_count().unwrap(), 0);
    assert!(session.get_players(&PlayerFilter::default()).unwrap().is_empty());
}

#[test]
fn test_get_team_players_follows_join_table() {
    let session = create_test_session();

    let roster = session
        .get_team_players(TeamId::new(6001), Page::default())
        .unwrap();
    assert_eq!(player_ids(&roster), vec![1001, 2009]);

    let empty = session
        .get_team_players(TeamId::new(6004), Page::default())
        .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_get_player_teams_follows_join_table() {
    let session = create_test_session();

    let teams = session
        .get_player_teams(PlayerId::new(2009), Page::default())
        .unwrap();
    let ids: Vec<u64> = teams.iter().map(|t| t.team_id.as_u64()).collect();
    assert_eq!(ids, vec![6001, 6003]);

    let paged = session
        .get_player_teams(PlayerId::new(2009), Page::new(1, 1))
        .unwrap();
    assert_eq!(paged.len(), 1);
    assert_eq!(paged[0].team_id, TeamId::new(6003));
}

#[test]
fn test_get_player_performances() {
    let session = create_test_session();

    let performances = session
        .get_player_performances(PlayerId::new(2009), Page::default())
        .unwrap();
    let ids: Vec<u64> = performances
        .iter()
        .map(|p| p.performance_id.as_u64())
        .collect();
    assert_eq!(ids, vec![3003, 3004]);
    assert!(performances
        .iter()
        .all(|p| p.player_id == PlayerId::new(2009)));
}

#[test]
fn test_foreign_keys_reject_orphan_team() {
    let session = Session::open_in_memory().unwrap();

    let result = session.conn.execute(
        "INSERT INTO team (team_id, team_name, last_changed_date, league_id)
         VALUES (1, 'Orphans', '2024-01-01', 42)",
        [],
    );
    assert!(result.is_err());
}
