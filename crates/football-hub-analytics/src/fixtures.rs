//! Row builders for unit tests

use chrono::{DateTime, NaiveDate, Utc};
use football_hub_db::entities::{club, football_match, player, transfer};

pub(crate) fn day(date: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

pub(crate) fn club(club_id: &str, name: &str, league: &str, founded: i32) -> club::Model {
    club::Model {
        id: 0,
        club_id: club_id.to_string(),
        name: name.to_string(),
        founded,
        stadium: format!("{name} Ground"),
        capacity: 50_000,
        manager: "Manager".to_string(),
        budget: 100_000_000,
        league: league.to_string(),
    }
}

pub(crate) fn player(
    player_id: &str,
    name: &str,
    position: &str,
    nationality: &str,
    age: i32,
    club_id: &str,
) -> player::Model {
    player::Model {
        id: 0,
        player_id: player_id.to_string(),
        name: name.to_string(),
        age,
        position: position.to_string(),
        nationality: nationality.to_string(),
        jersey_number: 10,
        salary: 100_000,
        goals: 0,
        assists: 0,
        matches_played: 30,
        club_id: club_id.to_string(),
    }
}

pub(crate) fn fixture(
    match_id: &str,
    home: &str,
    away: &str,
    score: (i32, i32),
    date: &str,
    attendance: Option<i32>,
) -> football_match::Model {
    football_match::Model {
        id: 0,
        match_id: match_id.to_string(),
        home_club_id: home.to_string(),
        away_club_id: away.to_string(),
        date: day(date),
        home_score: score.0,
        away_score: score.1,
        stadium: "Stadium".to_string(),
        attendance,
        referee: "Referee".to_string(),
    }
}

pub(crate) fn transfer(transfer_id: &str, player_id: &str, fee: i64, date: &str) -> transfer::Model {
    transfer::Model {
        id: 0,
        transfer_id: transfer_id.to_string(),
        player_id: player_id.to_string(),
        from_club_id: "CLB001".to_string(),
        to_club_id: "CLB002".to_string(),
        transfer_fee: fee,
        date: day(date),
        contract_years: 4,
    }
}
