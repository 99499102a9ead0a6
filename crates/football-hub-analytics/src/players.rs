//! Player analytics
//!
//! Fixed report over every player: position and nationality breakdowns,
//! the best performers and a per-league summary.

use football_hub_db::entities::player;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::aggregate::{Groups, Mean};
use crate::error::AnalyticsError;
use crate::index::{scan_clubs, scan_players, ClubIndex};

pub const TOP_PERFORMER_LIMIT: usize = 5;

/// Age above which the performance score starts penalising a player
pub const PEAK_AGE: i32 = 35;

/// `goals * 2 + assists + (35 - age)`
pub fn performance_score(player: &player::Model) -> i32 {
    player.goals * 2 + player.assists + (PEAK_AGE - player.age)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PositionSummary {
    pub position: String,
    pub count: u64,
    pub avg_age: f64,
    pub avg_goals: f64,
    pub avg_assists: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NationalityCount {
    pub nationality: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    #[serde(rename = "playerID")]
    pub player_id: String,
    pub name: String,
    pub position: String,
    pub goals: i32,
    pub assists: i32,
    pub age: i32,
    pub performance_score: i32,
    /// Absent when the player's club does not resolve
    pub club_name: Option<String>,
    pub league: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LeagueSummary {
    pub league: String,
    pub player_count: u64,
    pub avg_age: f64,
    pub total_goals: i64,
    pub total_assists: i64,
    pub avg_salary: f64,
    pub max_goals: i32,
    /// First player, in scan order, reaching `max_goals`
    pub top_scorer: String,
    pub avg_goals_per_player: f64,
    pub avg_assists_per_player: f64,
}

/// Response of the player stats endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlayerReport {
    pub positions: Vec<PositionSummary>,
    pub nationalities: Vec<NationalityCount>,
    pub top_performers: Vec<TopPerformer>,
    pub league_analytics: Vec<LeagueSummary>,
}

#[derive(Default)]
struct PositionTally {
    count: u64,
    age: Mean,
    goals: Mean,
    assists: Mean,
}

/// Per exact position string, in first-seen order
pub fn position_summaries(players: &[player::Model]) -> Vec<PositionSummary> {
    let mut groups: Groups<&str, PositionTally> = Groups::new();

    for player in players {
        let tally = groups.entry(player.position.as_str());
        tally.count += 1;
        tally.age.push(player.age as f64);
        tally.goals.push(player.goals as f64);
        tally.assists.push(player.assists as f64);
    }

    groups
        .into_entries()
        .into_iter()
        .map(|(position, tally)| PositionSummary {
            position: position.to_string(),
            count: tally.count,
            avg_age: tally.age.value_or_zero(),
            avg_goals: tally.goals.value_or_zero(),
            avg_assists: tally.assists.value_or_zero(),
        })
        .collect()
}

/// Player count per exact nationality string, in first-seen order
pub fn nationality_counts(players: &[player::Model]) -> Vec<NationalityCount> {
    let mut groups: Groups<&str, u64> = Groups::new();

    for player in players {
        *groups.entry(player.nationality.as_str()) += 1;
    }

    groups
        .into_entries()
        .into_iter()
        .map(|(nationality, count)| NationalityCount {
            nationality: nationality.to_string(),
            count,
        })
        .collect()
}

/// Highest performance scores; equal scores keep scan order
pub fn top_performers(players: &[player::Model], clubs: &ClubIndex<'_>) -> Vec<TopPerformer> {
    let mut ranked: Vec<(i32, &player::Model)> = players
        .iter()
        .map(|player| (performance_score(player), player))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    ranked
        .into_iter()
        .take(TOP_PERFORMER_LIMIT)
        .map(|(score, player)| {
            let club = clubs.get(&player.club_id);
            TopPerformer {
                player_id: player.player_id.clone(),
                name: player.name.clone(),
                position: player.position.clone(),
                goals: player.goals,
                assists: player.assists,
                age: player.age,
                performance_score: score,
                club_name: club.map(|c| c.name.clone()),
                league: club.map(|c| c.league.clone()),
            }
        })
        .collect()
}

#[derive(Default)]
struct LeagueTally<'a> {
    players: u64,
    age: Mean,
    salary: Mean,
    goals: i64,
    assists: i64,
    top: Option<(i32, &'a str)>,
}

/// Per league of the player's club, most goals first.
///
/// Players whose club does not resolve have no league and are left out.
pub fn league_summaries(players: &[player::Model], clubs: &ClubIndex<'_>) -> Vec<LeagueSummary> {
    let mut groups: Groups<&str, LeagueTally<'_>> = Groups::new();

    for player in players {
        let Some(club) = clubs.get(&player.club_id) else {
            continue;
        };

        let tally = groups.entry(club.league.as_str());
        tally.players += 1;
        tally.age.push(player.age as f64);
        tally.salary.push(player.salary as f64);
        tally.goals += i64::from(player.goals);
        tally.assists += i64::from(player.assists);

        if tally.top.map_or(true, |(goals, _)| player.goals > goals) {
            tally.top = Some((player.goals, player.name.as_str()));
        }
    }

    let mut summaries: Vec<LeagueSummary> = groups
        .into_entries()
        .into_iter()
        .map(|(league, tally)| {
            let (max_goals, top_scorer) = tally.top.unwrap_or_default();
            let count = tally.players as f64;
            LeagueSummary {
                league: league.to_string(),
                player_count: tally.players,
                avg_age: tally.age.value_or_zero(),
                total_goals: tally.goals,
                total_assists: tally.assists,
                avg_salary: tally.salary.value_or_zero(),
                max_goals,
                top_scorer: top_scorer.to_string(),
                avg_goals_per_player: tally.goals as f64 / count,
                avg_assists_per_player: tally.assists as f64 / count,
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.total_goals.cmp(&a.total_goals));
    summaries
}

/// Build the player stats report
pub async fn player_report<C: ConnectionTrait>(db: &C) -> Result<PlayerReport, AnalyticsError> {
    debug!("Building player report");

    let players = scan_players(db).await?;
    let clubs = scan_clubs(db).await?;
    let index = ClubIndex::new(&clubs);

    Ok(PlayerReport {
        positions: position_summaries(&players),
        nationalities: nationality_counts(&players),
        top_performers: top_performers(&players, &index),
        league_analytics: league_summaries(&players, &index),
    })
}
