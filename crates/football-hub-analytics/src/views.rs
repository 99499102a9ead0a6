//! JSON projections of stored rows
//!
//! Field names follow the wire format the Football Hub pages consume
//! (`clubID`, `homeClubID`, ...). Storage row ids are not exposed.

use chrono::{DateTime, Utc};
use football_hub_db::entities::{club, football_match, player, transfer};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Club record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClubView {
    #[serde(rename = "clubID")]
    pub club_id: String,
    pub club_name: String,
    /// Year founded
    pub founded: i32,
    pub stadium: String,
    pub capacity: i32,
    pub manager: String,
    pub budget: i64,
    pub league: String,
}

impl From<&club::Model> for ClubView {
    fn from(club: &club::Model) -> Self {
        Self {
            club_id: club.club_id.clone(),
            club_name: club.name.clone(),
            founded: club.founded,
            stadium: club.stadium.clone(),
            capacity: club.capacity,
            manager: club.manager.clone(),
            budget: club.budget,
            league: club.league.clone(),
        }
    }
}

/// Player record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    #[serde(rename = "playerID")]
    pub player_id: String,
    pub name: String,
    pub age: i32,
    pub position: String,
    pub nationality: String,
    pub jersey_number: i32,
    pub salary: i64,
    pub goals: i32,
    pub assists: i32,
    pub matches_played: i32,
    #[serde(rename = "clubID")]
    pub club_id: String,
}

impl From<&player::Model> for PlayerView {
    fn from(player: &player::Model) -> Self {
        Self {
            player_id: player.player_id.clone(),
            name: player.name.clone(),
            age: player.age,
            position: player.position.clone(),
            nationality: player.nationality.clone(),
            jersey_number: player.jersey_number,
            salary: player.salary,
            goals: player.goals,
            assists: player.assists,
            matches_played: player.matches_played,
            club_id: player.club_id.clone(),
        }
    }
}

/// Match record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    #[serde(rename = "matchID")]
    pub match_id: String,
    #[serde(rename = "homeClubID")]
    pub home_club_id: String,
    #[serde(rename = "awayClubID")]
    pub away_club_id: String,
    pub date: DateTime<Utc>,
    pub home_score: i32,
    pub away_score: i32,
    pub stadium: String,
    pub attendance: Option<i32>,
    pub referee: String,
}

impl From<&football_match::Model> for MatchView {
    fn from(fixture: &football_match::Model) -> Self {
        Self {
            match_id: fixture.match_id.clone(),
            home_club_id: fixture.home_club_id.clone(),
            away_club_id: fixture.away_club_id.clone(),
            date: fixture.date,
            home_score: fixture.home_score,
            away_score: fixture.away_score,
            stadium: fixture.stadium.clone(),
            attendance: fixture.attendance,
            referee: fixture.referee.clone(),
        }
    }
}

/// Transfer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TransferView {
    #[serde(rename = "transferID")]
    pub transfer_id: String,
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "fromClubID")]
    pub from_club_id: String,
    #[serde(rename = "toClubID")]
    pub to_club_id: String,
    /// Zero for a free transfer
    pub transfer_fee: i64,
    pub date: DateTime<Utc>,
    pub contract_years: i32,
}

impl From<&transfer::Model> for TransferView {
    fn from(transfer: &transfer::Model) -> Self {
        Self {
            transfer_id: transfer.transfer_id.clone(),
            player_id: transfer.player_id.clone(),
            from_club_id: transfer.from_club_id.clone(),
            to_club_id: transfer.to_club_id.clone(),
            transfer_fee: transfer.transfer_fee,
            date: transfer.date,
            contract_years: transfer.contract_years,
        }
    }
}
