//! Cross-entity search
//!
//! Name search over players or clubs, returned together with market-value
//! analytics computed over the full player set.
//!
//! A player's market value is the maximum fee among their transfers. Two
//! readings of it coexist and both are intentional:
//! - ranking and nationality figures treat "no transfers" as 0
//! - the per-position market average skips players without transfers and
//!   players whose best fee is 0

use std::fmt;
use std::str::FromStr;

use football_hub_db::entities::{club, player};
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::aggregate::{Groups, Mean};
use crate::error::AnalyticsError;
use crate::index::{scan_clubs, scan_players, scan_transfers, ClubIndex, TransferLedger};
use crate::views::{ClubView, PlayerView};

/// Result limit when a query string is given
pub const QUERY_RESULT_LIMIT: usize = 50;

/// Result limit when browsing without a query
pub const BROWSE_RESULT_LIMIT: usize = 20;

pub const NATIONALITY_LIMIT: usize = 10;

pub const TOP_PLAYER_LIMIT: usize = 8;

/// What a search looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Player,
    Club,
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(SearchKind::Player),
            "club" => Ok(SearchKind::Club),
            other => Err(format!("unknown search type: {}", other)),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Player => write!(f, "player"),
            SearchKind::Club => write!(f, "club"),
        }
    }
}

/// Search parameters exactly as they arrive on the query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive name fragment; empty means everything
    pub q: Option<String>,
    /// `player` (default) or `club`
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl SearchQuery {
    pub fn text(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    /// Requested type as sent, `player` when absent or empty
    pub fn kind_label(&self) -> &str {
        match self.kind.as_deref() {
            Some(kind) if !kind.is_empty() => kind,
            _ => "player",
        }
    }

    /// `None` for an unrecognised type
    pub fn kind(&self) -> Option<SearchKind> {
        self.kind_label().parse().ok()
    }

    fn limit(&self) -> usize {
        if self.text().is_empty() {
            BROWSE_RESULT_LIMIT
        } else {
            QUERY_RESULT_LIMIT
        }
    }
}

/// A player with club and market value attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlayerHit {
    #[serde(flatten)]
    pub player: PlayerView,
    pub club: Option<ClubView>,
    /// Highest transfer fee, 0 without transfers
    pub latest_transfer_fee: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(untagged)]
pub enum SearchResults {
    Players(Vec<PlayerHit>),
    Clubs(Vec<ClubView>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Players(hits) => hits.len(),
            SearchResults::Clubs(clubs) => clubs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Market summary for one position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PositionMarketValue {
    pub position: String,
    pub player_count: u64,
    pub avg_age: f64,
    pub players_with_transfers: u64,
    /// Over players with a positive market value only; `null` if none
    pub avg_market_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NationalityMarketValue {
    pub nationality: String,
    pub player_count: u64,
    /// Players without transfers count as 0
    pub avg_market_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LeagueDistribution {
    pub league: String,
    pub club_count: u64,
    pub avg_founded_year: f64,
}

/// Response of the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub results: SearchResults,
    pub search_analytics: Vec<PositionMarketValue>,
    pub nationality_stats: Vec<NationalityMarketValue>,
    pub league_stats: Vec<LeagueDistribution>,
    pub top_players: Vec<PlayerHit>,
    pub search_query: String,
    pub search_type: String,
    pub result_count: usize,
}

fn name_matches(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}

fn player_hit(
    player: &player::Model,
    clubs: &ClubIndex<'_>,
    ledger: &TransferLedger,
) -> PlayerHit {
    PlayerHit {
        player: PlayerView::from(player),
        club: clubs.get(&player.club_id).map(ClubView::from),
        latest_transfer_fee: ledger.market_value(&player.player_id).unwrap_or(0),
    }
}

/// Players whose name contains `text`, ordered by name
pub fn search_players(
    players: &[player::Model],
    clubs: &ClubIndex<'_>,
    ledger: &TransferLedger,
    text: &str,
    limit: usize,
) -> Vec<PlayerHit> {
    let needle = text.to_lowercase();
    let mut found: Vec<&player::Model> = players
        .iter()
        .filter(|player| name_matches(&player.name, &needle))
        .collect();
    found.sort_by(|a, b| a.name.cmp(&b.name));

    found
        .into_iter()
        .take(limit)
        .map(|player| player_hit(player, clubs, ledger))
        .collect()
}

/// Clubs whose name contains `text`, ordered by name
pub fn search_clubs(clubs: &[club::Model], text: &str, limit: usize) -> Vec<ClubView> {
    let needle = text.to_lowercase();
    let mut found: Vec<&club::Model> = clubs
        .iter()
        .filter(|club| name_matches(&club.name, &needle))
        .collect();
    found.sort_by(|a, b| a.name.cmp(&b.name));

    found.into_iter().take(limit).map(ClubView::from).collect()
}

#[derive(Default)]
struct PositionValueTally {
    players: u64,
    age: Mean,
    with_transfers: u64,
    value: Mean,
}

/// Per position, largest groups first
pub fn position_market_values(
    players: &[player::Model],
    ledger: &TransferLedger,
) -> Vec<PositionMarketValue> {
    let mut groups: Groups<&str, PositionValueTally> = Groups::new();

    for player in players {
        let tally = groups.entry(player.position.as_str());
        tally.players += 1;
        tally.age.push(player.age as f64);

        if let Some(value) = ledger.market_value(&player.player_id) {
            tally.with_transfers += 1;
            if value > 0 {
                tally.value.push(value as f64);
            }
        }
    }

    let mut summaries: Vec<PositionMarketValue> = groups
        .into_entries()
        .into_iter()
        .map(|(position, tally)| PositionMarketValue {
            position: position.to_string(),
            player_count: tally.players,
            avg_age: tally.age.value_or_zero(),
            players_with_transfers: tally.with_transfers,
            avg_market_value: tally.value.value(),
        })
        .collect();

    summaries.sort_by(|a, b| b.player_count.cmp(&a.player_count));
    summaries
}

#[derive(Default)]
struct NationalityValueTally {
    players: u64,
    value: Mean,
}

/// Most represented nationalities
pub fn nationality_market_values(
    players: &[player::Model],
    ledger: &TransferLedger,
) -> Vec<NationalityMarketValue> {
    let mut groups: Groups<&str, NationalityValueTally> = Groups::new();

    for player in players {
        let tally = groups.entry(player.nationality.as_str());
        tally.players += 1;
        tally
            .value
            .push(ledger.market_value(&player.player_id).unwrap_or(0) as f64);
    }

    let mut summaries: Vec<NationalityMarketValue> = groups
        .into_entries()
        .into_iter()
        .map(|(nationality, tally)| NationalityMarketValue {
            nationality: nationality.to_string(),
            player_count: tally.players,
            avg_market_value: tally.value.value_or_zero(),
        })
        .collect();

    summaries.sort_by(|a, b| b.player_count.cmp(&a.player_count));
    summaries.truncate(NATIONALITY_LIMIT);
    summaries
}

#[derive(Default)]
struct LeagueClubTally {
    clubs: u64,
    founded: Mean,
}

/// Clubs per league, largest leagues first
pub fn league_distribution(clubs: &[club::Model]) -> Vec<LeagueDistribution> {
    let mut groups: Groups<&str, LeagueClubTally> = Groups::new();

    for club in clubs {
        let tally = groups.entry(club.league.as_str());
        tally.clubs += 1;
        tally.founded.push(club.founded as f64);
    }

    let mut leagues: Vec<LeagueDistribution> = groups
        .into_entries()
        .into_iter()
        .map(|(league, tally)| LeagueDistribution {
            league: league.to_string(),
            club_count: tally.clubs,
            avg_founded_year: tally.founded.value_or_zero(),
        })
        .collect();

    leagues.sort_by(|a, b| b.club_count.cmp(&a.club_count));
    leagues
}

/// Players with a positive market value, most valuable first
pub fn top_valued_players(
    players: &[player::Model],
    clubs: &ClubIndex<'_>,
    ledger: &TransferLedger,
) -> Vec<PlayerHit> {
    let mut valued: Vec<PlayerHit> = players
        .iter()
        .map(|player| player_hit(player, clubs, ledger))
        .filter(|hit| hit.latest_transfer_fee > 0)
        .collect();

    valued.sort_by(|a, b| b.latest_transfer_fee.cmp(&a.latest_transfer_fee));
    valued.truncate(TOP_PLAYER_LIMIT);
    valued
}

/// Build the search report
pub async fn search_report<C: ConnectionTrait>(
    db: &C,
    query: &SearchQuery,
) -> Result<SearchReport, AnalyticsError> {
    debug!(
        "Building search report for {:?} (type {})",
        query.text(),
        query.kind_label()
    );

    let players = scan_players(db).await?;
    let clubs = scan_clubs(db).await?;
    let transfers = scan_transfers(db).await?;

    let club_index = ClubIndex::new(&clubs);
    let ledger = TransferLedger::new(&transfers);

    let results = match query.kind() {
        Some(SearchKind::Player) => SearchResults::Players(search_players(
            &players,
            &club_index,
            &ledger,
            query.text(),
            query.limit(),
        )),
        Some(SearchKind::Club) => {
            SearchResults::Clubs(search_clubs(&clubs, query.text(), query.limit()))
        }
        None => {
            warn!("Unknown search type {:?}, returning no results", query.kind_label());
            SearchResults::Players(Vec::new())
        }
    };

    Ok(SearchReport {
        result_count: results.len(),
        results,
        search_analytics: position_market_values(&players, &ledger),
        nationality_stats: nationality_market_values(&players, &ledger),
        league_stats: league_distribution(&clubs),
        top_players: top_valued_players(&players, &club_index, &ledger),
        search_query: query.text().to_string(),
        search_type: query.kind_label().to_string(),
    })
}
