//! Transfer analytics
//!
//! Free transfers (fee 0) are ordinary data points here: they count towards
//! every average, minimum and sum.

use chrono::{DateTime, Utc};
use football_hub_db::entities::transfer;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::aggregate::{Groups, Mean};
use crate::error::AnalyticsError;
use crate::index::{scan_clubs, scan_players, scan_transfers, ClubIndex, PlayerIndex};
use crate::views::{ClubView, PlayerView, TransferView};

pub const EXPENSIVE_TRANSFER_LIMIT: usize = 3;

/// A transfer with its player and both clubs joined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TransferDetail {
    #[serde(flatten)]
    pub transfer: TransferView,
    pub player: Option<PlayerView>,
    pub from_club: Option<ClubView>,
    pub to_club: Option<ClubView>,
}

/// Market figures for one player position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PositionMarket {
    pub position: String,
    pub avg_transfer_fee: f64,
    pub min_transfer_fee: i64,
    pub max_transfer_fee: i64,
    pub total_value: i64,
    pub total_transfers: u64,
    pub avg_contract_years: f64,
    /// Current age of the transferred players
    pub avg_player_age: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExpensiveTransfer {
    #[serde(rename = "transferID")]
    pub transfer_id: String,
    pub player_name: Option<String>,
    pub position: Option<String>,
    pub transfer_fee: i64,
    pub from_club: Option<String>,
    pub to_club: Option<String>,
    pub from_league: Option<String>,
    pub to_league: Option<String>,
    pub date: DateTime<Utc>,
    pub contract_years: i32,
}

/// Response of the transfers endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TransferReport {
    /// Every transfer, newest first
    pub transfers: Vec<TransferDetail>,
    pub transfer_analytics: Vec<PositionMarket>,
    pub expensive_transfers: Vec<ExpensiveTransfer>,
}

pub fn transfer_details(
    transfers: &[transfer::Model],
    players: &PlayerIndex<'_>,
    clubs: &ClubIndex<'_>,
) -> Vec<TransferDetail> {
    let mut ordered: Vec<&transfer::Model> = transfers.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    ordered
        .into_iter()
        .map(|transfer| TransferDetail {
            transfer: TransferView::from(transfer),
            player: players.get(&transfer.player_id).map(PlayerView::from),
            from_club: clubs.get(&transfer.from_club_id).map(ClubView::from),
            to_club: clubs.get(&transfer.to_club_id).map(ClubView::from),
        })
        .collect()
}

#[derive(Default)]
struct MarketTally {
    fee: Mean,
    min: Option<i64>,
    max: Option<i64>,
    total: i64,
    count: u64,
    contract: Mean,
    age: Mean,
}

/// Per position of the transferred player, highest average fee first.
///
/// Transfers whose player does not resolve have no position and are left
/// out.
pub fn position_market(
    transfers: &[transfer::Model],
    players: &PlayerIndex<'_>,
) -> Vec<PositionMarket> {
    let mut groups: Groups<&str, MarketTally> = Groups::new();

    for transfer in transfers {
        let Some(player) = players.get(&transfer.player_id) else {
            continue;
        };

        let fee = transfer.transfer_fee;
        let tally = groups.entry(player.position.as_str());
        tally.fee.push(fee as f64);
        tally.min = Some(tally.min.map_or(fee, |min| min.min(fee)));
        tally.max = Some(tally.max.map_or(fee, |max| max.max(fee)));
        tally.total += fee;
        tally.count += 1;
        tally.contract.push(transfer.contract_years as f64);
        tally.age.push(player.age as f64);
    }

    let mut markets: Vec<PositionMarket> = groups
        .into_entries()
        .into_iter()
        .map(|(position, tally)| PositionMarket {
            position: position.to_string(),
            avg_transfer_fee: tally.fee.value_or_zero(),
            min_transfer_fee: tally.min.unwrap_or_default(),
            max_transfer_fee: tally.max.unwrap_or_default(),
            total_value: tally.total,
            total_transfers: tally.count,
            avg_contract_years: tally.contract.value_or_zero(),
            avg_player_age: tally.age.value_or_zero(),
        })
        .collect();

    markets.sort_by(|a, b| b.avg_transfer_fee.total_cmp(&a.avg_transfer_fee));
    markets
}

/// The highest fees paid
pub fn expensive_transfers(
    transfers: &[transfer::Model],
    players: &PlayerIndex<'_>,
    clubs: &ClubIndex<'_>,
) -> Vec<ExpensiveTransfer> {
    let mut ranked: Vec<&transfer::Model> = transfers.iter().collect();
    ranked.sort_by(|a, b| b.transfer_fee.cmp(&a.transfer_fee));

    ranked
        .into_iter()
        .take(EXPENSIVE_TRANSFER_LIMIT)
        .map(|transfer| {
            let player = players.get(&transfer.player_id);
            let from = clubs.get(&transfer.from_club_id);
            let to = clubs.get(&transfer.to_club_id);

            ExpensiveTransfer {
                transfer_id: transfer.transfer_id.clone(),
                player_name: player.map(|p| p.name.clone()),
                position: player.map(|p| p.position.clone()),
                transfer_fee: transfer.transfer_fee,
                from_club: from.map(|c| c.name.clone()),
                to_club: to.map(|c| c.name.clone()),
                from_league: from.map(|c| c.league.clone()),
                to_league: to.map(|c| c.league.clone()),
                date: transfer.date,
                contract_years: transfer.contract_years,
            }
        })
        .collect()
}

/// Build the transfers report
pub async fn transfer_report<C: ConnectionTrait>(
    db: &C,
) -> Result<TransferReport, AnalyticsError> {
    debug!("Building transfer report");

    let transfers = scan_transfers(db).await?;
    let players = scan_players(db).await?;
    let clubs = scan_clubs(db).await?;

    let player_index = PlayerIndex::new(&players);
    let club_index = ClubIndex::new(&clubs);

    Ok(TransferReport {
        transfers: transfer_details(&transfers, &player_index, &club_index),
        transfer_analytics: position_market(&transfers, &player_index),
        expensive_transfers: expensive_transfers(&transfers, &player_index, &club_index),
    })
}
