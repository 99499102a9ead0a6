//! Join indexes over fetched collections
//!
//! Each index borrows the rows it was built from and resolves a string key
//! to the referenced row. Lookups of unknown keys return `None`.

use std::collections::HashMap;

use football_hub_db::entities::{club, football_match, player, transfer};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::keys::{ClubId, PlayerId};

/// Clubs by `club_id`
pub struct ClubIndex<'a> {
    by_key: HashMap<ClubId, &'a club::Model>,
}

impl<'a> ClubIndex<'a> {
    pub fn new(clubs: &'a [club::Model]) -> Self {
        let mut by_key = HashMap::with_capacity(clubs.len());
        for club in clubs {
            by_key
                .entry(ClubId::from(club.club_id.as_str()))
                .or_insert(club);
        }
        Self { by_key }
    }

    pub fn get(&self, club_id: &str) -> Option<&'a club::Model> {
        self.by_key.get(club_id).copied()
    }
}

/// Players by `player_id`
pub struct PlayerIndex<'a> {
    by_key: HashMap<PlayerId, &'a player::Model>,
}

impl<'a> PlayerIndex<'a> {
    pub fn new(players: &'a [player::Model]) -> Self {
        let mut by_key = HashMap::with_capacity(players.len());
        for player in players {
            by_key
                .entry(PlayerId::from(player.player_id.as_str()))
                .or_insert(player);
        }
        Self { by_key }
    }

    pub fn get(&self, player_id: &str) -> Option<&'a player::Model> {
        self.by_key.get(player_id).copied()
    }
}

/// Transfer fees grouped by `player_id`
pub struct TransferLedger {
    fees: HashMap<PlayerId, Vec<i64>>,
}

impl TransferLedger {
    pub fn new(transfers: &[transfer::Model]) -> Self {
        let mut fees: HashMap<PlayerId, Vec<i64>> = HashMap::new();
        for transfer in transfers {
            fees.entry(PlayerId::from(transfer.player_id.as_str()))
                .or_default()
                .push(transfer.transfer_fee);
        }
        Self { fees }
    }

    /// Highest fee among the player's transfers, `None` without transfers.
    ///
    /// This is the player's "market value". It is the maximum fee, not the
    /// chronologically latest one.
    pub fn market_value(&self, player_id: &str) -> Option<i64> {
        self.fees
            .get(player_id)
            .and_then(|fees| fees.iter().copied().max())
    }

    pub fn has_transfers(&self, player_id: &str) -> bool {
        self.fees.get(player_id).is_some_and(|fees| !fees.is_empty())
    }
}

pub(crate) async fn scan_clubs<C: ConnectionTrait>(db: &C) -> Result<Vec<club::Model>, DbErr> {
    club::Entity::find()
        .order_by_asc(club::Column::Id)
        .all(db)
        .await
}

pub(crate) async fn scan_players<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<player::Model>, DbErr> {
    player::Entity::find()
        .order_by_asc(player::Column::Id)
        .all(db)
        .await
}

pub(crate) async fn scan_matches<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<football_match::Model>, DbErr> {
    football_match::Entity::find()
        .order_by_asc(football_match::Column::Id)
        .all(db)
        .await
}

pub(crate) async fn scan_transfers<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<transfer::Model>, DbErr> {
    transfer::Entity::find()
        .order_by_asc(transfer::Column::Id)
        .all(db)
        .await
}
