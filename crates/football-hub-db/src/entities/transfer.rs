//! Transfer entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transfers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub transfer_id: String,

    pub player_id: String,
    pub from_club_id: String,
    pub to_club_id: String,

    /// Zero means a free transfer
    pub transfer_fee: i64,

    pub date: ChronoDateTimeUtc,
    pub contract_years: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
