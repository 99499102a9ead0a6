//! Match entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub match_id: String,

    pub home_club_id: String,
    pub away_club_id: String,

    /// Kick-off (UTC)
    pub date: ChronoDateTimeUtc,

    pub home_score: i32,
    pub away_score: i32,
    pub stadium: String,

    /// Not every fixture has a recorded attendance
    pub attendance: Option<i32>,

    pub referee: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
