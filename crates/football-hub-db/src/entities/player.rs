//! Player entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Application key referenced by transfers
    #[sea_orm(unique)]
    pub player_id: String,

    pub name: String,
    pub age: i32,

    /// Free-form position label ("Forward", "Midfielder", ...)
    pub position: String,

    pub nationality: String,
    pub jersey_number: i32,
    pub salary: i64,
    pub goals: i32,
    pub assists: i32,
    pub matches_played: i32,

    /// `clubs.club_id` of the current club
    pub club_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
