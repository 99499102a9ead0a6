//! Club entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clubs")]
pub struct Model {
    /// Storage row id, never used as a join key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Application key referenced by players, matches, transfers and staff
    #[sea_orm(unique)]
    pub club_id: String,

    pub name: String,

    /// Year the club was founded
    pub founded: i32,

    pub stadium: String,
    pub capacity: i32,
    pub manager: String,

    /// Budget in the club's reporting currency
    pub budget: i64,

    pub league: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
