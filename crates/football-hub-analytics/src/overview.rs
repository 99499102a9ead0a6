//! Collection counts for the landing page

use football_hub_db::entities::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::error::AnalyticsError;

/// Number of stored records per collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Overview {
    pub clubs: u64,
    pub players: u64,
    pub matches: u64,
    pub transfers: u64,
    pub staff: u64,
}

pub async fn overview_report<C: ConnectionTrait>(db: &C) -> Result<Overview, AnalyticsError> {
    debug!("Counting collections");

    Ok(Overview {
        clubs: Club::find().count(db).await?,
        players: Player::find().count(db).await?,
        matches: FootballMatch::find().count(db).await?,
        transfers: Transfer::find().count(db).await?,
        staff: Staff::find().count(db).await?,
    })
}
