//! Football Hub analytics query layer
//!
//! Read-only reports over the five Football Hub collections. Every report
//! follows the same shape: a small fixed number of fetches from the store,
//! then explicit joins on string keys, derived fields, grouping and sorting
//! in memory.
//!
//! - [`matches`]: filtered match list plus league-wide match statistics
//! - [`players`]: position, nationality, performer and league summaries
//! - [`transfers`]: transfer list plus market analytics
//! - [`search`]: player/club search with market-value side analytics
//! - [`overview`]: collection counts
//!
//! Joins are always optional: a key that resolves to nothing produces an
//! absent sub-object, never an error.

mod aggregate;
pub mod error;
pub mod index;
pub mod keys;
pub mod matches;
pub mod overview;
pub mod players;
pub mod search;
pub mod transfers;
pub mod views;

#[cfg(test)]
mod fixtures;

pub use error::AnalyticsError;
pub use keys::{ClubId, PlayerId};
pub use matches::{match_report, MatchFilter, MatchQuery, MatchReport};
pub use overview::{overview_report, Overview};
pub use players::{player_report, PlayerReport};
pub use search::{search_report, SearchKind, SearchQuery, SearchReport};
pub use transfers::{transfer_report, TransferReport};
