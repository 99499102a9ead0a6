//! Report failures as HTTP responses

use axum::{http::StatusCode, Json};
use football_hub_analytics::AnalyticsError;
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

/// A report that could not be built. The store error is logged and never
/// sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch matches")]
    Matches(#[source] AnalyticsError),

    #[error("Failed to fetch player statistics")]
    PlayerStats(#[source] AnalyticsError),

    #[error("Failed to fetch transfers")]
    Transfers(#[source] AnalyticsError),

    #[error("Failed to perform search")]
    Search(#[source] AnalyticsError),

    #[error("Failed to fetch overview")]
    Overview(#[source] AnalyticsError),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Matches(_) => "MATCHES_UNAVAILABLE",
            ApiError::PlayerStats(_) => "PLAYER_STATS_UNAVAILABLE",
            ApiError::Transfers(_) => "TRANSFERS_UNAVAILABLE",
            ApiError::Search(_) => "SEARCH_UNAVAILABLE",
            ApiError::Overview(_) => "OVERVIEW_UNAVAILABLE",
        }
    }

    fn source_error(&self) -> &AnalyticsError {
        match self {
            ApiError::Matches(e)
            | ApiError::PlayerStats(e)
            | ApiError::Transfers(e)
            | ApiError::Search(e)
            | ApiError::Overview(e) => e,
        }
    }
}

impl From<ApiError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ApiError) -> Self {
        error!("{} ({}): {}", err, err.code(), err.source_error());

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: err.to_string(),
                code: Some(err.code().to_string()),
            }),
        )
    }
}
