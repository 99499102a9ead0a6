use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use football_hub_analytics::{
    match_report, overview_report, player_report, search_report, transfer_report, MatchQuery,
    MatchReport, Overview, PlayerReport, SearchQuery, SearchReport, TransferReport,
};
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

/// Match list with league-wide match statistics
///
/// Filters narrow the `matches` list only; the statistics, top scoring
/// matches and attendance sections always cover every match.
#[utoipa::path(
    get,
    path = "/api/matches",
    params(
        ("date" = Option<String>, Query, description = "Calendar day (YYYY-MM-DD)"),
        ("club" = Option<String>, Query, description = "Club ID playing home or away"),
        ("minScore" = Option<String>, Query, description = "Minimum home score"),
        ("maxScore" = Option<String>, Query, description = "Maximum away score")
    ),
    responses(
        (status = 200, description = "Match report", body = MatchReport),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "matches"
)]
pub async fn matches(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchReport>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Match report requested: {:?}", query);

    let report = match_report(&state.db, &query.parse())
        .await
        .map_err(ApiError::Matches)?;

    Ok(Json(report))
}

/// Position, nationality, top performer and league summaries
#[utoipa::path(
    get,
    path = "/api/player-stats",
    responses(
        (status = 200, description = "Player statistics report", body = PlayerReport),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "players"
)]
pub async fn player_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlayerReport>, (StatusCode, Json<ErrorResponse>)> {
    let report = player_report(&state.db)
        .await
        .map_err(ApiError::PlayerStats)?;

    Ok(Json(report))
}

/// Transfer list with market analytics
#[utoipa::path(
    get,
    path = "/api/transfers",
    responses(
        (status = 200, description = "Transfer report", body = TransferReport),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "transfers"
)]
pub async fn transfers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TransferReport>, (StatusCode, Json<ErrorResponse>)> {
    let report = transfer_report(&state.db)
        .await
        .map_err(ApiError::Transfers)?;

    Ok(Json(report))
}

/// Search players or clubs by name
#[utoipa::path(
    get,
    path = "/api/search",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive name fragment"),
        ("type" = Option<String>, Query, description = "`player` (default) or `club`")
    ),
    responses(
        (status = 200, description = "Search results with market analytics", body = SearchReport),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "search"
)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchReport>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Search requested: {:?}", query);

    let report = search_report(&state.db, &query)
        .await
        .map_err(ApiError::Search)?;

    Ok(Json(report))
}

/// Record counts per collection
#[utoipa::path(
    get,
    path = "/api/overview",
    responses(
        (status = 200, description = "Collection counts", body = Overview),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "system"
)]
pub async fn overview(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Overview>, (StatusCode, Json<ErrorResponse>)> {
    let counts = overview_report(&state.db)
        .await
        .map_err(ApiError::Overview)?;

    Ok(Json(counts))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
