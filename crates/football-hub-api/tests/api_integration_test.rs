//! Integration tests for the report endpoints

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, Utc};
use football_hub_api::{models::*, ApiServer, ApiServerConfig};
use football_hub_db::{
    connect,
    entities::{club, football_match, player, transfer},
    migrate,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use tower::ServiceExt; // For `oneshot` method

fn day(date: &str) -> chrono::DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(15, 0, 0)
        .unwrap()
        .and_utc()
}

fn club_row(club_id: &str, name: &str, league: &str) -> club::ActiveModel {
    club::ActiveModel {
        club_id: Set(club_id.to_string()),
        name: Set(name.to_string()),
        founded: Set(1900),
        stadium: Set(format!("{} Ground", name)),
        capacity: Set(70_000),
        manager: Set("Manager".to_string()),
        budget: Set(400_000_000),
        league: Set(league.to_string()),
        ..Default::default()
    }
}

fn player_row(player_id: &str, name: &str, position: &str, goals: i32, club_id: &str) -> player::ActiveModel {
    player::ActiveModel {
        player_id: Set(player_id.to_string()),
        name: Set(name.to_string()),
        age: Set(27),
        position: Set(position.to_string()),
        nationality: Set("England".to_string()),
        jersey_number: Set(9),
        salary: Set(300_000),
        goals: Set(goals),
        assists: Set(4),
        matches_played: Set(30),
        club_id: Set(club_id.to_string()),
        ..Default::default()
    }
}

fn match_row(match_id: &str, home: &str, away: &str, date: &str, score: (i32, i32)) -> football_match::ActiveModel {
    football_match::ActiveModel {
        match_id: Set(match_id.to_string()),
        home_club_id: Set(home.to_string()),
        away_club_id: Set(away.to_string()),
        date: Set(day(date)),
        home_score: Set(score.0),
        away_score: Set(score.1),
        stadium: Set("Ground".to_string()),
        attendance: Set(Some(60_000)),
        referee: Set("Michael Oliver".to_string()),
        ..Default::default()
    }
}

/// Helper to create an in-memory database with migrations applied
async fn create_test_db() -> DatabaseConnection {
    let db = connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");
    migrate(&db).await.expect("Failed to run migrations");

    club_row("CLB001", "Manchester United", "Premier League").insert(&db).await.unwrap();
    club_row("CLB005", "Bayern Munich", "Bundesliga").insert(&db).await.unwrap();
    club_row("CLB006", "Liverpool", "Premier League").insert(&db).await.unwrap();

    player_row("PLR001", "Marcus Rashford", "Forward", 17, "CLB001").insert(&db).await.unwrap();
    player_row("PLR013", "Harry Kane", "Forward", 36, "CLB005").insert(&db).await.unwrap();
    player_row("PLR016", "Mohamed Salah", "Forward", 29, "CLB006").insert(&db).await.unwrap();

    match_row("MAT001", "CLB001", "CLB006", "2024-09-15", (3, 2)).insert(&db).await.unwrap();
    match_row("MAT006", "CLB005", "CLB001", "2024-11-15", (4, 1)).insert(&db).await.unwrap();

    transfer::ActiveModel {
        transfer_id: Set("TRF002".to_string()),
        player_id: Set("PLR013".to_string()),
        from_club_id: Set("CLB001".to_string()),
        to_club_id: Set("CLB005".to_string()),
        transfer_fee: Set(100_000_000),
        date: Set(day("2023-08-12")),
        contract_years: Set(4),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    db
}

/// Helper to create a test router
fn create_test_router(db: DatabaseConnection) -> Router {
    let config = ApiServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(), // Random port
        enable_cors: false,
    };

    ApiServer::new(config, db).build_router()
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_router(create_test_db().await);

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_matches_report_wire_format() {
    let app = create_test_router(create_test_db().await);

    let (status, body) = get_json(app, "/api/matches").await;

    assert_eq!(status, StatusCode::OK);

    let first = &body["matches"][0];
    assert_eq!(first["matchID"], "MAT006");
    assert_eq!(first["homeClubID"], "CLB005");
    assert_eq!(first["homeClub"]["clubName"], "Bayern Munich");
    assert_eq!(first["awayClub"]["clubID"], "CLB001");
    assert_eq!(first["totalGoals"], 5);
    assert_eq!(first["isHighScoring"], true);
    assert_eq!(first["homeWin"], true);

    assert_eq!(body["matchStats"]["totalMatches"], 2);
    assert_eq!(body["matchStats"]["homeWinPercentage"], 100.0);
    assert_eq!(body["topScoringMatches"].as_array().unwrap().len(), 2);
    assert!(body["attendanceAnalytics"].is_array());
}

#[tokio::test]
async fn test_matches_filters_leave_stats_alone() {
    let app = create_test_router(create_test_db().await);

    let (status, body) = get_json(app, "/api/matches?club=CLB006&minScore=3").await;

    assert_eq!(status, StatusCode::OK);

    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["matchID"], "MAT001");
    assert_eq!(body["matchStats"]["totalMatches"], 2);
}

#[tokio::test]
async fn test_matches_date_filter() {
    let app = create_test_router(create_test_db().await);

    let (_, body) = get_json(app, "/api/matches?date=2024-11-15").await;

    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["matchID"], "MAT006");
}

#[tokio::test]
async fn test_player_stats() {
    let app = create_test_router(create_test_db().await);

    let (status, body) = get_json(app, "/api/player-stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["positions"][0]["position"], "Forward");
    assert_eq!(body["positions"][0]["count"], 3);
    assert_eq!(body["topPerformers"][0]["playerID"], "PLR013");
    assert_eq!(body["topPerformers"][0]["clubName"], "Bayern Munich");
    assert_eq!(body["leagueAnalytics"][0]["league"], "Premier League");
    assert_eq!(body["leagueAnalytics"][0]["topScorer"], "Mohamed Salah");
}

#[tokio::test]
async fn test_transfers() {
    let app = create_test_router(create_test_db().await);

    let (status, body) = get_json(app, "/api/transfers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transfers"][0]["transferID"], "TRF002");
    assert_eq!(body["transfers"][0]["player"]["name"], "Harry Kane");
    assert_eq!(body["transfers"][0]["toClub"]["clubName"], "Bayern Munich");
    assert_eq!(body["transferAnalytics"][0]["totalTransfers"], 1);
    assert_eq!(body["expensiveTransfers"][0]["fromLeague"], "Premier League");
}

#[tokio::test]
async fn test_search_players_by_default() {
    let app = create_test_router(create_test_db().await);

    let (status, body) = get_json(app, "/api/search?q=KANE").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["searchType"], "player");
    assert_eq!(body["searchQuery"], "KANE");
    assert_eq!(body["resultCount"], 1);
    assert_eq!(body["results"][0]["name"], "Harry Kane");
    assert_eq!(body["results"][0]["latestTransferFee"], 100_000_000);
    assert_eq!(body["topPlayers"][0]["playerID"], "PLR013");
}

#[tokio::test]
async fn test_search_clubs() {
    let app = create_test_router(create_test_db().await);

    let (status, body) = get_json(app, "/api/search?type=club&q=pool").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["searchType"], "club");
    assert_eq!(body["results"][0]["clubName"], "Liverpool");
    assert_eq!(body["leagueStats"][0]["league"], "Premier League");
    assert_eq!(body["leagueStats"][0]["clubCount"], 2);
}

#[tokio::test]
async fn test_overview() {
    let app = create_test_router(create_test_db().await);

    let (status, body) = get_json(app, "/api/overview").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clubs"], 3);
    assert_eq!(body["players"], 3);
    assert_eq!(body["matches"], 2);
    assert_eq!(body["transfers"], 1);
    assert_eq!(body["staff"], 0);
}

#[tokio::test]
async fn test_store_failure_returns_500() {
    // No migrations: every table is missing
    let db = connect("sqlite::memory:").await.unwrap();
    let app = create_test_router(db);

    let (status, body) = get_json(app, "/api/transfers").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch transfers");
    assert_eq!(body["code"], "TRANSFERS_UNAVAILABLE");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = create_test_router(create_test_db().await);

    let (status, body) = get_json(app, "/api/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/player-stats"].is_object());
}
