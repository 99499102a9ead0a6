//! Integration tests for football-hub-db
//!
//! Runs against a real SQLite in-memory database

use chrono::{TimeZone, Utc};
use football_hub_db::{
    connect,
    entities::{club, football_match, player, transfer},
    migrate,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

/// Helper to create a test database
async fn setup_test_db() -> sea_orm::DatabaseConnection {
    let db = connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    migrate(&db).await.expect("Failed to run migrations");

    db
}

fn club(club_id: &str, name: &str, league: &str) -> club::ActiveModel {
    club::ActiveModel {
        club_id: Set(club_id.to_string()),
        name: Set(name.to_string()),
        founded: Set(1900),
        stadium: Set(format!("{} Stadium", name)),
        capacity: Set(50_000),
        manager: Set("Manager".to_string()),
        budget: Set(100_000_000),
        league: Set(league.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_database_connection() {
    let db = connect("sqlite::memory:").await.expect("Failed to connect");

    let backend = db.get_database_backend();
    assert!(matches!(backend, sea_orm::DatabaseBackend::Sqlite));
}

#[tokio::test]
async fn test_migrations_run_successfully() {
    let db = connect("sqlite::memory:").await.expect("Failed to connect");

    let result = migrate(&db).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_insert_and_find_club_by_application_key() {
    let db = setup_test_db().await;

    let inserted = club("CLB001", "Manchester United", "Premier League")
        .insert(&db)
        .await
        .expect("Failed to insert club");

    assert_eq!(inserted.club_id, "CLB001");
    assert!(inserted.id > 0);

    let found = club::Entity::find()
        .filter(club::Column::ClubId.eq("CLB001"))
        .one(&db)
        .await
        .expect("Failed to query")
        .expect("Club not found");

    assert_eq!(found.name, "Manchester United");
    assert_eq!(found.league, "Premier League");
}

#[tokio::test]
async fn test_club_application_key_is_unique() {
    let db = setup_test_db().await;

    club("CLB001", "First", "League")
        .insert(&db)
        .await
        .expect("Failed to insert club");

    let duplicate = club("CLB001", "Second", "League").insert(&db).await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn test_player_references_unknown_club_without_constraint() {
    let db = setup_test_db().await;

    let player = player::ActiveModel {
        player_id: Set("PLR001".to_string()),
        name: Set("Orphan".to_string()),
        age: Set(24),
        position: Set("Forward".to_string()),
        nationality: Set("England".to_string()),
        jersey_number: Set(9),
        salary: Set(10_000),
        goals: Set(3),
        assists: Set(1),
        matches_played: Set(10),
        club_id: Set("CLB404".to_string()),
        ..Default::default()
    };

    let inserted = player.insert(&db).await.expect("Failed to insert player");
    assert_eq!(inserted.club_id, "CLB404");
}

#[tokio::test]
async fn test_match_attendance_is_optional() {
    let db = setup_test_db().await;

    let fixture = football_match::ActiveModel {
        match_id: Set("MAT001".to_string()),
        home_club_id: Set("CLB001".to_string()),
        away_club_id: Set("CLB002".to_string()),
        date: Set(Utc.with_ymd_and_hms(2024, 9, 15, 0, 0, 0).unwrap()),
        home_score: Set(3),
        away_score: Set(2),
        stadium: Set("Old Trafford".to_string()),
        attendance: Set(None),
        referee: Set("Michael Oliver".to_string()),
        ..Default::default()
    };

    let inserted = fixture.insert(&db).await.expect("Failed to insert match");
    assert_eq!(inserted.attendance, None);
    assert_eq!(
        inserted.date,
        Utc.with_ymd_and_hms(2024, 9, 15, 0, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_count_transfers_for_player() {
    let db = setup_test_db().await;

    for (transfer_id, fee) in [("TRF001", 20), ("TRF002", 0), ("TRF003", 55)] {
        transfer::ActiveModel {
            transfer_id: Set(transfer_id.to_string()),
            player_id: Set("PLR001".to_string()),
            from_club_id: Set("CLB001".to_string()),
            to_club_id: Set("CLB002".to_string()),
            transfer_fee: Set(fee),
            date: Set(Utc::now()),
            contract_years: Set(3),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("Failed to insert transfer");
    }

    let count = transfer::Entity::find()
        .filter(transfer::Column::PlayerId.eq("PLR001"))
        .count(&db)
        .await
        .expect("Failed to count");

    assert_eq!(count, 3);
}
