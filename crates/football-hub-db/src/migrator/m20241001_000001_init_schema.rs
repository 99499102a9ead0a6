//! Initial schema: clubs, players, matches, transfers, staff
//!
//! Cross-table references are plain text keys without foreign key
//! constraints; each join key column gets its own index instead.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // 1. clubs
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(pk_auto(Club::Id))
                    .col(string_len(Club::ClubId, 64).unique_key())
                    .col(string_len(Club::Name, 255))
                    .col(integer(Club::Founded))
                    .col(string_len(Club::Stadium, 255))
                    .col(integer(Club::Capacity))
                    .col(string_len(Club::Manager, 255))
                    .col(big_integer(Club::Budget))
                    .col(string_len(Club::League, 128))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_clubs_league")
                    .table(Club::Table)
                    .col(Club::League)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 2. players
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_len(Player::PlayerId, 64).unique_key())
                    .col(string_len(Player::Name, 255))
                    .col(integer(Player::Age))
                    .col(string_len(Player::Position, 64))
                    .col(string_len(Player::Nationality, 128))
                    .col(integer(Player::JerseyNumber))
                    .col(big_integer(Player::Salary))
                    .col(integer(Player::Goals))
                    .col(integer(Player::Assists))
                    .col(integer(Player::MatchesPlayed))
                    .col(string_len(Player::ClubId, 64))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_players_club_id")
                    .table(Player::Table)
                    .col(Player::ClubId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_players_name")
                    .table(Player::Table)
                    .col(Player::Name)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 3. matches
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(FootballMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(FootballMatch::Id))
                    .col(string_len(FootballMatch::MatchId, 64).unique_key())
                    .col(string_len(FootballMatch::HomeClubId, 64))
                    .col(string_len(FootballMatch::AwayClubId, 64))
                    .col(timestamp_with_time_zone(FootballMatch::Date))
                    .col(integer(FootballMatch::HomeScore))
                    .col(integer(FootballMatch::AwayScore))
                    .col(string_len(FootballMatch::Stadium, 255))
                    .col(integer_null(FootballMatch::Attendance))
                    .col(string_len(FootballMatch::Referee, 255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_matches_home_club_id")
                    .table(FootballMatch::Table)
                    .col(FootballMatch::HomeClubId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_matches_away_club_id")
                    .table(FootballMatch::Table)
                    .col(FootballMatch::AwayClubId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_matches_date")
                    .table(FootballMatch::Table)
                    .col(FootballMatch::Date)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 4. transfers
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Transfer::Table)
                    .if_not_exists()
                    .col(pk_auto(Transfer::Id))
                    .col(string_len(Transfer::TransferId, 64).unique_key())
                    .col(string_len(Transfer::PlayerId, 64))
                    .col(string_len(Transfer::FromClubId, 64))
                    .col(string_len(Transfer::ToClubId, 64))
                    .col(big_integer(Transfer::TransferFee))
                    .col(timestamp_with_time_zone(Transfer::Date))
                    .col(integer(Transfer::ContractYears))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_transfers_player_id")
                    .table(Transfer::Table)
                    .col(Transfer::PlayerId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 5. staff
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(pk_auto(Staff::Id))
                    .col(string_len(Staff::StaffId, 64).unique_key())
                    .col(string_len(Staff::Name, 255))
                    .col(string_len(Staff::Role, 128))
                    .col(string_len(Staff::ClubId, 64))
                    .col(big_integer(Staff::Salary))
                    .col(integer(Staff::ExperienceYears))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_staff_club_id")
                    .table(Staff::Table)
                    .col(Staff::ClubId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transfer::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FootballMatch::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Club {
    #[sea_orm(iden = "clubs")]
    Table,
    Id,
    ClubId,
    Name,
    Founded,
    Stadium,
    Capacity,
    Manager,
    Budget,
    League,
}

#[derive(DeriveIden)]
enum Player {
    #[sea_orm(iden = "players")]
    Table,
    Id,
    PlayerId,
    Name,
    Age,
    Position,
    Nationality,
    JerseyNumber,
    Salary,
    Goals,
    Assists,
    MatchesPlayed,
    ClubId,
}

#[derive(DeriveIden)]
enum FootballMatch {
    #[sea_orm(iden = "matches")]
    Table,
    Id,
    MatchId,
    HomeClubId,
    AwayClubId,
    Date,
    HomeScore,
    AwayScore,
    Stadium,
    Attendance,
    Referee,
}

#[derive(DeriveIden)]
enum Transfer {
    #[sea_orm(iden = "transfers")]
    Table,
    Id,
    TransferId,
    PlayerId,
    FromClubId,
    ToClubId,
    TransferFee,
    Date,
    ContractYears,
}

#[derive(DeriveIden)]
enum Staff {
    #[sea_orm(iden = "staff")]
    Table,
    Id,
    StaffId,
    Name,
    Role,
    ClubId,
    Salary,
    ExperienceYears,
}
