//! Database entities

pub mod club;
pub mod football_match;
pub mod player;
pub mod staff;
pub mod transfer;

pub use club::Entity as Club;
pub use football_match::Entity as FootballMatch;
pub use player::Entity as Player;
pub use staff::Entity as Staff;
pub use transfer::Entity as Transfer;

pub mod prelude {
    pub use super::club::Entity as Club;
    pub use super::football_match::Entity as FootballMatch;
    pub use super::player::Entity as Player;
    pub use super::staff::Entity as Staff;
    pub use super::transfer::Entity as Transfer;
}
