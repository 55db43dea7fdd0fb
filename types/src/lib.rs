//! Shared types for the Hypixel API client.
//!
//! Nothing in this crate performs I/O: identifier validation, the game type catalogue, the
//! records the API returns and the experience to level math.

pub mod api;
pub mod game;
pub mod identifier;
pub mod leveling;

pub use game::{GameType, UnknownGameType};
pub use identifier::{
    is_display_name, is_identifier, json_is_display_name, json_is_identifier, Identifier,
    InvalidIdentifier,
};
pub use leveling::{level_for_experience, LevelCurve};
