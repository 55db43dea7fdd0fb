pub mod client;
pub mod guild;
pub mod identity;
pub mod key;
pub mod player;
pub mod resources;

pub use client::{Client, ClientConfig};
pub use guild::Guild;
pub use hypixel_types::{GameType, Identifier, LevelCurve};
pub use player::Player;
pub use resources::AuctionPage;
use hypixel_types::UnknownGameType;
use thiserror::Error;

/// Error type for client operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("failed: {status}: {body}")]
    FailedWithBody {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid URL scheme: {0} (expected http or https)")]
    InvalidScheme(String),
    #[error("API key is not valid")]
    InvalidCredentialFormat,
    #[error("unknown display name: {0}")]
    UnknownDisplayName(String),
    #[error("player has no record: {0}")]
    UnknownPlayer(String),
    #[error("invalid guild identifier: {0}")]
    InvalidGuildIdentifier(String),
    #[error("invalid game mode: {0}")]
    InvalidGameMode(#[from] UnknownGameType),
    #[error("unexpected response: missing {0}")]
    UnexpectedResponse(&'static str),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
