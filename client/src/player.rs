use crate::{Client, Error, GameType, Guild, Identifier, Result};
use hypixel_types::{
    api::{PlayerRecord, PlayerResponse},
    leveling,
};
use serde_json::{Map, Value};
use tracing::debug;

/// Key of a player's Bed Wars experience inside `stats.Bedwars`.
const BEDWARS_EXPERIENCE: &str = "Experience";

/// Snapshot of a player document.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    uuid: Identifier,
    record: PlayerRecord,
}

impl Player {
    pub fn new(uuid: Identifier, record: PlayerRecord) -> Self {
        Self { uuid, record }
    }

    pub fn uuid(&self) -> &Identifier {
        &self.uuid
    }

    pub fn display_name(&self) -> Option<&str> {
        self.record.display_name.as_deref()
    }

    pub fn achievements(&self) -> Option<&Map<String, Value>> {
        self.record.achievements.as_ref()
    }

    /// All per-game statistics, keyed by database name.
    pub fn stats(&self) -> Option<&Map<String, Value>> {
        self.record.stats.as_ref()
    }

    pub fn stats_for(&self, game: GameType) -> Option<&Value> {
        self.stats()?.get(game.database_name())
    }

    pub fn network_experience(&self) -> Option<f64> {
        self.record.network_exp
    }

    pub fn network_level(&self) -> Option<u64> {
        self.network_experience().map(leveling::network_level)
    }

    pub fn bedwars_experience(&self) -> Option<f64> {
        self.stats_for(GameType::Bedwars)?
            .get(BEDWARS_EXPERIENCE)?
            .as_f64()
    }

    pub fn bedwars_level(&self) -> Option<u64> {
        self.bedwars_experience().map(leveling::bedwars_level)
    }

    pub fn record(&self) -> &PlayerRecord {
        &self.record
    }

    pub fn into_record(self) -> PlayerRecord {
        self.record
    }
}

impl Client {
    /// Fetches a player by identifier or display name.
    ///
    /// Anything that is not an identifier is treated as a display name and resolved first.
    pub async fn player(&self, player: &str) -> Result<Player> {
        let uuid = match Identifier::parse(player) {
            Some(uuid) => uuid,
            None => self.resolve_identifier(player).await?,
        };
        self.player_by_id(&uuid).await
    }

    pub async fn player_by_id(&self, uuid: &Identifier) -> Result<Player> {
        let response: PlayerResponse = self.get_json("player", &[("uuid", uuid.as_str())]).await?;
        let record = response
            .player
            .ok_or_else(|| Error::UnknownPlayer(uuid.to_string()))?;
        debug!(%uuid, name = ?record.display_name, "loaded player");
        Ok(Player::new(uuid.clone(), record))
    }

    pub async fn friends(&self, uuid: &Identifier) -> Result<Value> {
        self.get_field("friends", &[("uuid", uuid.as_str())], "records")
            .await
    }

    /// Online status and, if online, the current game.
    pub async fn status(&self, uuid: &Identifier) -> Result<Value> {
        self.get_field("status", &[("uuid", uuid.as_str())], "session")
            .await
    }

    /// Games played in the last three days, at most 100.
    pub async fn recent_games(&self, uuid: &Identifier) -> Result<Value> {
        self.get_field("recentGames", &[("uuid", uuid.as_str())], "games")
            .await
    }

    /// The player's open SkyBlock auctions.
    pub async fn player_auctions(&self, uuid: &Identifier) -> Result<Value> {
        self.get_field("skyblock/auction", &[("uuid", uuid.as_str())], "auctions")
            .await
    }

    pub async fn skyblock_profiles(&self, uuid: &Identifier) -> Result<Value> {
        self.get_field("skyblock/profiles", &[("uuid", uuid.as_str())], "profiles")
            .await
    }

    /// The guild the player belongs to.
    pub async fn player_guild(&self, uuid: &Identifier) -> Result<Guild> {
        let guild_id = self.find_guild("byUuid", uuid.as_str()).await?;
        self.guild_by_id(&guild_id).await
    }
}
