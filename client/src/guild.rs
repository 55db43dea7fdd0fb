use crate::{Client, Error, Result};
use hypixel_types::api::{FindGuildResponse, GuildRecord, GuildResponse};
use serde_json::{Map, Value};
use tracing::{debug, warn};

const INVALID_GUILD_ID: &str = "Guild id is not valid.";

/// Snapshot of a guild document.
#[derive(Clone, Debug, PartialEq)]
pub struct Guild {
    id: String,
    record: GuildRecord,
}

impl Guild {
    pub fn new(id: impl Into<String>, record: GuildRecord) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.record.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.record.description.as_deref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.record.tag.as_deref()
    }

    pub fn members(&self) -> Option<&[Value]> {
        self.record.members.as_deref()
    }

    /// Guild achievements with their current progress.
    pub fn achievements(&self) -> Option<&Map<String, Value>> {
        self.record.achievements.as_ref()
    }

    pub fn ranks(&self) -> Option<&[Value]> {
        self.record.ranks.as_deref()
    }

    pub fn experience(&self) -> Option<f64> {
        self.record.exp
    }

    pub fn record(&self) -> &GuildRecord {
        &self.record
    }
}

impl Client {
    /// Fetches a guild by its id.
    ///
    /// A `cause` in the body, or a null guild, means the id does not name a guild. A refused
    /// request fails with the transport error whatever its body says.
    pub async fn guild_by_id(&self, guild_id: &str) -> Result<Guild> {
        let reply = self.get_reply("guild", &[("id", guild_id)]).await?;
        if reply.is_refused() {
            warn!(guild_id, status = %reply.status, "guild request refused");
            return Err(reply.into_failure());
        }
        let response: GuildResponse = match reply.decode() {
            Ok(response) => response,
            Err(_) if !reply.is_success() => return Err(reply.into_failure()),
            Err(err) => return Err(err),
        };

        if let Some(cause) = response.cause {
            debug!(guild_id, %cause, "guild lookup refused");
            return Err(Error::InvalidGuildIdentifier(cause));
        }
        if !reply.is_success() {
            return Err(reply.into_failure());
        }
        let record = response
            .guild
            .ok_or_else(|| Error::InvalidGuildIdentifier(INVALID_GUILD_ID.to_string()))?;
        Ok(Guild::new(guild_id, record))
    }

    pub async fn guild_by_name(&self, name: &str) -> Result<Guild> {
        let guild_id = self.find_guild("byName", name).await?;
        self.guild_by_id(&guild_id).await
    }

    /// Resolves a guild id through `findGuild`, keyed by `by` (`byName` or `byUuid`).
    pub(crate) async fn find_guild(&self, by: &str, value: &str) -> Result<String> {
        let response: FindGuildResponse = self.get_json("findGuild", &[(by, value)]).await?;
        response
            .guild
            .ok_or_else(|| Error::InvalidGuildIdentifier(INVALID_GUILD_ID.to_string()))
    }
}
