use crate::{Client, Error, GameType, Result};
use serde_json::Value;
use tracing::{debug, warn};

/// One page of the SkyBlock auction house.
#[derive(Clone, Debug, PartialEq)]
pub enum AuctionPage {
    Found(Value),
    /// The service refused the page, usually because it is past the last one.
    Missing { cause: String },
}

impl Client {
    /// Leaderboards of every game, keyed by API name.
    pub async fn leaderboards(&self) -> Result<Value> {
        self.get_field("leaderboards", &[], "leaderboards").await
    }

    pub async fn game_leaderboard(&self, game: GameType) -> Result<Option<Value>> {
        let mut leaderboards = self.leaderboards().await?;
        Ok(leaderboards.get_mut(game.api_name()).map(Value::take))
    }

    pub async fn boosters(&self) -> Result<Value> {
        self.get_json("boosters", &[]).await
    }

    pub async fn player_count(&self) -> Result<u64> {
        self.get_field("playerCount", &[], "playerCount")
            .await?
            .as_u64()
            .ok_or(Error::UnexpectedResponse("playerCount"))
    }

    /// Player counts of every game, keyed by API name.
    pub async fn game_counts(&self) -> Result<Value> {
        self.get_field("gameCounts", &[], "games").await
    }

    pub async fn game_count(&self, game: GameType) -> Result<Option<Value>> {
        let mut games = self.game_counts().await?;
        Ok(games.get_mut(game.api_name()).map(Value::take))
    }

    /// Ban statistics for the anti-cheat and for staff.
    pub async fn watchdog_stats(&self) -> Result<Value> {
        self.get_json("watchdogstats", &[]).await
    }

    /// A page of up to 1000 active auctions. Pages start at 0.
    ///
    /// A `cause` on an otherwise accepted request means the page does not exist.
    pub async fn skyblock_auctions(&self, page: u32) -> Result<AuctionPage> {
        let page = page.to_string();
        let reply = self
            .get_reply("skyblock/auctions", &[("page", page.as_str())])
            .await?;
        if reply.is_refused() {
            warn!(%page, status = %reply.status, "auction request refused");
            return Err(reply.into_failure());
        }
        let mut document: Value = match reply.decode() {
            Ok(document) => document,
            Err(_) if !reply.is_success() => return Err(reply.into_failure()),
            Err(err) => return Err(err),
        };

        if let Some(cause) = document
            .get_mut("cause")
            .map(Value::take)
            .filter(|cause| !cause.is_null())
        {
            let cause = match cause {
                Value::String(cause) => cause,
                other => other.to_string(),
            };
            debug!(%page, %cause, "auction page missing");
            return Ok(AuctionPage::Missing { cause });
        }
        if !reply.is_success() {
            return Err(reply.into_failure());
        }
        Ok(AuctionPage::Found(document))
    }

    /// Products with their buy and sell summaries.
    pub async fn skyblock_bazaar(&self) -> Result<Value> {
        self.get_json("skyblock/bazaar", &[]).await
    }

    pub async fn skyblock_news(&self) -> Result<Value> {
        self.get_field("skyblock/news", &[], "items").await
    }
}
