use crate::{Client, Error, Result};
use hypixel_types::{api::KeyResponse, is_identifier};
use serde_json::Value;
use tracing::debug;

impl Client {
    /// Checks that the configured key is well formed and accepted by the service.
    ///
    /// A malformed key fails without a request. A key the service rejects fails with the
    /// same error, whatever status the rejection came with.
    pub async fn validate_key(&self) -> Result<bool> {
        if !is_identifier(self.api_key()) {
            return Err(Error::InvalidCredentialFormat);
        }

        let reply = self.get_reply("key", &[]).await?;
        let response: KeyResponse = match reply.decode() {
            Ok(response) => response,
            Err(_) if !reply.is_success() => return Err(reply.into_failure()),
            Err(err) => return Err(err),
        };
        if !response.success {
            debug!(status = %reply.status, cause = ?response.cause, "key rejected");
            return Err(Error::InvalidCredentialFormat);
        }
        Ok(true)
    }

    /// Returns the key's `record`: owner, limits and usage counters.
    pub async fn key_info(&self) -> Result<Value> {
        self.get_field("key", &[], "record").await
    }
}
