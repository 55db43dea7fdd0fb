use crate::client::with_segments;
use crate::{Client, Error, Identifier, Result};
use hypixel_types::api::ProfileResponse;
use reqwest::StatusCode;
use tracing::{debug, warn};

impl Client {
    /// Looks up the identifier behind a display name with the identity service.
    ///
    /// The name is sent as given; no format check happens before the request.
    pub async fn resolve_identifier(&self, display_name: &str) -> Result<Identifier> {
        let url = with_segments(
            &self.identity_url,
            &["users", "profiles", "minecraft", display_name],
        );
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        // The service answers an unknown name with an empty 204, newer deployments with 404.
        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => {
                debug!(display_name, "display name not found");
                Err(Error::UnknownDisplayName(display_name.to_string()))
            }
            status if status.is_success() => {
                let bytes = response.bytes().await.map_err(reqwest::Error::without_url)?;
                let profile: ProfileResponse = serde_json::from_slice(&bytes)?;
                debug!(display_name, id = %profile.id, "resolved display name");
                Ok(profile.id)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                warn!(display_name, %status, "identity lookup failed");
                Err(Error::FailedWithBody { status, body })
            }
        }
    }
}
