use crate::{Error, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Base URL of the public API.
pub const DEFAULT_API_URL: &str = "https://api.hypixel.net/";

/// Base URL of the service that maps display names to identifiers.
pub const DEFAULT_IDENTITY_URL: &str = "https://api.mojang.com/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings, fixed for the lifetime of a [`Client`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,
    pub identity_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the API.
///
/// The key is captured at construction and sent with every request. Cloning is cheap and
/// clones share the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    pub(crate) http_client: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) identity_url: Url,
    api_key: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("identity_url", &self.identity_url.as_str())
            .finish_non_exhaustive()
    }
}

/// A response read in full, whatever its status.
pub(crate) struct Reply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// True when the status refuses the request itself rather than reporting on the resource.
    pub fn is_refused(&self) -> bool {
        matches!(
            self.status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
        ) || self.status.is_server_error()
    }

    pub fn into_failure(self) -> Error {
        Error::FailedWithBody {
            status: self.status,
            body: String::from_utf8_lossy(&self.body).into_owned(),
        }
    }
}

/// Parses a base URL, requiring http(s) and a trailing slash so relative joins nest under it.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(Error::InvalidScheme(scheme.to_string())),
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Appends path segments to `base`, percent-encoding each one.
pub(crate) fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

impl Client {
    /// Creates a client for the API at `base_url` using the default identity service.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(
            api_key,
            ClientConfig {
                api_url: base_url.to_string(),
                ..ClientConfig::default()
            },
        )
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.api_url)?;
        let identity_url = parse_base_url(&config.identity_url)?;
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            identity_url,
            api_key: api_key.into(),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn identity_url(&self) -> &Url {
        &self.identity_url
    }

    /// GET `endpoint` with the key and `query` attached, reading the body regardless of status.
    ///
    /// Transport errors are stripped of their URL, which carries the key.
    pub(crate) async fn get_reply(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Reply> {
        let url = self.base_url.join(endpoint)?;
        let response = self
            .http_client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?
            .to_vec();
        debug!(endpoint, %status, len = body.len(), "api response");
        Ok(Reply { status, body })
    }

    /// GET `endpoint` and decode the body, failing on any non-success status.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let reply = self.get_reply(endpoint, query).await?;
        if !reply.is_success() {
            warn!(endpoint, status = %reply.status, "api request failed");
            return Err(reply.into_failure());
        }
        reply.decode()
    }

    /// GET `endpoint` and take one top-level `field` out of the document.
    pub(crate) async fn get_field(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        field: &'static str,
    ) -> Result<Value> {
        let mut document: Value = self.get_json(endpoint, query).await?;
        document
            .get_mut(field)
            .map(Value::take)
            .ok_or(Error::UnexpectedResponse(field))
    }
}
