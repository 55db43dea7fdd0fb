//! Records returned by the API.
//!
//! Only the fields the client projects are typed. Everything else in a document is kept
//! verbatim in `extra`, so nothing the service sends is lost.

use crate::Identifier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `player` document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(rename = "displayname", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Map<String, Value>>,
    #[serde(rename = "networkExp", default, skip_serializing_if = "Option::is_none")]
    pub network_exp: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `guild` document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranks: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the `key` endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct KeyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub record: Option<Value>,
    #[serde(default)]
    pub cause: Option<String>,
}

/// Response of the `player` endpoint. `player` is null for someone who never joined.
#[derive(Clone, Debug, Deserialize)]
pub struct PlayerResponse {
    #[serde(default)]
    pub player: Option<PlayerRecord>,
}

/// Response of the `findGuild` endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct FindGuildResponse {
    #[serde(default)]
    pub guild: Option<String>,
}

/// Response of the `guild` endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct GuildResponse {
    #[serde(default)]
    pub guild: Option<GuildRecord>,
    #[serde(default)]
    pub cause: Option<String>,
}

/// Response of the identity service's profile lookup.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: Identifier,
    #[serde(default)]
    pub name: Option<String>,
}
