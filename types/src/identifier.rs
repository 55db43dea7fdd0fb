//! Player and credential identifiers.
//!
//! The service names players and API keys with the same 128-bit hex token, written either
//! as 32 bare hex digits or in the hyphenated 8-4-4-4-12 grouping. Display names are the
//! short, user-chosen handles that have to be resolved to an identifier first.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of an identifier written without hyphens.
pub const IDENTIFIER_LENGTH: usize = 32;

/// Length of an identifier written in the hyphenated grouping.
pub const HYPHENATED_IDENTIFIER_LENGTH: usize = 36;

/// Longest display name accepted by the identity service.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 16;

/// Hex digits in each group of the hyphenated form.
const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Returns true if `value` is a 32 or 36 character lowercase hex identifier.
///
/// Hyphens may only appear between the 8-4-4-4-12 groups. Because the length must be
/// exactly 32 or 36, a valid value either has no hyphens or all four of them.
pub fn is_identifier(value: &str) -> bool {
    let len = value.len();
    if len != IDENTIFIER_LENGTH && len != HYPHENATED_IDENTIFIER_LENGTH {
        return false;
    }

    let mut bytes = value.as_bytes();
    for (index, group) in GROUPS.iter().enumerate() {
        if index > 0 {
            if let Some(rest) = bytes.strip_prefix(b"-") {
                bytes = rest;
            }
        }
        if bytes.len() < *group {
            return false;
        }
        let (digits, rest) = bytes.split_at(*group);
        if !digits.iter().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return false;
        }
        bytes = rest;
    }
    bytes.is_empty()
}

/// Returns true if `value` is 1 to 16 word characters (letters, digits or `_`).
///
/// Letters follow the Unicode `Alphabetic` property, so vowel signs and other marks that
/// carry it are accepted along with the letters they attach to.
pub fn is_display_name(value: &str) -> bool {
    let mut count = 0;
    for c in value.chars() {
        if !(c.is_alphanumeric() || c == '_') {
            return false;
        }
        count += 1;
    }
    (1..=MAX_DISPLAY_NAME_LENGTH).contains(&count)
}

/// Untyped form of [`is_identifier`]: any non-string JSON value is rejected.
pub fn json_is_identifier(value: &Value) -> bool {
    value.as_str().is_some_and(is_identifier)
}

/// Untyped form of [`is_display_name`]: any non-string JSON value is rejected.
pub fn json_is_display_name(value: &Value) -> bool {
    value.as_str().is_some_and(is_display_name)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier: {0:?}")]
pub struct InvalidIdentifier(pub String);

/// A validated player or key identifier.
///
/// The spelling given (hyphenated or not) is kept, since the service accepts both.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn parse(value: &str) -> Option<Self> {
        is_identifier(value).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 32 digit form, with any hyphens removed.
    pub fn simple(&self) -> String {
        self.0.replace('-', "")
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Identifier {
    type Err = InvalidIdentifier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| InvalidIdentifier(value.to_string()))
    }
}

impl TryFrom<String> for Identifier {
    type Error = InvalidIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_identifier(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidIdentifier(value))
        }
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Identifier::try_from(value).map_err(serde::de::Error::custom)
    }
}
