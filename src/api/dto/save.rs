//! DTOs for the save endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::response::Status;

/// Request to create a short alias for a URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SaveRequest {
    /// The destination URL (required, must parse as a URL).
    ///
    /// `null` decodes as empty so it reports as a missing field.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, code = "required"), url(code = "url"))]
    pub url: String,

    /// Optional caller-chosen alias. Empty or missing means "generate one".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Returns the requested alias, treating an empty string as absent.
    pub fn requested_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Response carrying the alias the URL was stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub status: Status,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: Status::Ok,
            alias,
        }
    }
}
