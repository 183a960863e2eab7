//! Shared records for advertiser programs and generated tracking links.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// An advertiser program from the remote directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertiser {
    /// Program identifier, feeds the `progid` parameter
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Human-readable advertiser name
    pub name: String,
}

/// The feed is not strict about id types; accept both `"123"` and `123`.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// One generated tracking link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedLink {
    /// Display name from a `Name | URL` line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Original destination URL
    pub url: String,
    /// Wrapped tracking URL
    pub tracked: String,
}

impl TrackedLink {
    /// Clipboard form: `<name> | <tracked>` when a name is present,
    /// `<tracked>` alone otherwise
    pub fn clipboard_line(&self) -> String {
        match &self.name {
            Some(name) => format!("{} | {}", name, self.tracked),
            None => self.tracked.clone(),
        }
    }
}

/// Recoverable conditions surfaced to the shell; none is fatal and all
/// leave existing state untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Condition {
    /// Advertiser or partner identifier absent or blank
    #[error("select an advertiser and a partner id first")]
    MissingSelection,
    /// No source text or URL list supplied
    #[error("no source text supplied")]
    NoContent,
    /// Startup fetch failed; the directory stays empty for the session
    #[error("could not load the advertiser directory: {0}")]
    DirectoryLoadFailure(String),
    /// Export requested before any generation happened
    #[error("nothing generated to copy")]
    NothingToCopy,
}
