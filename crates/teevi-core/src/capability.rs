//! Capability tags declared by extensions and dispatched on by the host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named contract an extension declares it implements.
///
/// The wire representation is a plain lowercase string. Tags minted by a
/// newer SDK generation than the one reading them are preserved verbatim
/// through [`Capability::Other`] instead of being rejected, so an older
/// host can still round-trip a manifest it does not fully understand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Capability {
    /// Show search and detail lookup.
    Metadata,
    /// Media item and video asset resolution.
    Video,
    /// Curated feed collections and spotlight shows.
    Feed,
    /// Live channels and program guides.
    Live,
    /// A tag this SDK generation does not recognize; passed through as-is.
    Other(String),
}

impl Capability {
    /// The wire-visible tag for this capability.
    pub fn as_str(&self) -> &str {
        match self {
            Capability::Metadata => "metadata",
            Capability::Video => "video",
            Capability::Feed => "feed",
            Capability::Live => "live",
            Capability::Other(tag) => tag,
        }
    }
}

impl From<String> for Capability {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "metadata" => Capability::Metadata,
            "video" => Capability::Video,
            "feed" => Capability::Feed,
            "live" => Capability::Live,
            _ => Capability::Other(tag),
        }
    }
}

impl From<Capability> for String {
    fn from(capability: Capability) -> Self {
        capability.as_str().to_string()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
