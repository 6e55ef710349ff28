//! Live channel and program guide types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a live entry is a running channel or a scheduled one-off event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveContentKind {
    Channel,
    Event,
}

/// A live TV channel or event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveChannel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LiveContentKind,
    #[serde(rename = "logoURL", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Category such as "Sports", "News", or "Entertainment".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Channel language as an ISO 639-1 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// True when the channel is only available in certain regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geoblocked: Option<bool>,
}

/// A single program in a channel's guide. Start and end are UTC instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveProgram {
    pub id: String,
    pub channel_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
