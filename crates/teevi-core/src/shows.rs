//! Show, episode, and media item types returned by metadata capabilities.

use serde::{Deserialize, Serialize};

/// Whether a show is a one-off movie or an episodic series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowKind {
    Movie,
    Series,
}

/// A lightweight show entry used in search results, recommendations, and
/// feed listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowEntry {
    pub kind: ShowKind,
    pub id: String,
    pub title: String,
    #[serde(rename = "posterURL", skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

/// Detailed information about a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub kind: ShowKind,
    pub id: String,
    pub title: String,
    #[serde(rename = "posterURL", skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(rename = "backdropURL", skip_serializing_if = "Option::is_none")]
    pub backdrop_url: Option<String>,
    pub overview: String,
    /// Release date in ISO format (`YYYY-MM-DD`).
    pub release_date: String,
    /// Duration in seconds.
    pub duration: u64,
    pub genres: Vec<String>,
    /// Season numbers, present for series only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_numbers: Option<Vec<u32>>,
}

/// An episode of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowEpisode {
    pub id: String,
    pub number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "thumbnailURL", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<u64>,
}

/// An individual playable media item: a movie, or one episode of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
    Movie {
        id: String,
    },
    #[serde(rename_all = "camelCase")]
    Episode {
        id: String,
        number: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(rename = "thumbnailURL", skip_serializing_if = "Option::is_none")]
        thumbnail_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        overview: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_in_seconds: Option<u64>,
    },
}
