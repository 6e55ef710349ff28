//! Feed collection types for categorized content listings.

use crate::shows::ShowEntry;
use serde::{Deserialize, Serialize};

/// Ordering and display priority for a feed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedCategory {
    /// New releases or recently added content.
    New,
    /// Popular or trending content.
    Hot,
    /// Personalized recommendations.
    Recommended,
    /// All movies in the library.
    Movies,
    /// All series in the library.
    Series,
}

/// A named collection of show entries, typically one row of a content feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedCollection {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FeedCategory>,
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub shows: Vec<ShowEntry>,
}
