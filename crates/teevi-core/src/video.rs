//! Video asset types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A playable video source with optional request headers (e.g. referer or
/// user-agent requirements imposed by the upstream host).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoAsset {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl VideoAsset {
    /// An asset playable without extra request headers.
    pub fn new(url: impl Into<String>) -> Self {
        VideoAsset {
            url: url.into(),
            headers: None,
        }
    }
}
