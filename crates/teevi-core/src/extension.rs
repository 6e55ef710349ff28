//! Capability contracts implemented by extensions.
//!
//! An extension declares the capability tags it implements in its manifest;
//! the host dispatches on those tags through [`Extension`] rather than by
//! probing the loaded module for method shapes.

use crate::capability::Capability;
use crate::feed::FeedCollection;
use crate::live::{LiveChannel, LiveProgram};
use crate::shows::{MediaItem, Show, ShowEntry, ShowEpisode};
use crate::video::VideoAsset;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced by a capability implementation.
#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("no such item: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Show search and detail lookup. The base contract every content source
/// implements; the video and feed contracts extend it.
pub trait MetadataExtension {
    /// Search for shows matching a free-text query.
    fn fetch_shows_by_query(&self, query: &str) -> Result<Vec<ShowEntry>, ExtensionError>;

    /// Fetch detailed information for a single show.
    fn fetch_show(&self, show_id: &str) -> Result<Show, ExtensionError>;

    /// Fetch the episodes of a show, optionally limited to one season.
    fn fetch_episodes(
        &self,
        show_id: &str,
        season: Option<u32>,
    ) -> Result<Vec<ShowEpisode>, ExtensionError>;
}

/// Media item and video asset resolution on top of metadata lookup.
pub trait VideoExtension: MetadataExtension {
    /// Fetch the playable media items of a show (the movie itself, or the
    /// episodes of a season).
    fn fetch_media_items(
        &self,
        show_id: &str,
        season: Option<u32>,
    ) -> Result<Vec<MediaItem>, ExtensionError>;

    /// Resolve the video assets for a media item.
    fn fetch_video_assets(&self, media_id: &str) -> Result<Vec<VideoAsset>, ExtensionError>;
}

/// Curated feed collections on top of metadata lookup.
pub trait FeedExtension: MetadataExtension {
    /// Fetch the categorized feed collections shown on the source's landing
    /// surface.
    fn fetch_feed_collections(&self) -> Result<Vec<FeedCollection>, ExtensionError>;

    /// Fetch the shows featured in the spotlight rotation.
    fn fetch_spotlight_shows(&self) -> Result<Vec<Show>, ExtensionError>;

    /// Legacy surface kept for hosts built against an older SDK generation.
    /// New implementations should provide [`FeedExtension::fetch_spotlight_shows`]
    /// and leave this default in place.
    fn fetch_trending_shows(&self) -> Result<Vec<Show>, ExtensionError> {
        self.fetch_spotlight_shows()
    }
}

/// Live channels and program guides. Standalone; does not require the
/// metadata contract.
pub trait LiveExtension {
    /// Fetch the available live channels and events.
    fn fetch_live_channels(&self) -> Result<Vec<LiveChannel>, ExtensionError>;

    /// Fetch all programs within an optional UTC time range.
    fn fetch_channel_programs(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<LiveProgram>, ExtensionError>;

    /// Resolve the video asset for a channel, or `None` when it is not
    /// currently live.
    fn fetch_live_video_asset(
        &self,
        channel_id: &str,
    ) -> Result<Option<VideoAsset>, ExtensionError>;
}

/// A loaded extension, exposing each capability surface it declared.
///
/// Accessors return `None` for capabilities the extension does not
/// implement; the host checks [`Extension::capabilities`] against the
/// manifest and dispatches accordingly.
pub trait Extension {
    /// The capability tags this extension declares.
    fn capabilities(&self) -> &[Capability];

    fn metadata(&self) -> Option<&dyn MetadataExtension> {
        None
    }

    fn video(&self) -> Option<&dyn VideoExtension> {
        None
    }

    fn feed(&self) -> Option<&dyn FeedExtension> {
        None
    }

    fn live(&self) -> Option<&dyn LiveExtension> {
        None
    }
}
