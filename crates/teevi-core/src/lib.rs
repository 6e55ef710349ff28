//! Teevi Extension Contracts
//!
//! This crate declares the surface shared between extension authors and the
//! host application: the capability enumeration, the content types exchanged
//! over the wire (shows, episodes, video assets, feeds, live channels), the
//! capability contracts an extension can implement, and the runtime context
//! handed to an extension entry point.
//!
//! Everything here is declaration-only. Loading, dispatching, and packaging
//! live elsewhere.

pub mod capability;
pub mod extension;
pub mod feed;
pub mod live;
pub mod runtime;
pub mod shows;
pub mod video;

pub use capability::Capability;
pub use extension::{
    Extension, ExtensionError, FeedExtension, LiveExtension, MetadataExtension, VideoExtension,
};
pub use feed::{FeedCategory, FeedCollection};
pub use live::{LiveChannel, LiveContentKind, LiveProgram};
pub use runtime::RuntimeContext;
pub use shows::{MediaItem, Show, ShowEntry, ShowEpisode, ShowKind};
pub use video::VideoAsset;
