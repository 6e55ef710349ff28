//! Core records exchanged by the pipeline: the author's package descriptor,
//! the in-process extension configuration, and the synthesized manifest.

use serde::{Deserialize, Serialize};
use teevi_core::Capability;

/// Conventional filename of the compiled entry chunk inside the bundle.
pub const ENTRY_FILE_NAME: &str = "main.js";

/// Filename the manifest is published under in the output directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Conventional path of the author's package descriptor.
pub const DESCRIPTOR_FILE_NAME: &str = "package.json";

/// Default source entry point compiled by the bundler.
pub const DEFAULT_ENTRY_POINT: &str = "src/index.ts";

/// Default directory searched for side assets such as the icon.
pub const DEFAULT_ASSETS_DIR: &str = "public";

/// Default icon resource filename.
pub const DEFAULT_ICON_RESOURCE: &str = "icon.png";

/// Fallback manifest description when neither config nor descriptor set one.
pub const DEFAULT_DESCRIPTION: &str = "Third-party extension for Teevi";

/// Fallback manifest author when the descriptor sets none.
pub const DEFAULT_AUTHOR: &str = "Unknown";

// =============================================================================
// PACKAGE DESCRIPTOR - author-owned, read once per build
// =============================================================================

/// The extension author's package metadata, validated against a
/// [`DescriptorPolicy`](crate::descriptor::DescriptorPolicy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Stable identifier of the extension.
    pub name: String,
    /// Free-form version string, typically semver-like.
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Display name, required by the combined-version SDK generation.
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Monotonic release counter, required by the current SDK generation.
    #[serde(rename = "versionCode", skip_serializing_if = "Option::is_none")]
    pub version_code: Option<u64>,
    /// Toolkit version split out of a combined `version` field, when the
    /// selected policy shapes versions that way. Never serialized back.
    #[serde(skip)]
    pub toolkit_version: Option<String>,
}

// =============================================================================
// EXTENSION CONFIG - author-declared, supplied in-process
// =============================================================================

/// One configuration input an extension asks its users to fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionInput {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

/// Author-declared packaging configuration, passed into the pipeline at
/// construction time. Only `display_name` and `capabilities` are mandatory;
/// everything else falls back to a conventional default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtensionConfig {
    pub display_name: String,
    /// Overrides the descriptor's description in the manifest.
    #[serde(default)]
    pub description: Option<String>,
    /// Source entry point handed to the bundler. Default `src/index.ts`.
    #[serde(default)]
    pub entry: Option<String>,
    /// Whether the bundler minifies the output. Default true.
    #[serde(default)]
    pub minify: Option<bool>,
    /// Directory searched for side assets. Default `public`.
    #[serde(default)]
    pub assets_dir: Option<String>,
    /// Icon filename under the assets directory. Default `icon.png`.
    #[serde(default)]
    pub icon_resource_name: Option<String>,
    pub capabilities: Vec<Capability>,
    #[serde(default)]
    pub inputs: Vec<ExtensionInput>,
    #[serde(default)]
    pub note: Option<String>,
}

impl ExtensionConfig {
    /// A minimal configuration with every optional left at its default.
    pub fn new(display_name: impl Into<String>, capabilities: Vec<Capability>) -> Self {
        ExtensionConfig {
            display_name: display_name.into(),
            description: None,
            entry: None,
            minify: None,
            assets_dir: None,
            icon_resource_name: None,
            capabilities,
            inputs: Vec::new(),
            note: None,
        }
    }

    pub fn entry_point(&self) -> &str {
        self.entry.as_deref().unwrap_or(DEFAULT_ENTRY_POINT)
    }

    pub fn minify(&self) -> bool {
        self.minify.unwrap_or(true)
    }

    pub fn assets_dir(&self) -> &str {
        self.assets_dir.as_deref().unwrap_or(DEFAULT_ASSETS_DIR)
    }

    pub fn icon_resource_name(&self) -> &str {
        self.icon_resource_name
            .as_deref()
            .unwrap_or(DEFAULT_ICON_RESOURCE)
    }
}

// =============================================================================
// MANIFEST - the pipeline's sole output
// =============================================================================

/// The self-describing record published alongside a packaged extension.
///
/// Field order matters only for diff-friendliness of the emitted JSON;
/// consumers key by name. `capabilities` never contains duplicates, and
/// `hash` is always present: a build without a hashable entry chunk fails
/// the pipeline instead of producing a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Descriptor `name`, the extension's stable identifier.
    pub id: String,
    /// Human-readable display name from the extension configuration.
    pub name: String,
    /// Descriptor `version`, echoed as-is.
    pub version: String,
    pub description: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Lowercase hex SHA-256 of the entry chunk's bytes.
    pub hash: String,
    pub capabilities: Vec<Capability>,
    pub icon_resource_name: String,
    #[serde(default)]
    pub inputs: Vec<ExtensionInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Version of the packaging toolkit, not of the extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<String>,
}
