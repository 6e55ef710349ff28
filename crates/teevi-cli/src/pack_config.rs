//! Pack configuration loaded from `teevi.toml`.
//!
//! The library pipeline takes its [`ExtensionConfig`] in-process; this
//! module is the CLI's way of producing one, from a TOML file kept next to
//! the extension's sources:
//!
//! ```toml
//! display_name = "My Source"
//! capabilities = ["metadata", "video"]
//!
//! [[inputs]]
//! id = "domain"
//! name = "Domain"
//! required = true
//! ```

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use teevi_manifest::ExtensionConfig;

/// Load and validate the pack configuration at `path`.
pub fn load(path: &Path) -> Result<ExtensionConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read pack configuration {}", path.display()))?;

    let config: ExtensionConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse pack configuration {}", path.display()))?;

    if config.capabilities.is_empty() {
        bail!(
            "pack configuration {} must declare at least one capability",
            path.display()
        );
    }

    Ok(config)
}
