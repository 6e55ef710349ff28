//! Manifest serialization and side-asset publication.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::ManifestError;
use crate::types::{Manifest, MANIFEST_FILE_NAME};

/// Serialize `manifest` into `output_dir/manifest.json` and copy the icon
/// resource alongside it when one exists under `assets_dir`.
///
/// The output directory tree is created as needed and an existing manifest
/// is overwritten. A missing icon is not an error: the manifest is valid
/// without one, so the copy is silently skipped. This is the pipeline's
/// only mutating step and runs last, so a failed run never leaves a
/// partially updated output directory behind.
pub fn publish(
    manifest: &Manifest,
    output_dir: Option<&Path>,
    assets_dir: &Path,
    icon_resource_name: &str,
) -> Result<(), ManifestError> {
    let output_dir = output_dir.ok_or(ManifestError::OutputDirectoryUnspecified)?;

    fs::create_dir_all(output_dir).map_err(|source| ManifestError::OutputWrite {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let json = serde_json::to_string_pretty(manifest)?;
    let manifest_path = output_dir.join(MANIFEST_FILE_NAME);
    fs::write(&manifest_path, json).map_err(|source| ManifestError::OutputWrite {
        path: manifest_path.clone(),
        source,
    })?;
    info!("manifest written to {}", manifest_path.display());

    let icon_source = assets_dir.join(icon_resource_name);
    if icon_source.exists() {
        let icon_dest = output_dir.join(icon_resource_name);
        fs::copy(&icon_source, &icon_dest).map_err(|source| ManifestError::OutputWrite {
            path: icon_dest.clone(),
            source,
        })?;
        info!("icon resource copied to {}", icon_dest.display());
    } else {
        debug!("no icon resource at {}, skipping", icon_source.display());
    }

    Ok(())
}
