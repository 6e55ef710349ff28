//! Package descriptor loading and validation.
//!
//! Which fields a descriptor must carry has changed across SDK generations:
//! the first shipped with plain `name`/`version`, a later one required a
//! `displayName` and folded the toolkit version into the `version` field,
//! and the current one requires a numeric `versionCode` with the toolkit
//! version carried separately. Rather than one reader per generation, a
//! single reader takes a [`DescriptorPolicy`] naming the required keys and
//! the version shape.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::ManifestError;
use crate::types::PackageDescriptor;

/// How the descriptor's `version` field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionShape {
    /// `version` carries the extension version alone.
    Plain,
    /// `version` carried both the extension and the toolkit version as
    /// build metadata (`1.2.0+sdk.0.3.1`); the toolkit half is split off
    /// into [`PackageDescriptor::toolkit_version`].
    CombinedWithSdk,
    /// Extension version plus a numeric `versionCode`; the toolkit version
    /// travels separately in the manifest's `sdkVersion`.
    VersionCode,
}

/// Required-field set and version shape for one SDK generation.
#[derive(Debug, Clone)]
pub struct DescriptorPolicy {
    required: Vec<&'static str>,
    version_shape: VersionShape,
}

impl DescriptorPolicy {
    /// The original contract: `name` and `version` only. This is what a
    /// plain `package.json` satisfies, and the pipeline default.
    pub fn legacy() -> Self {
        DescriptorPolicy {
            required: vec!["name", "version"],
            version_shape: VersionShape::Plain,
        }
    }

    /// The intermediate contract: additionally requires `displayName`, and
    /// splits a combined source+toolkit `version` field.
    pub fn combined() -> Self {
        DescriptorPolicy {
            required: vec!["name", "version", "displayName"],
            version_shape: VersionShape::CombinedWithSdk,
        }
    }

    /// The current contract: additionally requires `versionCode`.
    pub fn current() -> Self {
        DescriptorPolicy {
            required: vec!["name", "version", "versionCode"],
            version_shape: VersionShape::VersionCode,
        }
    }

    pub fn required_fields(&self) -> &[&'static str] {
        &self.required
    }

    pub fn version_shape(&self) -> VersionShape {
        self.version_shape
    }
}

impl Default for DescriptorPolicy {
    fn default() -> Self {
        DescriptorPolicy::legacy()
    }
}

/// Descriptor as found on disk, before required-field validation. Keeping
/// every field optional lets a missing `name` surface as a validation
/// error instead of a parse error.
#[derive(Debug, Deserialize)]
struct RawDescriptor {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    author: Option<String>,
    homepage: Option<String>,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    #[serde(rename = "versionCode")]
    version_code: Option<u64>,
}

impl RawDescriptor {
    fn has(&self, field: &str) -> bool {
        match field {
            "name" => self.name.is_some(),
            "version" => self.version.is_some(),
            "displayName" => self.display_name.is_some(),
            "versionCode" => self.version_code.is_some(),
            _ => true,
        }
    }
}

/// Read and validate the package descriptor at `path`.
///
/// Pure read; the descriptor file is never touched again for the rest of
/// the pipeline run.
pub fn read_descriptor(
    path: &Path,
    policy: &DescriptorPolicy,
) -> Result<PackageDescriptor, ManifestError> {
    debug!("reading package descriptor from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| ManifestError::MetadataRead {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: RawDescriptor =
        serde_json::from_str(&content).map_err(|source| ManifestError::MetadataParse {
            path: path.to_path_buf(),
            source,
        })?;

    for &field in policy.required_fields() {
        if !raw.has(field) {
            return Err(ManifestError::MetadataValidation {
                field: field.to_string(),
            });
        }
    }

    let full_version = raw.version.unwrap_or_default();
    let (version, toolkit_version) = shape_version(&full_version, policy.version_shape());

    Ok(PackageDescriptor {
        name: raw.name.unwrap_or_default(),
        version,
        description: raw.description,
        author: raw.author,
        homepage: raw.homepage,
        display_name: raw.display_name,
        version_code: raw.version_code,
        toolkit_version,
    })
}

fn shape_version(version: &str, shape: VersionShape) -> (String, Option<String>) {
    match shape {
        VersionShape::Plain | VersionShape::VersionCode => (version.to_string(), None),
        VersionShape::CombinedWithSdk => match version.split_once('+') {
            Some((extension, toolkit)) => {
                let toolkit = toolkit.strip_prefix("sdk.").unwrap_or(toolkit);
                (extension.to_string(), Some(toolkit.to_string()))
            }
            None => (version.to_string(), None),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::*;
    use crate::errors::ManifestError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn descriptor_file(content: &str) -> Option<NamedTempFile> {
        let mut file = NamedTempFile::new().ok()?;
        file.write_all(content.as_bytes()).ok()?;
        Some(file)
    }

    #[test]
    fn test_reads_minimal_descriptor() {
        let Some(file) = descriptor_file(r#"{"name":"my-source","version":"2.3.0"}"#) else {
            return;
        };

        let descriptor = read_descriptor(file.path(), &DescriptorPolicy::legacy());
        assert!(descriptor.is_ok_and(|d| {
            d.name == "my-source" && d.version == "2.3.0" && d.author.is_none()
        }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = read_descriptor(
            std::path::Path::new("/nonexistent/package.json"),
            &DescriptorPolicy::legacy(),
        );
        assert!(matches!(result, Err(ManifestError::MetadataRead { .. })));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let Some(file) = descriptor_file("{not json") else {
            return;
        };

        let result = read_descriptor(file.path(), &DescriptorPolicy::legacy());
        assert!(matches!(result, Err(ManifestError::MetadataParse { .. })));
    }

    #[test]
    fn test_missing_version_is_validation_error() {
        let Some(file) = descriptor_file(r#"{"name":"my-source"}"#) else {
            return;
        };

        let result = read_descriptor(file.path(), &DescriptorPolicy::legacy());
        assert!(
            matches!(result, Err(ManifestError::MetadataValidation { field }) if field == "version")
        );
    }

    #[test]
    fn test_combined_policy_requires_display_name() {
        let Some(file) = descriptor_file(r#"{"name":"x","version":"1.0.0"}"#) else {
            return;
        };

        let result = read_descriptor(file.path(), &DescriptorPolicy::combined());
        assert!(
            matches!(result, Err(ManifestError::MetadataValidation { field }) if field == "displayName")
        );
    }

    #[test]
    fn test_combined_policy_splits_toolkit_version() {
        let Some(file) = descriptor_file(
            r#"{"name":"x","version":"1.2.0+sdk.0.3.1","displayName":"X"}"#,
        ) else {
            return;
        };

        let descriptor = read_descriptor(file.path(), &DescriptorPolicy::combined());
        assert!(descriptor.is_ok_and(|d| {
            d.version == "1.2.0" && d.toolkit_version.as_deref() == Some("0.3.1")
        }));
    }

    #[test]
    fn test_current_policy_requires_version_code() {
        let Some(file) = descriptor_file(r#"{"name":"x","version":"1.0.0"}"#) else {
            return;
        };

        let result = read_descriptor(file.path(), &DescriptorPolicy::current());
        assert!(
            matches!(result, Err(ManifestError::MetadataValidation { field }) if field == "versionCode")
        );
    }
}
