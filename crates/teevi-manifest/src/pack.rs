//! One-shot packaging pipeline.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::artifact::{hash_entry_chunk, BuildArtifact};
use crate::descriptor::{read_descriptor, DescriptorPolicy};
use crate::errors::ManifestError;
use crate::publish::publish;
use crate::synthesize::synthesize;
use crate::types::{ExtensionConfig, Manifest, DESCRIPTOR_FILE_NAME, ENTRY_FILE_NAME};

/// Runs the manifest pipeline once per completed build: read the package
/// descriptor, hash the entry chunk, synthesize the manifest, publish it.
///
/// A `Packager` holds no cross-run state; each [`Packager::pack`] call
/// constructs its descriptor and manifest fresh and discards them when the
/// write completes. Publishing is the last step, so a failure anywhere
/// leaves a previously published manifest untouched.
#[derive(Debug, Clone)]
pub struct Packager {
    config: ExtensionConfig,
    descriptor_path: PathBuf,
    policy: DescriptorPolicy,
    sdk_version: Option<String>,
}

impl Packager {
    /// A packager reading `package.json` from the working directory under
    /// the default descriptor policy, with no toolkit version stamped.
    pub fn new(config: ExtensionConfig) -> Self {
        Packager {
            config,
            descriptor_path: PathBuf::from(DESCRIPTOR_FILE_NAME),
            policy: DescriptorPolicy::default(),
            sdk_version: None,
        }
    }

    pub fn with_descriptor_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.descriptor_path = path.into();
        self
    }

    pub fn with_policy(mut self, policy: DescriptorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Stamp the packaging toolkit's own version into the manifest's
    /// `sdkVersion` field.
    pub fn with_sdk_version(mut self, version: impl Into<String>) -> Self {
        self.sdk_version = Some(version.into());
        self
    }

    pub fn config(&self) -> &ExtensionConfig {
        &self.config
    }

    /// Run the pipeline over one build's output.
    ///
    /// `output_dir` is the directory the build process is writing into;
    /// `None` means the build process never supplied one, which fails with
    /// [`ManifestError::OutputDirectoryUnspecified`].
    pub fn pack(
        &self,
        artifact: &BuildArtifact,
        output_dir: Option<&Path>,
    ) -> Result<Manifest, ManifestError> {
        debug!("packing extension from {}", self.descriptor_path.display());

        let descriptor = read_descriptor(&self.descriptor_path, &self.policy)?;
        let digest = hash_entry_chunk(artifact, ENTRY_FILE_NAME)?;
        let manifest = synthesize(&descriptor, &self.config, &digest, self.sdk_version.as_deref());
        publish(
            &manifest,
            output_dir,
            Path::new(self.config.assets_dir()),
            &manifest.icon_resource_name,
        )?;

        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use crate::artifact::BuildArtifact;
    use crate::errors::ManifestError;
    use crate::pack::Packager;
    use crate::types::{ExtensionConfig, Manifest};
    use std::fs;
    use teevi_core::Capability;
    use tempfile::TempDir;

    const BUNDLE_SHA256: &str = "0a286891c11c056e1ab5bfc25bf5d6b2f5b06d38eac10944f678fd8a2e70c393";

    fn write_descriptor(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("package.json");
        let written = fs::write(
            &path,
            r#"{"name":"my-source","version":"2.3.0","author":"Jane"}"#,
        );
        assert!(written.is_ok());
        path
    }

    fn artifact() -> BuildArtifact {
        let mut artifact = BuildArtifact::new();
        artifact.insert_chunk("main.js", b"console.log(1)".to_vec());
        artifact
    }

    #[test]
    fn test_pack_end_to_end() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let descriptor_path = write_descriptor(&dir);
        let out = dir.path().join("dist");

        let packager = Packager::new(ExtensionConfig::new(
            "My Source",
            vec![Capability::Video, Capability::Video],
        ))
        .with_descriptor_path(descriptor_path)
        .with_sdk_version("0.4.2");

        let manifest = packager.pack(&artifact(), Some(&out));
        assert!(manifest.is_ok());
        let manifest = match manifest {
            Ok(m) => m,
            Err(_) => return,
        };

        assert_eq!(manifest.id, "my-source");
        assert_eq!(manifest.name, "My Source");
        assert_eq!(manifest.version, "2.3.0");
        assert_eq!(manifest.author, "Jane");
        assert_eq!(manifest.description, "Third-party extension for Teevi");
        assert_eq!(manifest.capabilities, vec![Capability::Video]);
        assert_eq!(manifest.hash, BUNDLE_SHA256);
        assert_eq!(manifest.icon_resource_name, "icon.png");
        assert!(manifest.inputs.is_empty());

        let written = fs::read_to_string(out.join("manifest.json")).unwrap_or_default();
        let reloaded: Result<Manifest, _> = serde_json::from_str(&written);
        assert!(reloaded.is_ok_and(|m| m == manifest));
    }

    #[test]
    fn test_missing_entry_chunk_leaves_previous_manifest_untouched() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let descriptor_path = write_descriptor(&dir);
        let out = dir.path().join("dist");
        assert!(fs::create_dir_all(&out).is_ok());
        assert!(fs::write(out.join("manifest.json"), "previous contents").is_ok());

        let packager = Packager::new(ExtensionConfig::new("My Source", vec![Capability::Video]))
            .with_descriptor_path(descriptor_path);

        let result = packager.pack(&BuildArtifact::new(), Some(&out));
        assert!(matches!(result, Err(ManifestError::MissingArtifact { .. })));
        assert_eq!(
            fs::read_to_string(out.join("manifest.json")).ok().as_deref(),
            Some("previous contents")
        );
    }

    #[test]
    fn test_descriptor_failure_aborts_before_publish() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let out = dir.path().join("dist");

        let packager = Packager::new(ExtensionConfig::new("My Source", vec![Capability::Video]))
            .with_descriptor_path(dir.path().join("package.json"));

        let result = packager.pack(&artifact(), Some(&out));
        assert!(matches!(result, Err(ManifestError::MetadataRead { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn test_unspecified_output_dir() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let descriptor_path = write_descriptor(&dir);

        let packager = Packager::new(ExtensionConfig::new("My Source", vec![Capability::Video]))
            .with_descriptor_path(descriptor_path);

        let result = packager.pack(&artifact(), None);
        assert!(matches!(
            result,
            Err(ManifestError::OutputDirectoryUnspecified)
        ));
    }
}
