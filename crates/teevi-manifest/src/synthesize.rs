//! Manifest assembly from descriptor, configuration, and bundle digest.

use std::collections::HashSet;
use teevi_core::Capability;

use crate::types::{
    ExtensionConfig, Manifest, PackageDescriptor, DEFAULT_AUTHOR, DEFAULT_DESCRIPTION,
};

/// Combine the validated descriptor, the author's configuration, and the
/// computed entry-chunk digest into a manifest.
///
/// Pure computation: identical inputs yield byte-identical manifests.
/// Duplicate capability tags are tolerated and silently collapsed, keeping
/// first-seen order. Synthesis has no failure modes of its own; upstream
/// reader or hasher errors abort the pipeline before it runs.
pub fn synthesize(
    descriptor: &PackageDescriptor,
    config: &ExtensionConfig,
    hash: &str,
    sdk_version: Option<&str>,
) -> Manifest {
    let mut seen = HashSet::new();
    let capabilities: Vec<Capability> = config
        .capabilities
        .iter()
        .filter(|capability| seen.insert((*capability).clone()))
        .cloned()
        .collect();

    let description = config
        .description
        .clone()
        .or_else(|| descriptor.description.clone())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let author = descriptor
        .author
        .clone()
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

    Manifest {
        id: descriptor.name.clone(),
        name: config.display_name.clone(),
        version: descriptor.version.clone(),
        description,
        author,
        homepage: descriptor.homepage.clone(),
        hash: hash.to_string(),
        capabilities,
        icon_resource_name: config.icon_resource_name().to_string(),
        inputs: config.inputs.clone(),
        note: config.note.clone(),
        sdk_version: sdk_version.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use crate::synthesize::synthesize;
    use crate::types::{ExtensionConfig, ExtensionInput, PackageDescriptor};
    use teevi_core::Capability;

    fn descriptor() -> PackageDescriptor {
        PackageDescriptor {
            name: "my-source".to_string(),
            version: "2.3.0".to_string(),
            description: None,
            author: Some("Jane".to_string()),
            homepage: None,
            display_name: None,
            version_code: None,
            toolkit_version: None,
        }
    }

    #[test]
    fn test_end_to_end_field_mapping() {
        let config = ExtensionConfig::new(
            "My Source",
            vec![Capability::Video, Capability::Video],
        );

        let manifest = synthesize(&descriptor(), &config, "abc123", None);

        assert_eq!(manifest.id, "my-source");
        assert_eq!(manifest.name, "My Source");
        assert_eq!(manifest.version, "2.3.0");
        assert_eq!(manifest.author, "Jane");
        assert_eq!(manifest.description, "Third-party extension for Teevi");
        assert_eq!(manifest.hash, "abc123");
        assert_eq!(manifest.capabilities, vec![Capability::Video]);
        assert_eq!(manifest.icon_resource_name, "icon.png");
        assert!(manifest.inputs.is_empty());
        assert!(manifest.homepage.is_none());
    }

    #[test]
    fn test_capabilities_deduplicated_first_seen_order() {
        let config = ExtensionConfig::new(
            "X",
            vec![
                Capability::Metadata,
                Capability::Video,
                Capability::Metadata,
            ],
        );

        let manifest = synthesize(&descriptor(), &config, "h", None);
        assert_eq!(
            manifest.capabilities,
            vec![Capability::Metadata, Capability::Video]
        );
    }

    #[test]
    fn test_defaults_for_missing_description_and_author() {
        let mut bare = descriptor();
        bare.author = None;

        let config = ExtensionConfig::new("X", vec![Capability::Metadata]);
        let manifest = synthesize(&bare, &config, "h", None);

        assert_eq!(manifest.description, "Third-party extension for Teevi");
        assert_eq!(manifest.author, "Unknown");
    }

    #[test]
    fn test_config_description_takes_precedence() {
        let mut with_description = descriptor();
        with_description.description = Some("From descriptor".to_string());

        let mut config = ExtensionConfig::new("X", vec![Capability::Metadata]);
        config.description = Some("From config".to_string());

        let manifest = synthesize(&with_description, &config, "h", None);
        assert_eq!(manifest.description, "From config");

        config.description = None;
        let manifest = synthesize(&with_description, &config, "h", None);
        assert_eq!(manifest.description, "From descriptor");
    }

    #[test]
    fn test_inputs_and_note_pass_through() {
        let mut config = ExtensionConfig::new("X", vec![Capability::Metadata]);
        config.inputs = vec![ExtensionInput {
            id: "domain".to_string(),
            name: "Domain".to_string(),
            required: true,
        }];
        config.note = Some("Requires an account".to_string());

        let manifest = synthesize(&descriptor(), &config, "h", Some("0.4.2"));
        assert_eq!(manifest.inputs.len(), 1);
        assert_eq!(manifest.inputs[0].id, "domain");
        assert_eq!(manifest.note.as_deref(), Some("Requires an account"));
        assert_eq!(manifest.sdk_version.as_deref(), Some("0.4.2"));
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let config = ExtensionConfig::new(
            "X",
            vec![Capability::Feed, Capability::Live, Capability::Feed],
        );

        let first = synthesize(&descriptor(), &config, "h", Some("0.4.2"));
        let second = synthesize(&descriptor(), &config, "h", Some("0.4.2"));

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).ok(),
            serde_json::to_string(&second).ok()
        );
    }
}
