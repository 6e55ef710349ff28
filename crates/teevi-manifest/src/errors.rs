//! Error types for the manifest pipeline.
//!
//! Every variant is terminal for the current build's manifest step: nothing
//! is retried, and no partial manifest is ever written.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while synthesizing or publishing a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read package descriptor {path}: {source}")]
    MetadataRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse package descriptor {path}: {source}")]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("package descriptor is missing required field `{field}`")]
    MetadataValidation { field: String },

    #[error("no executable chunk named `{entry}` in the build output")]
    MissingArtifact { entry: String },

    #[error("no output directory specified")]
    OutputDirectoryUnspecified,

    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_validation_error_names_the_field() {
        let err = ManifestError::MetadataValidation {
            field: "version".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "package descriptor is missing required field `version`"
        );
    }

    #[test]
    fn test_missing_artifact_names_the_entry() {
        let err = ManifestError::MissingArtifact {
            entry: "main.js".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no executable chunk named `main.js` in the build output"
        );
    }
}
