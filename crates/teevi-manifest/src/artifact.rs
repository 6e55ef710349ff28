//! Build artifact mapping and entry chunk hashing.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::errors::ManifestError;

/// One output produced by the bundler: an executable chunk with byte
/// content, or a static asset with nothing to hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleOutput {
    Chunk(Vec<u8>),
    Asset,
}

/// The bundler's output, keyed by output filename. Exactly one chunk is
/// expected at the conventional entry filename.
#[derive(Debug, Clone, Default)]
pub struct BuildArtifact {
    outputs: BTreeMap<String, BundleOutput>,
}

impl BuildArtifact {
    pub fn new() -> Self {
        BuildArtifact::default()
    }

    pub fn insert_chunk(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.outputs.insert(name.into(), BundleOutput::Chunk(bytes));
    }

    pub fn insert_asset(&mut self, name: impl Into<String>) {
        self.outputs.insert(name.into(), BundleOutput::Asset);
    }

    pub fn get(&self, name: &str) -> Option<&BundleOutput> {
        self.outputs.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Assemble an artifact mapping from a bundler output directory: the
    /// file at `entry` becomes the executable chunk, every other regular
    /// file is recorded as an asset.
    pub fn from_dir(dir: &Path, entry: &str) -> io::Result<Self> {
        let mut artifact = BuildArtifact::new();
        for dir_entry in fs::read_dir(dir)? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }
            let name = dir_entry.file_name().to_string_lossy().to_string();
            if name == entry {
                artifact.insert_chunk(name, fs::read(dir_entry.path())?);
            } else {
                artifact.insert_asset(name);
            }
        }
        Ok(artifact)
    }
}

/// Compute the lowercase-hex SHA-256 digest of the entry chunk's bytes.
///
/// The digest is a function of content only: path, timestamps, and other
/// filesystem metadata never enter the hash. A manifest without a content
/// hash is not valid output, so a missing entry (or an entry that is a
/// non-chunk asset) is a hard failure.
pub fn hash_entry_chunk(artifact: &BuildArtifact, entry: &str) -> Result<String, ManifestError> {
    match artifact.get(entry) {
        Some(BundleOutput::Chunk(bytes)) => {
            let mut hasher = Sha256::new();
            hasher.update(bytes);
            let digest = format!("{:x}", hasher.finalize());
            debug!("hashed entry chunk `{entry}`: {digest}");
            Ok(digest)
        }
        _ => Err(ManifestError::MissingArtifact {
            entry: entry.to_string(),
        }),
    }
}
