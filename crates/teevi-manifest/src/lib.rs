//! Teevi Manifest Synthesis
//!
//! This crate packages a compiled extension bundle into a distributable
//! unit. Given the author's package descriptor (`package.json`), the
//! bundler's build output, and the in-process extension configuration, it
//! computes a SHA-256 integrity hash over the entry chunk and emits a
//! `manifest.json` (plus an optional icon copy) into the output directory.
//!
//! The pipeline runs once per completed build, in four steps: read the
//! descriptor, hash the entry chunk, synthesize the manifest, publish it.
//! Any failure aborts the run before anything is written.

pub mod artifact;
pub mod descriptor;
pub mod errors;
pub mod pack;
pub mod publish;
pub mod synthesize;
pub mod types;

pub use artifact::{hash_entry_chunk, BuildArtifact, BundleOutput};
pub use descriptor::{read_descriptor, DescriptorPolicy, VersionShape};
pub use errors::ManifestError;
pub use pack::Packager;
pub use publish::publish;
pub use synthesize::synthesize;
pub use types::{ExtensionConfig, ExtensionInput, Manifest, PackageDescriptor};
