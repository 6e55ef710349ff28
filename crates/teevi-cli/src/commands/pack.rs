//! The `pack` command: run the manifest pipeline over a bundler output
//! directory.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use teevi_logger as logger;
use teevi_manifest::types::{ENTRY_FILE_NAME, MANIFEST_FILE_NAME};
use teevi_manifest::{BuildArtifact, Packager};

use crate::common::GlobalOpts;
use crate::pack_config;

#[derive(Args, Debug)]
pub struct PackArgs {
    /// Bundler output directory containing the compiled bundle
    #[arg(long, default_value = "dist")]
    pub dist: PathBuf,

    /// Pack configuration file
    #[arg(long, default_value = "teevi.toml")]
    pub config: PathBuf,

    /// Package descriptor file
    #[arg(long, default_value = "package.json")]
    pub package: PathBuf,

    /// Output directory for the manifest (defaults to the dist directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn handle_pack(args: &PackArgs, _opts: &GlobalOpts) -> Result<()> {
    logger::info("Reading pack configuration...");
    let config = pack_config::load(&args.config)?;

    let artifact = BuildArtifact::from_dir(&args.dist, ENTRY_FILE_NAME)
        .with_context(|| format!("failed to read build output {}", args.dist.display()))?;

    let output_dir = args.out.clone().unwrap_or_else(|| args.dist.clone());
    let icon_resource_name = config.icon_resource_name().to_string();
    let icon_source = PathBuf::from(config.assets_dir()).join(&icon_resource_name);

    logger::info("Generating manifest...");
    let packager = Packager::new(config)
        .with_descriptor_path(args.package.clone())
        .with_sdk_version(env!("CARGO_PKG_VERSION"));
    packager.pack(&artifact, Some(&output_dir))?;

    let output_name = output_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| output_dir.display().to_string());
    logger::success(&format!(
        "Manifest written to {output_name}/{MANIFEST_FILE_NAME}"
    ));
    if icon_source.exists() {
        logger::success(&format!(
            "Icon resource copied to {output_name}/{icon_resource_name}"
        ));
    }

    Ok(())
}
