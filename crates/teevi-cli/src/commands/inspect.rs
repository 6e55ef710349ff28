//! The `inspect` command: summarize a published manifest.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use teevi_manifest::types::MANIFEST_FILE_NAME;
use teevi_manifest::Manifest;

/// Resolve the manifest location: an explicit file, a directory containing
/// one, or the conventional `dist/manifest.json` next to the cwd.
fn resolve_manifest_path(path: Option<&Path>) -> PathBuf {
    match path {
        Some(path) if path.is_dir() => path.join(MANIFEST_FILE_NAME),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from("dist").join(MANIFEST_FILE_NAME),
    }
}

pub fn handle_inspect(path: Option<&Path>) -> Result<()> {
    let manifest_path = resolve_manifest_path(path);

    let content = fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    let manifest: Manifest = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", manifest_path.display()))?;

    println!();
    println!(
        "{} {}",
        manifest.name.bold(),
        format!("v{}", manifest.version).dimmed()
    );
    println!("  {} {}", "id:".dimmed(), manifest.id.cyan());
    println!("  {} {}", "author:".dimmed(), manifest.author);
    println!("  {} {}", "description:".dimmed(), manifest.description);
    if let Some(ref homepage) = manifest.homepage {
        println!("  {} {}", "homepage:".dimmed(), homepage);
    }
    let capabilities: Vec<String> = manifest
        .capabilities
        .iter()
        .map(|c| c.as_str().to_string())
        .collect();
    println!(
        "  {} {}",
        "capabilities:".dimmed(),
        capabilities.join(", ").cyan()
    );
    println!("  {} {}", "hash:".dimmed(), manifest.hash);
    println!("  {} {}", "icon:".dimmed(), manifest.icon_resource_name);
    if !manifest.inputs.is_empty() {
        println!("  {}", "inputs:".dimmed());
        for input in &manifest.inputs {
            let marker = if input.required {
                "required".yellow().to_string()
            } else {
                "optional".dimmed().to_string()
            };
            println!("    {} {} ({})", input.id.cyan(), input.name, marker);
        }
    }
    if let Some(ref note) = manifest.note {
        println!("  {} {}", "note:".dimmed(), note);
    }
    if let Some(ref sdk_version) = manifest.sdk_version {
        println!("  {} {}", "sdk:".dimmed(), sdk_version);
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::commands::inspect::resolve_manifest_path;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_explicit_file_used_as_is() {
        let resolved = resolve_manifest_path(Some(Path::new("/tmp/some/manifest.json")));
        assert_eq!(resolved, PathBuf::from("/tmp/some/manifest.json"));
    }

    #[test]
    fn test_default_is_dist_manifest() {
        let resolved = resolve_manifest_path(None);
        assert_eq!(resolved, PathBuf::from("dist").join("manifest.json"));
    }
}
