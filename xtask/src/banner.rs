//! Distribution banner generation and injection.
//!
//! Every distributable file ships with a fixed-format header naming the
//! project, version, homepage, and copyright year. The metadata comes from
//! the schema-versioned `dist.manifest.toml` at the workspace root so the
//! banner never drifts from the release metadata.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use serde::Deserialize;

use crate::error::{XtaskError, XtaskResult};

/// Workspace-root manifest carrying distribution metadata.
pub const DIST_MANIFEST_FILE: &str = "dist.manifest.toml";

/// Default directory holding distributable artifacts.
pub const DEFAULT_DIST_DIR: &str = "dist";

const DIST_MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Distribution metadata parsed from [`DIST_MANIFEST_FILE`].
#[derive(Debug, Clone, Deserialize)]
pub struct DistManifest {
    /// Manifest schema version; must match the tool's expectation.
    pub schema_version: u32,
    /// Human-facing project name used in the banner.
    pub display_name: String,
    /// Release version string.
    pub version: String,
    /// Project homepage URL.
    pub homepage: String,
    /// Copyright holder.
    pub author: String,
}

/// Loads and validates the distribution manifest.
///
/// # Errors
///
/// Returns a config error when the manifest is unreadable, unparseable, or
/// carries an unexpected schema version.
pub fn load_dist_manifest(root: &Path) -> XtaskResult<DistManifest> {
    let path = root.join(DIST_MANIFEST_FILE);
    let raw = fs::read_to_string(&path)
        .map_err(|err| XtaskError::config(format!("failed to read dist manifest: {err}")).with_path(&path))?;
    let manifest: DistManifest = toml::from_str(&raw)
        .map_err(|err| XtaskError::config(format!("failed to parse dist manifest: {err}")).with_path(&path))?;
    if manifest.schema_version != DIST_MANIFEST_SCHEMA_VERSION {
        return Err(XtaskError::config(format!(
            "dist manifest schema mismatch: expected {DIST_MANIFEST_SCHEMA_VERSION} found {}",
            manifest.schema_version
        ))
        .with_path(&path));
    }
    Ok(manifest)
}

/// Renders the fixed-format banner, optionally naming one distributable file.
pub fn render_banner(manifest: &DistManifest, file: Option<&str>, year: i32) -> String {
    let file_part = file.map(|name| format!(" {name}")).unwrap_or_default();
    format!(
        "/*!\n  * {name}{file_part} v{version} ({homepage})\n  * Copyright {year} {author}\n  * Licensed under MIT ({homepage})\n  */",
        name = manifest.display_name,
        version = manifest.version,
        homepage = manifest.homepage,
        author = manifest.author,
    )
}

/// Prepends `banner` to `contents`, or returns `None` when a banner is
/// already present (reruns are idempotent).
pub fn apply_banner(contents: &str, banner: &str) -> Option<String> {
    if contents.starts_with("/*!") {
        return None;
    }
    Some(format!("{banner}\n{contents}"))
}

/// Runs the `banner` subcommand: inject headers into every dist file.
///
/// # Errors
///
/// Fails when the dist directory is missing or any file cannot be read or
/// rewritten.
pub fn run(root: &Path, args: &[String]) -> XtaskResult<()> {
    let dist_dir = match args.first().map(String::as_str) {
        Some(dir) => root.join(dir),
        None => root.join(DEFAULT_DIST_DIR),
    };
    if !dist_dir.is_dir() {
        return Err(XtaskError::io("dist directory not found")
            .with_path(&dist_dir)
            .with_hint("build the distributables before injecting banners"));
    }

    let manifest = load_dist_manifest(root)?;
    let year = Local::now().year();

    let mut stamped = 0usize;
    let mut skipped = 0usize;
    for path in collect_dist_files(&dist_dir)? {
        let contents = fs::read_to_string(&path)
            .map_err(|err| XtaskError::io(format!("failed to read dist file: {err}")).with_path(&path))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let banner = render_banner(&manifest, file_name.as_deref(), year);
        match apply_banner(&contents, &banner) {
            Some(updated) => {
                fs::write(&path, updated).map_err(|err| {
                    XtaskError::io(format!("failed to write dist file: {err}")).with_path(&path)
                })?;
                println!("bannered {}", path.display());
                stamped += 1;
            }
            None => {
                println!("skipped {} (banner present)", path.display());
                skipped += 1;
            }
        }
    }

    println!("banner: {stamped} stamped, {skipped} skipped");
    Ok(())
}

fn collect_dist_files(dir: &Path) -> XtaskResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir)
        .map_err(|err| XtaskError::io(format!("failed to list dist directory: {err}")).with_path(dir))?;
    for entry in entries {
        let entry = entry
            .map_err(|err| XtaskError::io(format!("failed to list dist directory: {err}")).with_path(dir))?;
        let path = entry.path();
        if path.is_dir() {
            files.extend(collect_dist_files(&path)?);
        } else if matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("js" | "css")
        ) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
