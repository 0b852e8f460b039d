//! Subresource-integrity hash generation for the docs site config.
//!
//! The docs templates embed `integrity` attributes for the CDN copies of the
//! distributables. This command recomputes the digests from the local dist
//! files and rewrites the matching keys in `docs/config.yml` in place,
//! leaving every other line untouched. Any unreadable input aborts the whole
//! run: a partially updated config would ship incorrect integrity hashes.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha384};

use crate::error::{XtaskError, XtaskResult};

/// Docs site configuration rewritten in place.
pub const DOCS_CONFIG_FILE: &str = "docs/config.yml";

/// Hash algorithm label embedded in the integrity string.
pub const SRI_ALGORITHM: &str = "sha384";

/// One (dist file, config key) pair to hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SriTarget {
    /// Path from the workspace root.
    pub file: &'static str,
    /// Key in the docs config whose value receives the integrity string.
    pub config_key: &'static str,
}

/// Files the docs site references with integrity attributes.
///
/// These must be the same artifacts the CDN serves; hashing anything else
/// produces integrity values the browser will reject.
pub const SRI_TARGETS: &[SriTarget] = &[
    SriTarget {
        file: "dist/css/ui-behaviors.min.css",
        config_key: "css_hash",
    },
    SriTarget {
        file: "dist/js/ui-behaviors.min.js",
        config_key: "js_hash",
    },
    SriTarget {
        file: "dist/js/ui-behaviors.bundle.min.js",
        config_key: "js_bundle_hash",
    },
];

/// Computes the `sha384-<base64>` integrity string for raw file contents.
pub fn integrity_for(bytes: &[u8]) -> String {
    let digest = Sha384::digest(bytes);
    format!("{SRI_ALGORITHM}-{}", STANDARD.encode(digest))
}

/// Rewrites the value of `key` in YAML config text, preserving indentation,
/// quoting style, and every other line byte-for-byte.
///
/// # Errors
///
/// Returns a config error when no line defines `key`.
pub fn replace_config_value(config: &str, key: &str, value: &str) -> XtaskResult<String> {
    let prefix = format!("{key}:");
    let mut replaced = false;
    let mut lines = Vec::new();
    for line in config.lines() {
        let trimmed = line.trim_start();
        if !replaced && trimmed.starts_with(&prefix) {
            let indent = &line[..line.len() - trimmed.len()];
            let old_value = trimmed[prefix.len()..].trim_start();
            let quote = match old_value.chars().next() {
                Some(q @ ('"' | '\'')) => q,
                _ => '"',
            };
            lines.push(format!("{indent}{prefix} {quote}{value}{quote}"));
            replaced = true;
        } else {
            lines.push(line.to_string());
        }
    }
    if !replaced {
        return Err(XtaskError::config(format!(
            "docs config does not define key `{key}`"
        )));
    }
    let mut updated = lines.join("\n");
    if config.ends_with('\n') {
        updated.push('\n');
    }
    Ok(updated)
}

/// Runs the `sri` subcommand: hash every listed dist file and rewrite the
/// docs config.
///
/// # Errors
///
/// Fail-fast: an unreadable dist file, a missing config key, or a rewrite
/// that no longer parses as YAML aborts the run without writing anything.
pub fn run(root: &Path, _args: &[String]) -> XtaskResult<()> {
    let config_path = root.join(DOCS_CONFIG_FILE);
    let mut config = fs::read_to_string(&config_path).map_err(|err| {
        XtaskError::io(format!("failed to read docs config: {err}")).with_path(&config_path)
    })?;

    for target in SRI_TARGETS {
        let path = root.join(target.file);
        let bytes = fs::read(&path).map_err(|err| {
            XtaskError::io(format!("failed to read dist file: {err}"))
                .with_path(&path)
                .with_hint("hash the same artifacts the CDN serves; build the dist bundle first")
        })?;
        let integrity = integrity_for(&bytes);
        println!("{}: {integrity}", target.config_key);
        config = replace_config_value(&config, target.config_key, &integrity)?;
    }

    serde_yaml::from_str::<serde_yaml::Value>(&config).map_err(|err| {
        XtaskError::config(format!("rewritten docs config is not valid YAML: {err}"))
            .with_path(&config_path)
    })?;
    fs::write(&config_path, &config).map_err(|err| {
        XtaskError::io(format!("failed to write docs config: {err}")).with_path(&config_path)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_is_deterministic_and_matches_known_vectors() {
        assert_eq!(
            integrity_for(b""),
            "sha384-OLBgp1GsljhM2TJ+sbHjaiH9txEUvgdDTAzHv2P24donTt6/529l+9Ua0vFImLlb"
        );
        assert_eq!(
            integrity_for(b"alert(1);\n"),
            "sha384-bGe/RBNQDjw1oSdQQ9Orj3inXga8nL70PiYuibiYD7weMiTyu/Y+coqsWPmeVsqL"
        );
        assert_eq!(integrity_for(b"alert(1);\n"), integrity_for(b"alert(1);\n"));
    }

    #[test]
    fn replace_config_value_touches_only_the_matching_line() {
        let config = "title: \"UI Behaviors\"\ncdn:\n  css_hash: \"sha384-old\"\n  js_hash: \"sha384-old\"\n";
        let updated = replace_config_value(config, "css_hash", "sha384-new").expect("replace");
        assert_eq!(
            updated,
            "title: \"UI Behaviors\"\ncdn:\n  css_hash: \"sha384-new\"\n  js_hash: \"sha384-old\"\n"
        );
        serde_yaml::from_str::<serde_yaml::Value>(&updated).expect("still valid yaml");
    }

    #[test]
    fn replace_config_value_preserves_single_quotes() {
        let config = "  js_hash: 'sha384-old'\n";
        let updated = replace_config_value(config, "js_hash", "sha384-new").expect("replace");
        assert_eq!(updated, "  js_hash: 'sha384-new'\n");
    }

    #[test]
    fn replace_config_value_fails_for_missing_keys() {
        let err = replace_config_value("title: \"UI Behaviors\"\n", "css_hash", "sha384-x")
            .expect_err("missing key");
        assert!(err.to_string().contains("css_hash"));
    }

    #[test]
    fn unreadable_dist_files_abort_the_run() {
        let missing = Path::new("/nonexistent-ui-behaviors-workspace");
        assert!(run(missing, &[]).is_err());
    }
}
