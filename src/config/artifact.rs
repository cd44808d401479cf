//! JSON build artifact.
//!
//! The registry is written next to the build output so templates and other
//! tools read the exact values the build used:
//!
//! ```json
//! {
//!   "generator": "papersite",
//!   "version": "0.1.0",
//!   "site": { "website": "https://example.com/", ... },
//!   "locale": { "lang": "en", "lang_tag": ["en-US"] },
//!   "logo": { "enable": false, ... },
//!   "socials": [ { "name": "Github", ... } ]
//! }
//! ```
//!
//! Key order and social link order are preserved in both directions.

use super::{ConfigError, Registry, SiteConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Artifact file name inside the output directory.
pub const ARTIFACT_FILE: &str = "site.json";

const GENERATOR: &str = env!("CARGO_PKG_NAME");

#[derive(Serialize)]
struct ArtifactRef<'a> {
    generator: &'a str,
    version: &'a str,
    #[serde(flatten)]
    config: &'a SiteConfig,
}

#[derive(Deserialize)]
struct Artifact {
    #[serde(default)]
    generator: String,
    #[serde(default)]
    version: String,
    #[serde(flatten)]
    config: SiteConfig,
}

/// Serialize a registry to artifact JSON.
pub fn to_json(registry: &Registry, pretty: bool) -> Result<String> {
    let artifact = ArtifactRef {
        generator: GENERATOR,
        version: env!("CARGO_PKG_VERSION"),
        config: registry.config(),
    };

    let json = if pretty {
        serde_json::to_string_pretty(&artifact)
    } else {
        serde_json::to_string(&artifact)
    }
    .map_err(ConfigError::Json)?;

    Ok(json)
}

/// Parse artifact JSON back into a validated registry.
pub fn from_json(json: &str) -> Result<Registry> {
    let artifact: Artifact = serde_json::from_str(json).map_err(ConfigError::Json)?;

    if artifact.generator != GENERATOR {
        crate::debug!("artifact"; "written by '{}' {}, reading anyway", artifact.generator, artifact.version);
    }

    Registry::new(artifact.config)
}

/// Write the registry to `path`, skipping the write when content is unchanged.
pub fn write(registry: &Registry, path: &Path) -> Result<()> {
    write_json(&to_json(registry, true)?, path)
}

/// Write serialized artifact JSON to `path`, creating parent directories.
pub fn write_json(json: &str, path: &Path) -> Result<()> {
    if path.exists() && fs::read_to_string(path).is_ok_and(|existing| existing == json) {
        crate::debug!("artifact"; "{} unchanged, skipping write", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(())
}

/// Read a registry previously written with [`write`].
pub fn read(path: &Path) -> Result<Registry> {
    let json =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
    from_json(&json).with_context(|| format!("failed to read artifact '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Platform, test_parse_config};
    use tempfile::TempDir;

    #[test]
    fn test_roundtrip_preserves_descriptors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dist").join(ARTIFACT_FILE);

        let registry = Registry::example().unwrap();
        write(&registry, &path).unwrap();
        let restored = read(&path).unwrap();

        assert_eq!(restored, registry);
        let names: Vec<_> = restored.socials().iter().map(|s| s.name).collect();
        let expected: Vec<_> = registry.socials().iter().map(|s| s.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_roundtrip_custom_order() {
        let config = test_parse_config(
            r#"
[[socials]]
name = "Mastodon"
href = "https://mastodon.social/@a"

[[socials]]
name = "Github"
href = "https://github.com/a"
active = false

[[socials]]
name = "CodePen"
href = "https://codepen.io/a"
"#,
        );
        let registry = Registry::new(config).unwrap();

        let json = to_json(&registry, false).unwrap();
        let restored = from_json(&json).unwrap();

        let order: Vec<_> = restored.socials().iter().map(|s| (s.name, s.active)).collect();
        assert_eq!(
            order,
            [
                (Platform::Mastodon, true),
                (Platform::Github, false),
                (Platform::CodePen, true)
            ]
        );
    }

    #[test]
    fn test_json_layout() {
        let registry = Registry::example().unwrap();
        let json = to_json(&registry, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generator"], "papersite");
        assert_eq!(value["site"]["posts_per_page"], 3);
        assert_eq!(value["site"]["scheduled_post_margin_ms"], 900_000);
        assert_eq!(value["locale"]["lang_tag"][0], "en-EN");
        assert_eq!(value["socials"][2]["name"], "Mail");

        // Field order follows the struct definition
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["generator", "version", "site", "locale", "logo", "socials"]);
    }

    #[test]
    fn test_invalid_artifact_rejected() {
        let json = r#"{"site": {"title": "T", "website": "https://example.com/", "posts_per_page": 0}}"#;
        assert!(from_json(json).is_err());

        let json = r#"{"site": {"title": "", "website": "https://example.com/"}}"#;
        assert!(from_json(json).is_err());
    }

    #[test]
    fn test_write_skips_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(ARTIFACT_FILE);
        let registry = Registry::example().unwrap();

        write(&registry, &path).unwrap();
        let first = fs::metadata(&path).unwrap().modified().unwrap();
        write(&registry, &path).unwrap();
        let second = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read(Path::new("/nonexistent/site.json")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }
}
