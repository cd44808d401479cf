//! Site initialization.
//!
//! Writes a `site.toml` into the target directory: either the commented
//! template generated from the section definitions, or the populated example.

use crate::config::{generate_config_template, write_config};
use crate::embed::EXAMPLE_SITE_TOML;
use crate::log;
use anyhow::Result;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Create `site.toml` under `name` (or the current directory).
pub fn new_site(name: Option<&Path>, example: bool, force: bool) -> Result<PathBuf> {
    let root = name.unwrap_or(Path::new("."));
    let content: Cow<'_, str> = if example {
        Cow::Borrowed(EXAMPLE_SITE_TOML)
    } else {
        Cow::Owned(generate_config_template())
    };

    let path = write_config(root, &content, force)?;
    log!("init"; "created {}", path.display());
    if !example {
        log!("init"; "fill in [site] title and website, then run 'papersite check'");
    }
    Ok(path)
}
