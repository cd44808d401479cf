//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── locale     # [locale]
//! │   ├── logo       # [logo]
//! │   └── social     # [[socials]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── registry       # Registry (immutable, shared handle)
//! ├── artifact       # JSON build artifact
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Lifecycle
//!
//! `site.toml` is parsed into a [`SiteConfig`], finalized (derived link
//! titles), validated (all problems collected and reported together), and
//! frozen into a [`Registry`]. Consumers receive the registry explicitly.

pub mod artifact;
mod registry;
pub mod section;
pub mod types;
mod util;

pub use registry::Registry;
pub use section::{
    Brand, LocaleConfig, LogoConfig, Platform, SiteInfoConfig, SocialLink,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::embed::{EXAMPLE_SITE_TOML, HEADER_TOML, HeaderVars};
use crate::log;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::IsTerminal,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "site.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity, pagination and scheduling
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Html lang and date-formatting tags
    #[serde(default)]
    pub locale: LocaleConfig,

    /// Header logo
    #[serde(default)]
    pub logo: LogoConfig,

    /// Social links in display order
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// Descriptors are equal regardless of where they were loaded from.
impl PartialEq for SiteConfig {
    fn eq(&self, other: &Self) -> bool {
        self.site == other.site
            && self.locale == other.locale
            && self.logo == other.logo
            && self.socials == other.socials
    }
}

impl Eq for SiteConfig {}

impl SiteConfig {
    /// Find `config_name` upward from the working directory and load it.
    pub fn load(config_name: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config_name) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'papersite init' to create one",
                config_name.display()
            )));
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// The bundled example configuration, finalized.
    pub fn example() -> Result<Self> {
        let mut config = Self::from_str(EXAMPLE_SITE_TOML)?;
        config.finalize();
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    ///
    /// Non-interactive runs (CI builds) never continue.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        if !io::stdin().is_terminal() {
            return Ok(false);
        }

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }

    /// Derive values that depend on other fields.
    ///
    /// Fills missing social link titles from the site title. Idempotent.
    pub fn finalize(&mut self) {
        let title = self.site.title.clone();
        for link in &mut self.socials {
            link.finalize(&title);
        }
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every check without printing or failing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.locale.validate(&mut diag);
        for (i, link) in self.socials.iter().enumerate() {
            link.validate(i, &mut diag);
        }
        section::check_duplicates(&self.socials, &mut diag);

        diag
    }

    /// Social links that are rendered, in declared order.
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.socials.iter().filter(|link| link.active)
    }

    /// Header brand: logo image when enabled, otherwise the site title.
    pub fn brand(&self) -> Brand {
        Brand::resolve(&self.logo, &self.site.title)
    }

    /// Get the directory containing the config file
    pub fn root(&self) -> &Path {
        self.config_path.parent().unwrap_or(Path::new(""))
    }
}

// ============================================================================
// config template
// ============================================================================

/// Generate a commented `site.toml` with every section at its default.
pub fn generate_config_template() -> String {
    let mut out = HEADER_TOML.render(&HeaderVars {
        version: env!("CARGO_PKG_VERSION"),
    });

    for section in [
        SiteInfoConfig::template_with_header(),
        LocaleConfig::template_with_header(),
        LogoConfig::template_with_header(),
    ] {
        out.push('\n');
        out.push_str(&section);
    }

    // Array-of-tables: one starter entry per common platform
    for (platform, href) in [
        (Platform::Github, "https://github.com/"),
        (Platform::Mail, "mailto:"),
    ] {
        out.push_str("\n# [[socials]]\n");
        out.push_str(&format!("# name = \"{platform}\"\n"));
        out.push_str(&format!("# href = \"{href}\"\n"));
        out.push_str("# link_title = \"\"  # derived from the site title when empty\n");
        out.push_str("# active = true\n");
    }

    out
}

/// Write a config file into `root`, refusing to overwrite unless `force`.
pub fn write_config(root: &Path, content: &str, force: bool) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test\"\nwebsite = \"https://example.com/\"\n{extra}"
    );
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.finalize();
    parsed
}

// ============================================================================
// tests
// ============================================================================
