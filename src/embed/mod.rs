//! Embedded config files shipped with the binary.
//!
//! - `site.toml` - fully populated example configuration
//! - `header.toml` - comment block heading generated templates

mod template;

pub use template::{Template, TemplateVars};

/// Example configuration with every section filled in.
pub const EXAMPLE_SITE_TOML: &str = include_str!("site.toml");

/// Variables for the `header.toml` template.
pub struct HeaderVars<'a> {
    pub version: &'a str,
}

impl TemplateVars for HeaderVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__VERSION__", self.version)
    }
}

/// Comment block placed at the top of a generated `site.toml`.
pub const HEADER_TOML: Template<HeaderVars<'static>> = Template::new(include_str!("header.toml"));
