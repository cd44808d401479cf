//! `[logo]` configuration: image logo or text title in the header.
//!
//! # Example
//!
//! ```toml
//! [logo]
//! enable = true   # false renders the site title as text
//! svg = true      # /assets/logo.svg, otherwise /assets/logo.png
//! width = 216
//! height = 46
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Default logo width in pixels.
pub const DEFAULT_WIDTH: NonZeroU32 = NonZeroU32::new(216).unwrap();

/// Default logo height in pixels.
pub const DEFAULT_HEIGHT: NonZeroU32 = NonZeroU32::new(46).unwrap();

/// Header logo settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "logo")]
pub struct LogoConfig {
    /// Render an image logo instead of the text title.
    pub enable: bool,

    /// Use the SVG logo rather than the PNG one.
    pub svg: bool,

    /// Rendered width in pixels.
    pub width: NonZeroU32,

    /// Rendered height in pixels.
    pub height: NonZeroU32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enable: false,
            svg: true,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl LogoConfig {
    /// Public path of the logo image.
    pub fn src(&self) -> &'static str {
        if self.svg {
            "/assets/logo.svg"
        } else {
            "/assets/logo.png"
        }
    }
}

/// What the header shows in place of the site name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Brand {
    Image {
        src: &'static str,
        width: u32,
        height: u32,
        alt: String,
    },
    Text { title: String },
}

impl Brand {
    /// Pick the header brand for a site title.
    pub fn resolve(logo: &LogoConfig, title: &str) -> Self {
        if logo.enable {
            Self::Image {
                src: logo.src(),
                width: logo.width.get(),
                height: logo.height.get(),
                alt: title.to_string(),
            }
        } else {
            Self::Text {
                title: title.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logo_renders_title() {
        let brand = Brand::resolve(&LogoConfig::default(), "Blog");
        assert_eq!(
            brand,
            Brand::Text {
                title: "Blog".into()
            }
        );
    }

    #[test]
    fn test_enabled_logo_dimensions() {
        let logo = LogoConfig {
            enable: true,
            svg: false,
            ..LogoConfig::default()
        };
        assert_eq!(
            Brand::resolve(&logo, "Blog"),
            Brand::Image {
                src: "/assets/logo.png",
                width: 216,
                height: 46,
                alt: "Blog".into(),
            }
        );
    }

    #[test]
    fn test_zero_dimension_rejected_at_parse() {
        let result: Result<LogoConfig, _> = toml::from_str("width = 0");
        assert!(result.is_err());
        let result: Result<LogoConfig, _> = toml::from_str("height = 0");
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let logo: LogoConfig = toml::from_str("enable = true").unwrap();
        assert!(logo.enable);
        assert!(logo.svg);
        assert_eq!(logo.width.get(), 216);
        assert_eq!(logo.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_default_dimensions() {
        let logo = LogoConfig::default();
        assert_eq!((logo.width, logo.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!((DEFAULT_WIDTH.get(), DEFAULT_HEIGHT.get()), (216, 46));
    }
}
