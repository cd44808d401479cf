//! `[[socials]]` configuration: ordered outbound social links.
//!
//! # Example
//!
//! ```toml
//! [[socials]]
//! name = "Github"
//! href = "https://github.com/alice"
//! active = true
//!
//! [[socials]]
//! name = "Mail"
//! href = "mailto:alice@example.com"
//! link_title = "Write to Alice"
//! active = true
//! ```
//!
//! Declaration order is display order. `link_title` may be omitted; it is
//! derived from the site title and platform when the config is finalized.

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Supported social platforms.
///
/// Names in `site.toml` must match a variant exactly (`"LinkedIn"`,
/// `"StackOverflow"`); anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Github,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    Twitter,
    Twitch,
    YouTube,
    WhatsApp,
    Snapchat,
    Pinterest,
    TikTok,
    CodePen,
    Discord,
    GitLab,
    Reddit,
    Skype,
    Steam,
    Telegram,
    Mastodon,
    StackOverflow,
}

impl Platform {
    pub const ALL: [Self; 21] = [
        Self::Github,
        Self::Facebook,
        Self::Instagram,
        Self::LinkedIn,
        Self::Mail,
        Self::Twitter,
        Self::Twitch,
        Self::YouTube,
        Self::WhatsApp,
        Self::Snapchat,
        Self::Pinterest,
        Self::TikTok,
        Self::CodePen,
        Self::Discord,
        Self::GitLab,
        Self::Reddit,
        Self::Skype,
        Self::Steam,
        Self::Telegram,
        Self::Mastodon,
        Self::StackOverflow,
    ];

    /// Name as written in `site.toml`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::Mail => "Mail",
            Self::Twitter => "Twitter",
            Self::Twitch => "Twitch",
            Self::YouTube => "YouTube",
            Self::WhatsApp => "WhatsApp",
            Self::Snapchat => "Snapchat",
            Self::Pinterest => "Pinterest",
            Self::TikTok => "TikTok",
            Self::CodePen => "CodePen",
            Self::Discord => "Discord",
            Self::GitLab => "GitLab",
            Self::Reddit => "Reddit",
            Self::Skype => "Skype",
            Self::Steam => "Steam",
            Self::Telegram => "Telegram",
            Self::Mastodon => "Mastodon",
            Self::StackOverflow => "StackOverflow",
        }
    }

    /// Icon slug in the tabler icon set used by the theme.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Github => "brand-github",
            Self::Facebook => "brand-facebook",
            Self::Instagram => "brand-instagram",
            Self::LinkedIn => "brand-linkedin",
            Self::Mail => "mail",
            Self::Twitter => "brand-twitter",
            Self::Twitch => "brand-twitch",
            Self::YouTube => "brand-youtube",
            Self::WhatsApp => "brand-whatsapp",
            Self::Snapchat => "brand-snapchat",
            Self::Pinterest => "brand-pinterest",
            Self::TikTok => "brand-tiktok",
            Self::CodePen => "brand-codepen",
            Self::Discord => "brand-discord",
            Self::GitLab => "brand-gitlab",
            Self::Reddit => "brand-reddit",
            Self::Skype => "brand-skype",
            Self::Steam => "brand-steam",
            Self::Telegram => "brand-telegram",
            Self::Mastodon => "brand-mastodon",
            Self::StackOverflow => "brand-stackoverflow",
        }
    }

    /// Whether `href` is expected to be a `mailto:` link.
    pub const fn is_mail(self) -> bool {
        matches!(self, Self::Mail)
    }

    /// Link title used when `link_title` is not configured.
    pub fn default_link_title(self, site_title: &str) -> String {
        match self {
            Self::Mail => format!("Send an email to {site_title}"),
            Self::StackOverflow => {
                format!("See what questions there are about {site_title} on StackOverflow")
            }
            _ => format!("{site_title} on {}", self.name()),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn default_true() -> bool {
    true
}

/// One entry of `[[socials]]`.
///
/// `name` is required; every other key may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "socials")]
pub struct SocialLink {
    /// Platform name (e.g. "Github", "LinkedIn", "Mail").
    pub name: Platform,

    /// Link target (http, https or mailto).
    #[serde(default)]
    pub href: String,

    /// Accessible title; derived from the site title when empty.
    #[serde(default)]
    pub link_title: String,

    /// Inactive links are kept in config but never rendered.
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            name: Platform::Github,
            href: String::new(),
            link_title: String::new(),
            active: true,
        }
    }
}

impl SocialLink {
    pub fn new(name: Platform, href: impl Into<String>) -> Self {
        Self {
            name,
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Fill an empty title from the platform template and trim stray whitespace.
    pub fn finalize(&mut self, site_title: &str) {
        let trimmed = self.link_title.trim();
        self.link_title = if trimmed.is_empty() {
            self.name.default_link_title(site_title.trim())
        } else {
            trimmed.to_string()
        };
    }

    /// Validate the link target.
    ///
    /// # Checks
    /// - `href` is a parseable absolute URL
    /// - scheme is http, https or mailto
    /// - `Mail` links use `mailto:`
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let field = Self::FIELDS.href.entry(index);

        if self.href.trim().is_empty() {
            diag.error_with_hint(
                field,
                format!("{} link has no href", self.name),
                "set href, or remove the entry",
            );
            return;
        }

        match url::Url::parse(&self.href) {
            Ok(parsed) => match parsed.scheme() {
                "mailto" if !self.name.is_mail() => diag.error_with_hint(
                    field,
                    format!("{} link must not be a mailto: address", self.name),
                    "use the profile URL, e.g. https://...",
                ),
                "http" | "https" if self.name.is_mail() => diag.error_with_hint(
                    field,
                    "Mail link must be a mailto: address",
                    "use format like mailto:me@example.com",
                ),
                "http" | "https" if parsed.host_str().is_none() => diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com/me",
                ),
                "http" | "https" | "mailto" => {}
                other => diag.error_with_hint(
                    field,
                    format!("scheme '{other}' not supported, must be http, https or mailto"),
                    "use format like https://example.com/me",
                ),
            },
            Err(e) => diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like https://example.com/me",
            ),
        }
    }
}

/// Warn about platforms declared more than once.
pub fn check_duplicates(socials: &[SocialLink], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    for (i, link) in socials.iter().enumerate() {
        if !seen.insert(link.name) {
            diag.warn(
                SocialLink::FIELDS.name.entry(i),
                format!("platform {} is declared more than once", link.name),
            );
        }
    }
}
