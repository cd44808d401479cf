//! `[locale]` configuration: html `lang` and date-formatting tags.
//!
//! # Example
//!
//! ```toml
//! [locale]
//! lang = "en"           # empty means "en"
//! lang_tag = ["en-EN"]  # empty means environment default
//! ```

use crate::config::ConfigDiagnostics;
use crate::utils::DateTimeUtc;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Fallback for both `lang` and the effective tag list.
pub const DEFAULT_LANG: &str = "en";

/// Environment variables consulted for the default tag, highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Locale settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "locale")]
pub struct LocaleConfig {
    /// Html lang code. Leave empty to use "en".
    pub lang: String,

    /// BCP 47 language tags for date formatting. Leave empty to use the environment default.
    pub lang_tag: Vec<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.into(),
            lang_tag: Vec::new(),
        }
    }
}

impl LocaleConfig {
    /// Value for `<html lang="...">`.
    pub fn html_lang(&self) -> &str {
        match self.lang.trim() {
            "" => DEFAULT_LANG,
            lang => lang,
        }
    }

    /// Tags used for date formatting.
    ///
    /// Returns `lang_tag` when configured, otherwise the process locale
    /// (`LC_ALL`, `LC_MESSAGES`, `LANG`), otherwise `"en"`. Never fails.
    pub fn effective_tags(&self) -> Vec<String> {
        self.effective_tags_with(|key| std::env::var(key).ok())
    }

    /// [`effective_tags`](Self::effective_tags) with an injectable environment.
    pub fn effective_tags_with(&self, env: impl Fn(&str) -> Option<String>) -> Vec<String> {
        if !self.lang_tag.is_empty() {
            return self.lang_tag.clone();
        }

        let from_env = LOCALE_ENV_VARS
            .iter()
            .filter_map(|key| env(key))
            .find_map(|value| posix_to_bcp47(&value));

        vec![from_env.unwrap_or_else(|| DEFAULT_LANG.to_string())]
    }

    /// Date as shown in post listings, e.g. `"Jun 15, 2024"`.
    ///
    /// Month names are English regardless of tag.
    pub fn format_date(&self, dt: DateTimeUtc) -> String {
        format!("{} {}, {}", dt.month_short(), dt.day, dt.year)
    }

    /// Time as shown in post listings, e.g. `"02:30 PM"`.
    pub fn format_time(&self, dt: DateTimeUtc) -> String {
        let (hour, suffix) = match dt.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{hour:02}:{:02} {suffix}", dt.minute)
    }

    /// `"<date> | <time>"`.
    pub fn format_datetime(&self, dt: DateTimeUtc) -> String {
        format!("{} | {}", self.format_date(dt), self.format_time(dt))
    }

    /// Validate locale configuration.
    ///
    /// # Checks
    /// - `lang` is empty or a well-formed BCP 47 tag
    /// - each `lang_tag` entry is a well-formed BCP 47 tag
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let lang = self.lang.trim();
        if !lang.is_empty() && !is_bcp47_tag(lang) {
            diag.error_with_hint(
                Self::FIELDS.lang,
                format!("'{lang}' is not a valid language code"),
                "use a code like \"en\" or \"zh-Hans\"",
            );
        }

        for (i, tag) in self.lang_tag.iter().enumerate() {
            if !is_bcp47_tag(tag) {
                diag.error_with_hint(
                    Self::FIELDS.lang_tag.indexed(i),
                    format!("'{tag}' is not a valid BCP 47 tag"),
                    "use a tag like \"en-US\", or [] for the environment default",
                );
            }
        }
    }
}

/// Well-formedness check for a BCP 47 tag.
///
/// The primary subtag is 2-8 letters, or `x`/`i` (private use and
/// grandfathered) followed by at least one subtag. Every following subtag
/// is 1-8 alphanumerics.
pub fn is_bcp47_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-').peekable();

    let valid_primary = match subtags.next() {
        Some("x" | "X" | "i" | "I") => subtags.peek().is_some(),
        Some(primary) => {
            (2..=8).contains(&primary.len()) && primary.bytes().all(|b| b.is_ascii_alphabetic())
        }
        None => false,
    };

    valid_primary
        && subtags.all(|sub| {
            (1..=8).contains(&sub.len()) && sub.bytes().all(|b| b.is_ascii_alphanumeric())
        })
}

/// Convert a POSIX locale (`en_US.UTF-8`, `de_DE@euro`) to a BCP 47 tag.
///
/// Returns `None` for `C`, `POSIX`, empty values, and anything that does
/// not yield a well-formed tag.
pub fn posix_to_bcp47(value: &str) -> Option<String> {
    let base = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }

    let tag = base.replace('_', "-");
    is_bcp47_tag(&tag).then_some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_html_lang_fallback() {
        let locale = LocaleConfig {
            lang: String::new(),
            lang_tag: vec![],
        };
        assert_eq!(locale.html_lang(), "en");

        let locale = LocaleConfig {
            lang: "fr".into(),
            lang_tag: vec![],
        };
        assert_eq!(locale.html_lang(), "fr");
    }

    #[test]
    fn test_configured_tags_win() {
        let locale = LocaleConfig {
            lang: "en".into(),
            lang_tag: vec!["en-EN".into(), "en-US".into()],
        };
        let tags = locale.effective_tags_with(|_| Some("de_DE.UTF-8".into()));
        assert_eq!(tags, ["en-EN", "en-US"]);
    }

    #[test]
    fn test_empty_tags_use_environment() {
        let locale = LocaleConfig::default();
        let tags = locale.effective_tags_with(|key| match key {
            "LANG" => Some("pt_BR.UTF-8".into()),
            _ => None,
        });
        assert_eq!(tags, ["pt-BR"]);
    }

    #[test]
    fn test_env_priority() {
        let locale = LocaleConfig::default();
        let tags = locale.effective_tags_with(|key| match key {
            "LC_ALL" => Some("C".into()),
            "LC_MESSAGES" => Some("ja_JP.UTF-8".into()),
            "LANG" => Some("en_GB.UTF-8".into()),
            _ => None,
        });
        // C is skipped, LC_MESSAGES comes next
        assert_eq!(tags, ["ja-JP"]);
    }

    #[test]
    fn test_empty_tags_without_environment() {
        let locale = LocaleConfig::default();
        assert_eq!(locale.effective_tags_with(no_env), ["en"]);
    }

    #[test]
    fn test_effective_tags_never_empty() {
        let locale = LocaleConfig::default();
        assert!(!locale.effective_tags().is_empty());
    }

    #[test]
    fn test_posix_to_bcp47() {
        assert_eq!(posix_to_bcp47("en_US.UTF-8").as_deref(), Some("en-US"));
        assert_eq!(posix_to_bcp47("de_DE@euro").as_deref(), Some("de-DE"));
        assert_eq!(posix_to_bcp47("fr").as_deref(), Some("fr"));
        assert_eq!(posix_to_bcp47("C.UTF-8"), None);
        assert_eq!(posix_to_bcp47("POSIX"), None);
        assert_eq!(posix_to_bcp47(""), None);
    }

    #[test]
    fn test_is_bcp47_tag() {
        for tag in ["en", "en-EN", "zh-Hans", "zh-Hant-TW", "es-419", "x-private"] {
            assert!(is_bcp47_tag(tag), "{tag} should be valid");
        }
        for tag in ["", "e", "en-", "en--US", "en_US", "toolonglang", "en-abcdefghi", "1en"] {
            assert!(!is_bcp47_tag(tag), "{tag} should be invalid");
        }
    }

    #[test]
    fn test_singleton_primary_needs_subtag() {
        for tag in ["x", "X", "i", "I"] {
            assert!(!is_bcp47_tag(tag), "{tag} should be invalid");
        }
        assert!(is_bcp47_tag("i-klingon"));
        assert!(is_bcp47_tag("x-a"));
    }

    #[test]
    fn test_validate_reports_indexed_tag() {
        let locale = LocaleConfig {
            lang: "en".into(),
            lang_tag: vec!["en-US".into(), "en_US".into()],
        };
        let mut diag = ConfigDiagnostics::new();
        locale.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "locale.lang_tag[1]");
    }

    #[test]
    fn test_format_datetime() {
        let locale = LocaleConfig::default();
        let dt = DateTimeUtc::new(2024, 6, 15, 14, 5, 0);
        assert_eq!(locale.format_date(dt), "Jun 15, 2024");
        assert_eq!(locale.format_time(dt), "02:05 PM");
        assert_eq!(locale.format_datetime(dt), "Jun 15, 2024 | 02:05 PM");

        let midnight = DateTimeUtc::from_ymd(2024, 1, 1);
        assert_eq!(locale.format_time(midnight), "12:00 AM");
    }
}
