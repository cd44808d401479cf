//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a config field, used to point diagnostics at `site.toml`.
///
/// Static paths come from the `Config` derive (`SiteInfoConfig::FIELDS.website`).
/// Array elements get their index at runtime via [`FieldPath::indexed`]
/// and [`FieldPath::entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(std::borrow::Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(path))
    }

    /// Path of one element of an array field, e.g. `locale.lang_tag[1]`.
    pub fn indexed(&self, index: usize) -> Self {
        Self(std::borrow::Cow::Owned(format!("{}[{index}]", self.0)))
    }

    /// Path of a field inside one entry of an array-of-tables, e.g. `socials[2].href`.
    ///
    /// `self` must be a field of the array section (`socials.href`).
    pub fn entry(&self, index: usize) -> Self {
        let path = match self.0.split_once('.') {
            Some((section, field)) => format!("{section}[{index}].{field}"),
            None => format!("{}[{index}]", self.0),
        };
        Self(std::borrow::Cow::Owned(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
