//! Post frontmatter.

use crate::config::SiteInfoConfig;
use crate::utils::DateTimeUtc;
use serde::{Deserialize, Serialize};

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Post metadata as written in frontmatter or a posts manifest.
///
/// | Field          | Type             | Description                         |
/// |----------------|------------------|-------------------------------------|
/// | `title`        | `String`         | Post title                          |
/// | `slug`         | `String`         | URL segment under `/posts/`         |
/// | `author`       | `Option<String>` | Falls back to the site author       |
/// | `pubDatetime`  | `DateTimeUtc`    | Publication time                    |
/// | `modDatetime`  | `Option<..>`     | Last modification time              |
/// | `featured`     | `bool`           | Listed in the featured section      |
/// | `draft`        | `bool`           | Hidden from listings                |
/// | `tags`         | `Vec<String>`    | Categorization tags                 |
/// | `ogImage`      | `Option<String>` | Overrides the site OG image         |
/// | `description`  | `String`         | Summary for listings and meta tags  |
/// | `canonicalURL` | `Option<String>` | Canonical link override             |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub pub_datetime: DateTimeUtc,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_datetime: Option<DateTimeUtc>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(
        default,
        rename = "canonicalURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub canonical_url: Option<String>,
}

impl PostMeta {
    pub fn new(title: impl Into<String>, pub_datetime: DateTimeUtc) -> Self {
        Self {
            title: title.into(),
            slug: String::new(),
            author: None,
            pub_datetime,
            mod_datetime: None,
            featured: false,
            draft: false,
            tags: Vec::new(),
            og_image: None,
            description: String::new(),
            canonical_url: None,
        }
    }

    /// Time used for ordering: modification time when present.
    #[inline]
    pub fn updated(&self) -> DateTimeUtc {
        self.mod_datetime.unwrap_or(self.pub_datetime)
    }

    /// Post author, or the site author when unset.
    pub fn author_or<'a>(&'a self, site: &'a SiteInfoConfig) -> &'a str {
        self.author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(&site.author)
    }

    /// Site-relative URL, e.g. `/posts/hello-world/`.
    pub fn permalink(&self) -> String {
        format!("/posts/{}/", self.slug.trim_matches('/'))
    }
}
