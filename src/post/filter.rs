//! Post visibility and ordering.

use super::PostMeta;
use crate::config::Registry;
use crate::utils::DateTimeUtc;
use std::cmp::Reverse;

/// Decides which posts appear in listings.
///
/// A post is listed once `now >= pubDatetime + margin`. Drafts are hidden
/// unless `include_drafts` is set; `preview` ignores the margin so
/// scheduled posts can be checked before they go live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostFilter {
    pub now: DateTimeUtc,
    pub margin_ms: u64,
    pub include_drafts: bool,
    pub preview: bool,
}

impl PostFilter {
    /// Filter using the registry's scheduled post margin.
    pub fn new(registry: &Registry, now: DateTimeUtc) -> Self {
        Self {
            now,
            margin_ms: registry.site().scheduled_post_margin_ms,
            include_drafts: false,
            preview: false,
        }
    }

    pub fn with_drafts(mut self, include: bool) -> Self {
        self.include_drafts = include;
        self
    }

    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Whether the post's scheduled window has passed.
    pub fn is_published(&self, post: &PostMeta) -> bool {
        let margin = i64::try_from(self.margin_ms).unwrap_or(i64::MAX);
        let visible_at = post.pub_datetime.to_unix_millis().saturating_add(margin);
        self.now.to_unix_millis() >= visible_at
    }

    pub fn is_visible(&self, post: &PostMeta) -> bool {
        if post.draft && !self.include_drafts {
            return false;
        }
        self.preview || self.is_published(post)
    }

    /// Visible posts, sorted newest first.
    pub fn apply<'a>(&self, posts: &'a [PostMeta]) -> Vec<&'a PostMeta> {
        let mut visible: Vec<_> = posts.iter().filter(|p| self.is_visible(p)).collect();
        sort_posts(&mut visible);
        visible
    }
}

/// Sort newest first by `modDatetime`, falling back to `pubDatetime`.
///
/// Ties keep their input order.
pub fn sort_posts<P: AsRef<PostMeta>>(posts: &mut [P]) {
    posts.sort_by_key(|p| Reverse(p.as_ref().updated()));
}

impl AsRef<PostMeta> for PostMeta {
    fn as_ref(&self) -> &PostMeta {
        self
    }
}
