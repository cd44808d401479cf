//! Papersite - site configuration registry for a static blog.
//!
//! Parses `site.toml` into validated, immutable descriptors (site, locale,
//! logo, social links) and derives the values listings need from them:
//! pagination, scheduled-post visibility and the JSON build artifact.

pub mod cli;
pub mod config;
pub mod embed;
pub mod logger;
pub mod post;
pub mod utils;
