//! Shared helpers: dates and pluralized log wording.

pub mod date;
mod plural;

pub use date::DateTimeUtc;
pub use plural::{plural_count, plural_s};
