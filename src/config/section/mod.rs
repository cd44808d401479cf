//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module   | TOML Section  | Purpose                                  |
//! |----------|---------------|------------------------------------------|
//! | `site`   | `[site]`      | Identity, pagination, scheduled posts    |
//! | `locale` | `[locale]`    | Html lang and date-formatting tags       |
//! | `logo`   | `[logo]`      | Header logo image or text title          |
//! | `social` | `[[socials]]` | Ordered social links and platforms       |

pub mod locale;
mod logo;
pub mod site;
mod social;

pub use locale::LocaleConfig;
pub use logo::{Brand, LogoConfig};
pub use site::SiteInfoConfig;
pub use social::{Platform, SocialLink, check_duplicates};
