//! Immutable, shareable configuration handle.
//!
//! A [`Registry`] is built once from a validated [`SiteConfig`] and handed to
//! every consumer. Cloning is an `Arc` bump; there is no way to mutate the
//! wrapped values afterwards.

use super::{LocaleConfig, LogoConfig, SiteConfig, SiteInfoConfig, SocialLink};
use crate::config::section::Brand;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Read-only view of the site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    inner: Arc<SiteConfig>,
}

impl Registry {
    /// Finalize and validate `config`, then freeze it.
    pub fn new(mut config: SiteConfig) -> Result<Self> {
        config.finalize();
        config.validate()?;
        Ok(Self {
            inner: Arc::new(config),
        })
    }

    /// Find, load and validate a config file (see [`SiteConfig::load`]).
    pub fn load(config_name: &Path) -> Result<Self> {
        let config = SiteConfig::load(config_name)?;
        Ok(Self {
            inner: Arc::new(config),
        })
    }

    /// The bundled example configuration.
    pub fn example() -> Result<Self> {
        Self::new(SiteConfig::example()?)
    }

    #[inline]
    pub fn site(&self) -> &SiteInfoConfig {
        &self.inner.site
    }

    #[inline]
    pub fn locale(&self) -> &LocaleConfig {
        &self.inner.locale
    }

    #[inline]
    pub fn logo(&self) -> &LogoConfig {
        &self.inner.logo
    }

    /// All social links, in declared order.
    #[inline]
    pub fn socials(&self) -> &[SocialLink] {
        &self.inner.socials
    }

    /// Social links to render, in declared order.
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.inner.active_socials()
    }

    /// Copy without inactive social links.
    ///
    /// Dropping entries cannot invalidate a validated config, so no
    /// checks run and no warnings are printed again.
    pub fn active_only(&self) -> Self {
        let mut config = SiteConfig::clone(&self.inner);
        config.socials.retain(|link| link.active);
        Self {
            inner: Arc::new(config),
        }
    }

    pub fn brand(&self) -> Brand {
        self.inner.brand()
    }

    /// The underlying configuration.
    #[inline]
    pub fn config(&self) -> &SiteConfig {
        &self.inner
    }
}
