//! Configuration check.

use crate::config::{Brand, Registry};
use crate::log;
use crate::utils::plural_count;
use anyhow::Result;

/// Print a summary of a loaded registry.
///
/// Loading already validated it, so reaching this point means the
/// configuration is usable.
pub fn check_config(registry: &Registry) -> Result<()> {
    for line in summary(registry) {
        log!("check"; "{}", line);
    }
    log!("check"; "ok");
    Ok(())
}

fn summary(registry: &Registry) -> Vec<String> {
    let site = registry.site();
    let active = registry.active_socials().count();
    let total = registry.socials().len();

    let brand = match registry.brand() {
        Brand::Image { src, width, height, .. } => format!("logo {src} ({width}x{height})"),
        Brand::Text { title } => format!("text \"{title}\""),
    };

    vec![
        format!("site: {} <{}>", site.title, site.website),
        format!(
            "listing: {} per page, scheduled margin {}ms",
            plural_count(site.posts_per_page.get(), "post"),
            site.scheduled_post_margin_ms
        ),
        format!(
            "locale: lang=\"{}\" tags={:?}",
            registry.locale().html_lang(),
            registry.locale().effective_tags()
        ),
        format!("brand: {brand}"),
        format!("socials: {active} active of {}", plural_count(total, "link")),
    ]
}
