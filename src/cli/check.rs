//! Check command implementation.
//!
//! Validation itself runs during config load (all commands get it);
//! this command exists to run it standalone and report a summary.

use anyhow::Result;

use crate::cli::args::CheckArgs;
use crate::config::SiteConfig;
use crate::logger::plural_count;
use crate::{debug, log};

/// Execute check command
pub fn run_check(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    debug!("check"; "config at {}", config.config_path.display());

    let locale_count = config.locales.len();
    let nav_external = config.nav.iter().filter(|item| item.is_external()).count();
    let sidebar_links: usize = config.sidebar.iter().map(|entry| entry.link_count()).sum();

    if args.warn_only {
        log!("check"; "validated with --warn-only (failures demoted to warnings)");
    }

    log!(
        "check";
        "'{}' ok: {}, {} ({} external), {} with {}{}",
        config.site.title,
        plural_count(locale_count, "locale", "locales"),
        plural_count(config.nav.len(), "nav entry", "nav entries"),
        nav_external,
        plural_count(config.sidebar.len(), "sidebar entry", "sidebar entries"),
        plural_count(sidebar_links, "link", "links"),
        if config.search.is_some() {
            ", search enabled"
        } else {
            ""
        }
    );

    Ok(())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::config::{PORTAL_FIXTURE, SiteConfig};

    #[test]
    fn test_summary_counts() {
        let config = SiteConfig::from_str(PORTAL_FIXTURE).unwrap();

        let external = config.nav.iter().filter(|item| item.is_external()).count();
        assert_eq!(external, 2);

        let links: usize = config.sidebar.iter().map(|entry| entry.link_count()).sum();
        // 1 bare + 7 + 11 + 2 + 1 bare + 1 bare
        assert_eq!(links, 23);
    }
}
