//! `[[nav]]` configuration: top navigation bar entries.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[nav]]
//! text = "Changelog"
//! link = "https://github.com/acme/docs/releases"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// A single navigation entry: display text plus an internal route or
/// external URL. Declaration order is rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display text.
    pub text: String,

    /// Target link. Internal routes begin with `/`, external links with
    /// `http://` or `https://`.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Whether this entry points outside the site.
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http://") || self.link.starts_with("https://")
    }
}

/// Validate a single text/link pair against a field path.
///
/// Shared by nav and sidebar validation: `text` must be non-empty,
/// `link` must be an internal route (leading `/`) or a well-formed
/// http(s) URL.
pub fn validate_entry(item: &NavItem, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if item.text.trim().is_empty() {
        diag.error(field, "entry text must not be empty");
    }

    if item.link.is_empty() {
        diag.error_with_hint(
            field,
            format!("entry '{}' has an empty link", item.text),
            "use an internal route like \"/guide/\" or a full http(s) URL",
        );
        return;
    }

    if item.link.starts_with('/') {
        return;
    }

    // External links get full URL validation
    match url::Url::parse(&item.link) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        Ok(parsed) => {
            diag.error_with_hint(
                field,
                format!(
                    "link '{}' has unsupported scheme '{}'",
                    item.link,
                    parsed.scheme()
                ),
                "external links must use http or https",
            );
        }
        Err(_) => {
            diag.error_with_hint(
                field,
                format!("link '{}' is neither an internal route nor a URL", item.link),
                "internal routes begin with '/', external links with http(s)://",
            );
        }
    }
}

/// Validate the nav sequence: per-entry rules plus a warning for
/// duplicate targets.
pub fn validate(nav: &[NavItem], diag: &mut ConfigDiagnostics) {
    const FIELD: FieldPath = FieldPath::new("nav");

    for item in nav {
        validate_entry(item, FIELD, diag);
    }

    for (i, item) in nav.iter().enumerate() {
        if nav[..i].iter().any(|other| other.link == item.link) {
            diag.warn(FIELD, format!("duplicate nav link '{}'", item.link));
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn diag_for(items: &[NavItem]) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        validate(items, &mut diag);
        diag
    }

    #[test]
    fn test_valid_entries() {
        let nav = vec![
            NavItem::new("Guide", "/guide/"),
            NavItem::new("API Reference", "/api/"),
            NavItem::new("Changelog", "https://github.com/acme/docs/releases"),
        ];
        assert!(diag_for(&nav).is_empty());
    }

    #[test]
    fn test_empty_text_rejected() {
        let nav = vec![NavItem::new("", "/guide/")];
        assert!(diag_for(&nav).has_errors());
    }

    #[test]
    fn test_empty_link_rejected() {
        let nav = vec![NavItem::new("Guide", "")];
        assert!(diag_for(&nav).has_errors());
    }

    #[test]
    fn test_relative_link_rejected() {
        // Neither internal (leading slash) nor a URL
        let nav = vec![NavItem::new("Guide", "guide/index.html")];
        assert!(diag_for(&nav).has_errors());
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let nav = vec![NavItem::new("Mail", "mailto:docs@acme.dev")];
        assert!(diag_for(&nav).has_errors());
    }

    #[test]
    fn test_duplicate_link_warns() {
        let nav = vec![
            NavItem::new("Guide", "/guide/"),
            NavItem::new("Handbook", "/guide/"),
        ];
        let diag = diag_for(&nav);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_is_external() {
        assert!(NavItem::new("Origin", "https://docs.acme.dev/").is_external());
        assert!(!NavItem::new("Guide", "/guide/").is_external());
    }
}
