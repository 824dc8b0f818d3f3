//! `[site]` configuration: site identity and head tags.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Vue Test Utils"
//! description = "The documentation for the official Vue Test Utils"
//! base = "/vue-test-utils-docs-ja/"
//! url = "https://k-ta-yamada.github.io/vue-test-utils-docs-ja/"
//!
//! [site.header]
//! icon = "/logo.png"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// Site identity: title, description, and the base path the site is
/// served under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetaConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// URL path prefix the site is served under (e.g., "/my-docs/").
    /// Derived from `url` when left empty.
    pub base: String,

    /// Full deployment URL (e.g., "https://acme.github.io/my-docs/").
    pub url: Option<String>,

    /// Custom `<head>` elements (favicon, extra tags).
    pub header: HeaderConfig,
}

pub struct SiteMetaFields {
    pub title: FieldPath,
    pub base: FieldPath,
    pub url: FieldPath,
}

impl Default for SiteMetaConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base: "/".into(),
            url: None,
            header: HeaderConfig::default(),
        }
    }
}

impl SiteMetaConfig {
    pub const FIELDS: SiteMetaFields = SiteMetaFields {
        title: FieldPath::new("site.title"),
        base: FieldPath::new("site.base"),
        url: FieldPath::new("site.url"),
    };

    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` must be non-empty
    /// - `base` must begin and end with `/`
    /// - `url` must be a valid http(s) URL with a host, when present
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title must not be empty",
                "set [site] title, e.g.: \"My Documentation\"",
            );
        }

        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base path '{}' must begin and end with '/'", self.base),
                "use a path like \"/my-docs/\" (or \"/\" for root deployments)",
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}

// ============================================================================
// head tags
// ============================================================================

/// Custom `<head>` elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Favicon href, emitted as a `link rel="icon"` head entry.
    pub icon: Option<String>,

    /// Extra head tags.
    pub elements: Vec<HeadElement>,
}

/// A single head tag descriptor: tag name plus attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadElement {
    /// Tag name (e.g., "meta", "link").
    pub tag: String,

    /// Tag attributes.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn validated(config: &SiteMetaConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag
    }

    fn titled() -> SiteMetaConfig {
        SiteMetaConfig {
            title: "Docs".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_base_is_root() {
        assert_eq!(SiteMetaConfig::default().base, "/");
    }

    #[test]
    fn test_empty_title_rejected() {
        let diag = validated(&SiteMetaConfig::default());
        assert!(diag.has_errors());
    }

    #[test]
    fn test_base_must_be_slash_delimited() {
        let mut config = titled();
        config.base = "/my-docs".into();
        assert!(validated(&config).has_errors());

        config.base = "my-docs/".into();
        assert!(validated(&config).has_errors());

        config.base = "/my-docs/".into();
        assert!(validated(&config).is_empty());
    }

    #[test]
    fn test_url_validation() {
        let mut config = titled();
        config.url = Some("https://acme.github.io/my-docs/".into());
        assert!(validated(&config).is_empty());

        config.url = Some("ftp://acme.dev".into());
        assert!(validated(&config).has_errors());

        config.url = Some("not a url".into());
        assert!(validated(&config).has_errors());
    }

    #[test]
    fn test_head_element_parses() {
        let config: SiteMetaConfig = toml::from_str(
            "title = \"Docs\"\n\
             [header]\n\
             icon = \"/logo.png\"\n\
             [[header.elements]]\n\
             tag = \"meta\"\n\
             attrs = { name = \"theme-color\", content = \"#3eaf7c\" }\n",
        )
        .unwrap();
        assert_eq!(config.header.icon.as_deref(), Some("/logo.png"));
        assert_eq!(config.header.elements[0].tag, "meta");
        assert_eq!(
            config.header.elements[0].attrs.get("name").map(String::as_str),
            Some("theme-color")
        );
    }
}
