//! `[locales]` configuration: per-locale site metadata.
//!
//! Locales are keyed by the URL path prefix they are served under; the
//! root locale uses `/`. Duplicate keys are rejected by the TOML parser
//! itself, so only key shape and tag shape are validated here.
//!
//! # Example
//!
//! ```toml
//! [locales."/"]
//! lang = "en-US"
//! title = "Vue Test Utils"
//!
//! [locales."/ja/"]
//! lang = "ja-JP"
//! title = "Vue Test Utils"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// Language and display title for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Language tag (e.g., "en-US", "ja").
    pub lang: String,

    /// Locale-specific site title.
    pub title: String,
}

/// Locale mapping, keyed by URL path prefix.
pub type LocaleMap = BTreeMap<String, LocaleConfig>;

const FIELD: FieldPath = FieldPath::new("locales");

/// Validate the locale mapping.
///
/// # Checks
/// - every key begins and ends with `/`
/// - every `lang` looks like a language tag (`xx` or `xx-YY`)
/// - a warning when the root locale `/` is absent
pub fn validate(locales: &LocaleMap, diag: &mut ConfigDiagnostics) {
    for (key, locale) in locales {
        if !key.starts_with('/') || !key.ends_with('/') {
            diag.error_with_hint(
                FIELD,
                format!("locale key '{key}' must begin and end with '/'"),
                "use a path prefix like \"/\" or \"/ja/\"",
            );
        }

        if !is_lang_tag(&locale.lang) {
            diag.error_with_hint(
                FIELD,
                format!("locale '{key}' has malformed language tag '{}'", locale.lang),
                "use a tag like \"en\", \"en-US\", or \"zh-Hans\"",
            );
        }

        if locale.title.trim().is_empty() {
            diag.error(FIELD, format!("locale '{key}' has an empty title"));
        }
    }

    if !locales.is_empty() && !locales.contains_key("/") {
        diag.warn(FIELD, "no root locale '/' defined".to_string());
    }
}

/// Loose language tag shape check: a 2-3 letter lowercase primary
/// subtag, optionally followed by alphanumeric subtags of 2-8 chars.
fn is_lang_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');

    let Some(primary) = parts.next() else {
        return false;
    };
    if !(2..=3).contains(&primary.len())
        || !primary.chars().all(|c| c.is_ascii_lowercase())
    {
        return false;
    }

    parts.all(|part| (2..=8).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphanumeric()))
}

// ============================================================================
// tests
// ============================================================================
