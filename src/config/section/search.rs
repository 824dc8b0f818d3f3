//! `[search]` configuration: hosted search integration.
//!
//! The identifiers are opaque strings passed through to the search
//! service; they are checked for presence, never for validity.
//!
//! # Example
//!
//! ```toml
//! [search]
//! app_id = "BH4D9OD16A"
//! api_key = "ee1b8516c9e5a5be9b6c25684eafc42f"
//! index_name = "vue_test_utils"
//! facet_filters = ["tags:next"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// Hosted search parameters (application id, API key, index, facet
/// filters restricting results).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search application id.
    pub app_id: String,

    /// Search-only API key.
    pub api_key: String,

    /// Index to query.
    pub index_name: String,

    /// Facet filters limiting results to matching tagged documents,
    /// each of the form `tag:value`.
    pub facet_filters: Vec<String>,
}

pub struct SearchFields {
    pub app_id: FieldPath,
    pub api_key: FieldPath,
    pub index_name: FieldPath,
    pub facet_filters: FieldPath,
}

impl SearchConfig {
    pub const FIELDS: SearchFields = SearchFields {
        app_id: FieldPath::new("search.app_id"),
        api_key: FieldPath::new("search.api_key"),
        index_name: FieldPath::new("search.index_name"),
        facet_filters: FieldPath::new("search.facet_filters"),
    };

    /// Validate the search section.
    ///
    /// # Checks
    /// - `app_id`, `api_key`, `index_name` non-empty
    /// - `facet_filters` non-empty, each entry `tag:value` shaped
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (value, field) in [
            (&self.app_id, Self::FIELDS.app_id),
            (&self.api_key, Self::FIELDS.api_key),
            (&self.index_name, Self::FIELDS.index_name),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty when [search] is configured");
            }
        }

        if self.facet_filters.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.facet_filters,
                "at least one facet filter is required",
                "e.g.: facet_filters = [\"tags:next\"]",
            );
        }

        for filter in &self.facet_filters {
            if !is_facet_filter(filter) {
                diag.error_with_hint(
                    Self::FIELDS.facet_filters,
                    format!("malformed facet filter '{filter}'"),
                    "use the form \"tag:value\"",
                );
            }
        }
    }
}

/// Facet filters are `tag:value` with both halves non-empty.
fn is_facet_filter(filter: &str) -> bool {
    matches!(filter.split_once(':'), Some((tag, value)) if !tag.is_empty() && !value.is_empty())
}

// ============================================================================
// tests
// ============================================================================
