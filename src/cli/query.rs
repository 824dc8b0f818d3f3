//! Query command implementation.
//!
//! Prints the loaded configuration (or selected top-level fields) as
//! JSON, for scripting against the config without a TOML parser.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::log;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let value = serde_json::to_value(config)?;

    let output = if let Some(ref fields) = args.fields {
        filter_fields(&value, fields, args.filter_empty)
    } else if args.filter_empty {
        prune_empty(value)
    } else {
        value
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Filter to specific top-level fields, preserving request order
fn filter_fields(value: &JsonValue, fields: &[String], filter_empty: bool) -> JsonValue {
    let mut obj = Map::new();

    if let JsonValue::Object(source) = value {
        for field in fields {
            match source.get(field) {
                Some(v) if !filter_empty || !is_empty_value(v) => {
                    obj.insert(field.clone(), v.clone());
                }
                // Field explicitly requested but absent - show null when not filtering
                None if !filter_empty => {
                    obj.insert(field.clone(), JsonValue::Null);
                }
                _ => {}
            }
        }
    }

    JsonValue::Object(obj)
}

/// Recursively drop null/empty values from objects
fn prune_empty(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(obj) => JsonValue::Object(
            obj.into_iter()
                .map(|(k, v)| (k, prune_empty(v)))
                .filter(|(_, v)| !is_empty_value(v))
                .collect(),
        ),
        JsonValue::Array(arr) => JsonValue::Array(arr.into_iter().map(prune_empty).collect()),
        other => other,
    }
}

/// Check if a JSON value is considered "empty" (null, "", [] or {})
fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(arr) => arr.is_empty(),
        JsonValue::Object(obj) => obj.is_empty(),
        _ => false,
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PORTAL_FIXTURE, SiteConfig};

    fn portal_json() -> JsonValue {
        let config = SiteConfig::from_str(PORTAL_FIXTURE).unwrap();
        serde_json::to_value(&config).unwrap()
    }

    #[test]
    fn test_config_serializes_with_section_keys() {
        let value = portal_json();
        let obj = value.as_object().unwrap();
        for key in ["site", "locales", "repo", "search", "nav", "sidebar"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        // Internal fields never leak into output
        assert!(!obj.contains_key("config_path"));
        assert!(!obj.contains_key("root"));
    }

    #[test]
    fn test_filter_fields() {
        let value = portal_json();
        let filtered = filter_fields(&value, &["site".into(), "nav".into()], false);
        let obj = filtered.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["nav"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_filter_fields_missing_is_null() {
        let value = portal_json();
        let filtered = filter_fields(&value, &["missing".into()], false);
        assert_eq!(filtered["missing"], JsonValue::Null);

        let filtered = filter_fields(&value, &["missing".into()], true);
        assert!(filtered.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_prune_empty() {
        let value = serde_json::json!({
            "title": "Docs",
            "url": null,
            "tags": [],
            "nested": { "empty": "" },
        });
        let pruned = prune_empty(value);
        let obj = pruned.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["title"], "Docs");
    }

    #[test]
    fn test_is_empty_value() {
        assert!(is_empty_value(&JsonValue::Null));
        assert!(is_empty_value(&serde_json::json!("")));
        assert!(is_empty_value(&serde_json::json!([])));
        assert!(!is_empty_value(&serde_json::json!(false)));
        assert!(!is_empty_value(&serde_json::json!("x")));
    }
}
