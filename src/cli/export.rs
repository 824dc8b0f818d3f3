//! Export command implementation.
//!
//! Emits the normalized configuration object the external site
//! generator consumes: camelCase keys, head tag descriptors as
//! `[tag, attrs]` pairs, search parameters nested under
//! `themeConfig.algolia`.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::cli::args::ExportArgs;
use crate::config::{LocaleConfig, NavItem, SidebarEntry, SiteConfig};
use crate::log;

/// A head tag descriptor: tag name plus attribute map, serialized as a
/// two-element array.
pub type HeadEntry = (String, BTreeMap<String, String>);

/// The top-level object read by the generator at build time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub title: String,
    pub description: String,
    pub base: String,
    pub locales: BTreeMap<String, LocaleConfig>,
    pub head: Vec<HeadEntry>,
    pub theme_config: ThemeConfig,
}

/// Theme-level block: repository linkage, search, nav, sidebar.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_repo: Option<String>,
    pub docs_dir: String,
    pub docs_branch: String,
    pub edit_links: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algolia: Option<AlgoliaConfig>,
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<SidebarEntry>,
}

/// Search block in the generator's expected shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgoliaConfig {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    pub search_parameters: SearchParameters,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    pub facet_filters: Vec<String>,
}

impl GeneratorConfig {
    /// Build the generator object from a validated config.
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut head = Vec::new();
        if let Some(icon) = &config.site.header.icon {
            head.push((
                "link".to_string(),
                BTreeMap::from([
                    ("rel".to_string(), "icon".to_string()),
                    ("href".to_string(), icon.clone()),
                ]),
            ));
        }
        for element in &config.site.header.elements {
            head.push((element.tag.clone(), element.attrs.clone()));
        }

        let algolia = config.search.as_ref().map(|search| AlgoliaConfig {
            app_id: search.app_id.clone(),
            api_key: search.api_key.clone(),
            index_name: search.index_name.clone(),
            search_parameters: SearchParameters {
                facet_filters: search.facet_filters.clone(),
            },
        });

        Self {
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            base: config.site.base.clone(),
            locales: config.locales.clone(),
            head,
            theme_config: ThemeConfig {
                repo: config.repo.repo.clone(),
                docs_repo: config.repo.docs_repo.clone(),
                docs_dir: config.repo.docs_dir.clone(),
                docs_branch: config.repo.docs_branch.clone(),
                edit_links: config.repo.edit_links,
                algolia,
                nav: config.nav.clone(),
                sidebar: config.sidebar.clone(),
            },
        }
    }
}

/// Execute export command
pub fn run_export(args: &ExportArgs, config: &SiteConfig) -> Result<()> {
    let generator = GeneratorConfig::from_config(config);

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&generator)?
    } else {
        serde_json::to_string(&generator)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("export"; "wrote generator config to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PORTAL_FIXTURE;
    use serde_json::Value as JsonValue;

    fn exported() -> JsonValue {
        let config = SiteConfig::from_str(PORTAL_FIXTURE).unwrap();
        serde_json::to_value(GeneratorConfig::from_config(&config)).unwrap()
    }

    #[test]
    fn test_top_level_shape() {
        let value = exported();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        // preserve_order keeps insertion order, which the generator relies on
        assert_eq!(
            keys,
            vec!["title", "description", "base", "locales", "head", "themeConfig"]
        );
        assert_eq!(value["base"], "/vue-test-utils-docs-ja/");
    }

    #[test]
    fn test_theme_config_keys_are_camel_case() {
        let value = exported();
        let theme = value["themeConfig"].as_object().unwrap();
        for key in [
            "repo",
            "docsRepo",
            "docsDir",
            "docsBranch",
            "editLinks",
            "algolia",
            "nav",
            "sidebar",
        ] {
            assert!(theme.contains_key(key), "missing key {key}");
        }
        assert_eq!(theme["docsBranch"], "main");
        assert_eq!(theme["editLinks"], true);
    }

    #[test]
    fn test_algolia_block() {
        let value = exported();
        let algolia = &value["themeConfig"]["algolia"];
        assert_eq!(algolia["appId"], "BH4D9OD16A");
        assert_eq!(algolia["indexName"], "vue_test_utils");
        assert_eq!(
            algolia["searchParameters"]["facetFilters"],
            serde_json::json!(["tags:next"])
        );
    }

    #[test]
    fn test_algolia_omitted_without_search() {
        let config = SiteConfig::from_str("[site]\ntitle = \"Docs\"").unwrap();
        let value = serde_json::to_value(GeneratorConfig::from_config(&config)).unwrap();
        assert!(value["themeConfig"].get("algolia").is_none());
    }

    #[test]
    fn test_head_entries() {
        let value = exported();
        assert_eq!(
            value["head"],
            serde_json::json!([["link", { "href": "/logo.png", "rel": "icon" }]])
        );
    }

    #[test]
    fn test_sidebar_order_and_shape_survive_export() {
        let value = exported();
        let sidebar = value["themeConfig"]["sidebar"].as_array().unwrap();
        assert_eq!(sidebar.len(), 6);

        // Bare link: only text + link
        assert_eq!(sidebar[0]["text"], "Installation");
        assert_eq!(sidebar[0]["link"], "/installation/");
        assert!(sidebar[0].get("children").is_none());

        // Group: collapsable flag and ordered children
        assert_eq!(sidebar[1]["text"], "Essentials");
        assert_eq!(sidebar[1]["collapsable"], false);
        let children = sidebar[1]["children"].as_array().unwrap();
        assert_eq!(children.len(), 7);
        assert_eq!(children[0]["link"], "/guide/");

        assert_eq!(sidebar[2]["text"], "Vue Test Utils in depth");
        assert_eq!(sidebar[5]["text"], "API Reference");
    }

    #[test]
    fn test_nav_preserves_external_links() {
        let value = exported();
        let nav = value["themeConfig"]["nav"].as_array().unwrap();
        assert_eq!(nav.len(), 5);
        assert_eq!(
            nav[3]["link"],
            "https://github.com/vuejs/test-utils/releases"
        );
    }
}
