//! Portal configuration management for `portico.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site] and [site.header]
//! │   ├── locales    # [locales] mapping
//! │   ├── repo       # [repo]
//! │   ├── search     # [search]
//! │   ├── nav        # [[nav]]
//! │   └── sidebar    # [[sidebar]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration is parsed once, validated as a whole (all errors
//! collected before failing), and never mutated afterwards. The external
//! generator consumes the normalized form produced by `export`.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, url_base_path};

// Re-export from section/
pub use section::{
    HeadElement, HeaderConfig, LocaleConfig, LocaleMap, NavItem, RepoConfig, SearchConfig,
    SidebarEntry, SiteMetaConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing portico.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Portal root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity (title, description, base, head tags)
    pub site: SiteMetaConfig,

    /// Locale mapping, keyed by URL path prefix
    pub locales: LocaleMap,

    /// Repository linkage and edit links
    pub repo: RepoConfig,

    /// Hosted search parameters (optional)
    pub search: Option<SearchConfig>,

    /// Top navigation bar entries, in rendering order
    pub nav: Vec<NavItem>,

    /// Sidebar entries, in rendering order
    pub sidebar: Vec<SidebarEntry>,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the
    /// config file. The portal root is the config file's parent.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'portico init' to create a new portal.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate(cli.warn_only())?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cwd, &cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        // Resolve root path
        let root = match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => std::env::current_dir().unwrap_or_default().join(name),
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        self.set_root(&root);

        self.sync_base_from_url();
    }

    /// Derive `site.base` from `site.url`.
    ///
    /// When the base is left at the root default, the URL's path
    /// component becomes the base, so subdirectory deployments (e.g.
    /// GitHub Pages project sites) need only the deployment URL.
    fn sync_base_from_url(&mut self) {
        if self.site.base == "/"
            && let Some(ref url) = self.site.url
            && let Some(base) = url_base_path(url)
        {
            self.site.base = base;
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (portico.toml) since it's always at the root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Collects all validation errors and returns them at once;
    /// `warn_only` demotes errors to warnings.
    pub fn validate(&self, warn_only: bool) -> Result<()> {
        let mut diag = self.collect_diagnostics();

        if warn_only {
            diag.demote_errors();
        }

        // Print collected warnings (grouped display)
        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section validator, collecting diagnostics.
    pub fn collect_diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        section::locales::validate(&self.locales, &mut diag);
        self.repo.validate(&mut diag);
        if let Some(search) = &self.search {
            search.validate(&mut diag);
        }
        section::nav::validate(&self.nav, &mut diag);
        section::sidebar::validate(&self.sidebar, &mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The translated Vue Test Utils portal, transcribed section for
/// section. Exercises every entity the schema defines.
#[cfg(test)]
pub const PORTAL_FIXTURE: &str = r#"
[site]
title = "Vue Test Utils"
description = "The documentation for the official Vue Test Utils"
base = "/vue-test-utils-docs-ja/"

[site.header]
icon = "/logo.png"

[locales."/"]
lang = "en-US"
title = "Vue Test Utils"

[repo]
repo = "k-ta-yamada/vue-test-utils-docs-ja"
docs_repo = "k-ta-yamada/vue-test-utils-docs-ja"
docs_dir = "docs"
docs_branch = "main"
edit_links = true

[search]
app_id = "BH4D9OD16A"
api_key = "ee1b8516c9e5a5be9b6c25684eafc42f"
index_name = "vue_test_utils"
facet_filters = ["tags:next"]

[[nav]]
text = "Guide"
link = "/guide/"

[[nav]]
text = "API Reference"
link = "/api/"

[[nav]]
text = "Migrating from Vue 2"
link = "/migration/"

[[nav]]
text = "Changelog"
link = "https://github.com/vuejs/test-utils/releases"

[[nav]]
text = "Origin"
link = "https://test-utils.vuejs.org/"

[[sidebar]]
text = "Installation"
link = "/installation/"

[[sidebar]]
text = "Essentials"
collapsable = false
children = [
    { text = "Getting Started", link = "/guide/" },
    { text = "A Crash Course", link = "/guide/essentials/a-crash-course" },
    { text = "Conditional Rendering", link = "/guide/essentials/conditional-rendering" },
    { text = "Testing Emitted Events", link = "/guide/essentials/event-handling" },
    { text = "Testing Forms", link = "/guide/essentials/forms" },
    { text = "Passing Data to Components", link = "/guide/essentials/passing-data" },
    { text = "Write components that are easy to test", link = "/guide/essentials/easy-to-test" },
]

[[sidebar]]
text = "Vue Test Utils in depth"
collapsable = false
children = [
    { text = "Slots", link = "/guide/advanced/slots" },
    { text = "Asynchronous Behavior", link = "/guide/advanced/async-suspense" },
    { text = "Making HTTP Requests", link = "/guide/advanced/http-requests" },
    { text = "Transitions", link = "/guide/advanced/transitions" },
    { text = "Component Instance", link = "/guide/advanced/component-instance" },
    { text = "Reusability and Composition", link = "/guide/advanced/reusability-composition" },
    { text = "Testing v-model", link = "/guide/advanced/v-model" },
    { text = "Testing Vuex", link = "/guide/advanced/vuex" },
    { text = "Testing Vue Router", link = "/guide/advanced/vue-router" },
    { text = "Testing Teleport", link = "/guide/advanced/teleport" },
    { text = "Stubs and Shallow Mount", link = "/guide/advanced/stubs-shallow-mount" },
]

[[sidebar]]
text = "Extending Vue Test Utils"
collapsable = false
children = [
    { text = "Plugins", link = "/guide/extending-vtu/plugins" },
    { text = "Community and Learning", link = "/guide/extending-vtu/community-learning" },
]

[[sidebar]]
text = "Migrating from Vue 2"
link = "/migration/"

[[sidebar]]
text = "API Reference"
link = "/api/"
"#;

// ============================================================================
// tests
// ============================================================================
