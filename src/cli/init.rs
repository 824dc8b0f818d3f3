//! Portal initialization.
//!
//! Creates a new portal skeleton: `portico.toml` with a commented
//! template, a `docs/` directory, and ignore files.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::{
    config::{ConfigError, SiteConfig},
    log,
};

/// Default config filename
const CONFIG_FILE: &str = "portico.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Initialization target mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `portico init NAME`: create (or reuse an empty) directory.
    NewDir,
    /// `portico init`: initialize the current directory.
    CurrentDir,
}

/// Create a new portal with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write configuration and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    create_structure(root)?;
    write_config(root)?;
    write_ignore_files(root)?;

    log!("init"; "Portal initialized successfully");
    Ok(())
}

/// Reject targets that would clobber an existing portal.
fn validate_target(root: &Path, mode: InitMode) -> Result<(), ConfigError> {
    match mode {
        InitMode::NewDir => {
            if root.exists() && fs::read_dir(root).map_or(false, |mut dir| dir.next().is_some()) {
                return Err(ConfigError::Validation(format!(
                    "directory '{}' already exists and is not empty",
                    root.display()
                )));
            }
        }
        InitMode::CurrentDir => {
            if root.join(CONFIG_FILE).exists() {
                return Err(ConfigError::Validation(format!(
                    "'{CONFIG_FILE}' already exists in '{}'",
                    root.display()
                )));
            }
        }
    }
    Ok(())
}

/// Create the portal directory structure.
fn create_structure(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("docs"))
        .with_context(|| format!("Failed to create '{}'", root.join("docs").display()))?;
    Ok(())
}

/// Generate portico.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        "\
# Portico configuration file (v{version})
# https://github.com/portico-rs/portico

[site]
title = \"My Documentation\"
description = \"A documentation portal\"
# Path prefix the site is served under; derived from `url` when omitted.
base = \"/\"
# url = \"https://acme.github.io/my-docs/\"

[site.header]
icon = \"/logo.png\"

[locales.\"/\"]
lang = \"en-US\"
title = \"My Documentation\"

[repo]
# repo = \"owner/name\"
docs_dir = \"docs\"
docs_branch = \"main\"
edit_links = false

# Hosted search integration (uncomment to enable)
# [search]
# app_id = \"...\"
# api_key = \"...\"
# index_name = \"...\"
# facet_filters = [\"tags:latest\"]

[[nav]]
text = \"Guide\"
link = \"/guide/\"

[[sidebar]]
text = \"Guide\"
collapsable = false
children = [
    {{ text = \"Getting Started\", link = \"/guide/\" }},
]
",
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Write default portico.toml configuration
fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
fn write_ignore_files(root: &Path) -> Result<()> {
    let content = ".DS_Store\n";

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_without_unknown_fields() {
        let template = generate_config_template();
        let (config, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {ignored:?}");
        assert_eq!(config.site.title, "My Documentation");
    }

    #[test]
    fn test_template_validates_cleanly() {
        let template = generate_config_template();
        let config = SiteConfig::from_str(&template).unwrap();
        let diag = config.collect_diagnostics();
        assert!(diag.is_empty(), "template has errors: {diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_target_new_dir() {
        let dir = tempfile::tempdir().unwrap();

        // Nonexistent target is fine
        assert!(validate_target(&dir.path().join("portal"), InitMode::NewDir).is_ok());

        // Existing empty dir is fine
        assert!(validate_target(dir.path(), InitMode::NewDir).is_ok());

        // Non-empty dir is rejected
        fs::write(dir.path().join("stray.txt"), "x").unwrap();
        assert!(validate_target(dir.path(), InitMode::NewDir).is_err());
    }

    #[test]
    fn test_validate_target_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_target(dir.path(), InitMode::CurrentDir).is_ok());

        fs::write(dir.path().join(CONFIG_FILE), "[site]\n").unwrap();
        assert!(validate_target(dir.path(), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_init_writes_structure_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("portal");

        create_structure(&root).unwrap();
        write_config(&root).unwrap();
        write_ignore_files(&root).unwrap();

        assert!(root.join("docs").is_dir());
        assert!(root.join(CONFIG_FILE).is_file());
        assert!(root.join(".gitignore").is_file());
        assert!(root.join(".ignore").is_file());

        // The written config must load back
        let content = fs::read_to_string(root.join(CONFIG_FILE)).unwrap();
        assert!(SiteConfig::from_str(&content).is_ok());
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "custom\n").unwrap();

        write_ignore_files(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(content, "custom\n");
    }
}
