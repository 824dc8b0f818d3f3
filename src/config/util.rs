//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Derive a slash-delimited base path from a deployment URL.
///
/// Uses the `url` crate for proper parsing, handling port numbers, auth
/// info, query strings, and fragments.
///
/// Returns `None` if the URL is invalid.
///
/// # Examples
/// ```ignore
/// url_base_path("https://example.github.io/my-docs/") -> Some("/my-docs/")
/// url_base_path("https://example.github.io/a/b")      -> Some("/a/b/")
/// url_base_path("https://example.com")                -> Some("/")
/// url_base_path("invalid")                            -> None
/// ```
pub fn url_base_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;

    let path = parsed.path().trim_matches('/');
    if path.is_empty() {
        Some("/".to_string())
    } else {
        Some(format!("/{path}/"))
    }
}

/// Find config file by searching upward from `start`.
///
/// Walks up parent directories until finding `config_name`, returning
/// the first match. Absolute `config_name` paths are returned directly
/// when they exist.
///
/// # Example
/// ```text
/// /home/user/portal/docs/guide/  ← start
/// /home/user/portal/portico.toml ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        current = current.parent()?;
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_url_base_path() {
        // Standard GitHub Pages subpath
        assert_eq!(
            url_base_path("https://example.github.io/my-docs/"),
            Some("/my-docs/".to_string())
        );

        // Multiple path components, no trailing slash
        assert_eq!(
            url_base_path("https://example.github.io/a/b"),
            Some("/a/b/".to_string())
        );

        // Root path (no subpath)
        assert_eq!(url_base_path("https://example.com"), Some("/".to_string()));

        // Port and query string are stripped
        assert_eq!(
            url_base_path("https://example.com:8080/docs?lang=ja"),
            Some("/docs/".to_string())
        );

        // Invalid URL (no scheme)
        assert_eq!(url_base_path("invalid-url"), None);
    }

    #[test]
    fn test_find_config_file_upward() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let nested = root.join("docs/guide");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("portico.toml"), "[site]\ntitle = \"T\"\n").unwrap();

        let found = find_config_file(&nested, Path::new("portico.toml")).unwrap();
        assert_eq!(found, root.join("portico.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        // No config anywhere up the chain under a fresh temp dir is not
        // guaranteed, so use an absolute name that cannot exist.
        let name = dir.path().join("does-not-exist.toml");
        assert_eq!(find_config_file(dir.path(), &name), None);
    }
}
