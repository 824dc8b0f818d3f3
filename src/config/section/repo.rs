//! `[repo]` configuration: repository linkage and edit links.
//!
//! # Example
//!
//! ```toml
//! [repo]
//! repo = "k-ta-yamada/vue-test-utils-docs-ja"
//! docs_dir = "docs"
//! docs_branch = "main"
//! edit_links = true
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// Source repository linkage used for "edit this page" links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    /// Source repository: `owner/name` shorthand or full URL.
    pub repo: Option<String>,

    /// Repository holding the docs sources, when different from `repo`.
    pub docs_repo: Option<String>,

    /// Subdirectory containing the docs sources.
    pub docs_dir: String,

    /// Branch edit links point at.
    pub docs_branch: String,

    /// Enable "edit this page" links.
    pub edit_links: bool,
}

pub struct RepoFields {
    pub repo: FieldPath,
    pub docs_repo: FieldPath,
    pub docs_branch: FieldPath,
    pub edit_links: FieldPath,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            repo: None,
            docs_repo: None,
            docs_dir: "docs".into(),
            docs_branch: "main".into(),
            edit_links: false,
        }
    }
}

impl RepoConfig {
    pub const FIELDS: RepoFields = RepoFields {
        repo: FieldPath::new("repo.repo"),
        docs_repo: FieldPath::new("repo.docs_repo"),
        docs_branch: FieldPath::new("repo.docs_branch"),
        edit_links: FieldPath::new("repo.edit_links"),
    };

    /// Repository edit links resolve against: `docs_repo` when set,
    /// otherwise `repo`.
    pub fn resolved_docs_repo(&self) -> Option<&str> {
        self.docs_repo.as_deref().or(self.repo.as_deref())
    }

    /// Validate repository linkage.
    ///
    /// # Checks
    /// - `repo` and `docs_repo` must be `owner/name` shorthand or a
    ///   valid http(s) URL
    /// - `edit_links = true` requires a resolvable docs repo and a
    ///   non-empty branch
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(repo) = &self.repo
            && !is_repo_ref(repo)
        {
            diag.error_with_hint(
                Self::FIELDS.repo,
                format!("'{repo}' is neither owner/name shorthand nor a URL"),
                "use \"owner/name\" or a full https:// repository URL",
            );
        }

        if let Some(docs_repo) = &self.docs_repo
            && !is_repo_ref(docs_repo)
        {
            diag.error_with_hint(
                Self::FIELDS.docs_repo,
                format!("'{docs_repo}' is neither owner/name shorthand nor a URL"),
                "use \"owner/name\" or a full https:// repository URL",
            );
        }

        if self.edit_links {
            if self.resolved_docs_repo().is_none() {
                diag.error_with_hint(
                    Self::FIELDS.edit_links,
                    "edit links are enabled but no repository is configured",
                    "set repo.repo or repo.docs_repo",
                );
            }
            if self.docs_branch.trim().is_empty() {
                diag.error(Self::FIELDS.docs_branch, "docs branch must not be empty");
            }
        }
    }
}

/// A repository reference: `owner/name` shorthand (exactly one slash,
/// both halves non-empty) or an http(s) URL.
fn is_repo_ref(value: &str) -> bool {
    if value.starts_with("http://") || value.starts_with("https://") {
        return url::Url::parse(value).is_ok();
    }

    let mut parts = value.split('/');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
    )
}

// ============================================================================
// tests
// ============================================================================
