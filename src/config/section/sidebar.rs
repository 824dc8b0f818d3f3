//! `[[sidebar]]` configuration: hierarchical sidebar entries.
//!
//! A sidebar entry is either a bare link or a collapsible group of
//! links. Declaration order is rendering order, for groups and for the
//! links inside them.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! text = "Installation"
//! link = "/installation/"
//!
//! [[sidebar]]
//! text = "Essentials"
//! collapsable = false
//! children = [
//!     { text = "Getting Started", link = "/guide/" },
//!     { text = "A Crash Course", link = "/guide/essentials/a-crash-course" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use super::nav::{NavItem, validate_entry};
use crate::config::types::{ConfigDiagnostics, FieldPath};

/// A sidebar entry: a group of links or a single link.
///
/// Untagged on the wire; the presence of `children` selects the group
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Collapsible section containing ordered links.
    Group {
        /// Section heading.
        text: String,

        /// Whether the section starts collapsed. The generator default
        /// is collapsible, so absent means `true`.
        #[serde(default = "default_collapsable")]
        collapsable: bool,

        /// Ordered links within the section.
        children: Vec<NavItem>,
    },

    /// A bare link at the top level of the sidebar.
    Link(NavItem),
}

const fn default_collapsable() -> bool {
    true
}

impl SidebarEntry {
    /// Section heading or link text.
    pub fn text(&self) -> &str {
        match self {
            Self::Group { text, .. } => text,
            Self::Link(item) => &item.text,
        }
    }

    /// Number of links this entry contributes.
    pub fn link_count(&self) -> usize {
        match self {
            Self::Group { children, .. } => children.len(),
            Self::Link(_) => 1,
        }
    }
}

/// Validate the sidebar sequence.
pub fn validate(sidebar: &[SidebarEntry], diag: &mut ConfigDiagnostics) {
    const FIELD: FieldPath = FieldPath::new("sidebar");

    for entry in sidebar {
        match entry {
            SidebarEntry::Link(item) => validate_entry(item, FIELD, diag),
            SidebarEntry::Group { text, children, .. } => {
                if text.trim().is_empty() {
                    diag.error(FIELD, "group text must not be empty");
                }
                if children.is_empty() {
                    diag.error_with_hint(
                        FIELD,
                        format!("group '{text}' has no children"),
                        "add at least one { text, link } entry or make it a bare link",
                    );
                }
                for child in children {
                    validate_entry(child, FIELD, diag);
                }
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Vec<SidebarEntry> {
        #[derive(Deserialize)]
        struct Wrapper {
            sidebar: Vec<SidebarEntry>,
        }
        toml::from_str::<Wrapper>(toml).unwrap().sidebar
    }

    #[test]
    fn test_bare_link_parses_as_link() {
        let entries = parse("[[sidebar]]\ntext = \"Installation\"\nlink = \"/installation/\"\n");
        assert_eq!(
            entries,
            vec![SidebarEntry::Link(NavItem::new(
                "Installation",
                "/installation/"
            ))]
        );
    }

    #[test]
    fn test_group_parses_with_default_collapsable() {
        let entries = parse(
            "[[sidebar]]\n\
             text = \"Essentials\"\n\
             children = [{ text = \"Getting Started\", link = \"/guide/\" }]\n",
        );
        match &entries[0] {
            SidebarEntry::Group {
                text,
                collapsable,
                children,
            } => {
                assert_eq!(text, "Essentials");
                assert!(*collapsable);
                assert_eq!(children.len(), 1);
            }
            SidebarEntry::Link(_) => panic!("expected group"),
        }
    }

    #[test]
    fn test_declaration_order_preserved() {
        let entries = parse(
            "[[sidebar]]\ntext = \"Installation\"\nlink = \"/installation/\"\n\
             [[sidebar]]\ntext = \"Essentials\"\ncollapsable = false\n\
             children = [{ text = \"Getting Started\", link = \"/guide/\" }]\n\
             [[sidebar]]\ntext = \"In depth\"\ncollapsable = false\n\
             children = [{ text = \"Slots\", link = \"/guide/advanced/slots\" }]\n",
        );
        let texts: Vec<_> = entries.iter().map(SidebarEntry::text).collect();
        assert_eq!(texts, vec!["Installation", "Essentials", "In depth"]);
    }

    #[test]
    fn test_empty_group_rejected() {
        let entries = vec![SidebarEntry::Group {
            text: "Essentials".into(),
            collapsable: false,
            children: vec![],
        }];
        let mut diag = ConfigDiagnostics::new();
        validate(&entries, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_child_link_rules_enforced() {
        let entries = vec![SidebarEntry::Group {
            text: "Essentials".into(),
            collapsable: false,
            children: vec![NavItem::new("Broken", "no-slash")],
        }];
        let mut diag = ConfigDiagnostics::new();
        validate(&entries, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_link_count() {
        let group = SidebarEntry::Group {
            text: "Essentials".into(),
            collapsable: false,
            children: vec![
                NavItem::new("A", "/a/"),
                NavItem::new("B", "/b/"),
            ],
        };
        assert_eq!(group.link_count(), 2);
        assert_eq!(
            SidebarEntry::Link(NavItem::new("X", "/x/")).link_count(),
            1
        );
    }
}
