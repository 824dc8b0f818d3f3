//! Configuration section definitions.
//!
//! Each submodule owns one section of `portico.toml`:
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[site]`     | Site identity (title, description, base, head)   |
//! | `[locales]`  | Per-locale language and title, keyed by prefix   |
//! | `[repo]`     | Repository linkage and edit links                |
//! | `[search]`   | Hosted search parameters (optional)              |
//! | `[[nav]]`    | Top navigation bar entries                       |
//! | `[[sidebar]]`| Grouped, collapsible sidebar entries             |

pub mod locales;
pub mod nav;
pub mod repo;
pub mod search;
pub mod sidebar;
pub mod site;

pub use locales::{LocaleConfig, LocaleMap};
pub use nav::NavItem;
pub use repo::RepoConfig;
pub use search::SearchConfig;
pub use sidebar::SidebarEntry;
pub use site::{HeadElement, HeaderConfig, SiteMetaConfig};
