//! Read-only lookups over a static site navigation map.
//!
//! This crate provides:
//! - [`NavNode`]: Navigation tree node as supplied by the application
//! - [`NavMap`]: Immutable tree with path, node, link, subnav and breadcrumb lookups
//! - [`NavLink`]: Flattened link view with an `active` marker
//!
//! # Quick Start
//!
//! ```
//! use navmap::{NavLink, NavMap, NavNode};
//!
//! let map = NavMap::new(vec![
//!     NavNode::new("Home", "/"),
//!     NavNode::new("Guide", "/guide").with_children(vec![
//!         NavNode::new("Setup", "/guide/setup"),
//!     ]),
//! ]);
//!
//! assert_eq!(map.resolve_path("/guide/setup"), Some(vec!["/guide", "/guide/setup"]));
//!
//! let crumbs = map.breadcrumb("/guide/setup").unwrap();
//! assert!(!crumbs[0].active);
//! assert!(crumbs[1].active);
//!
//! let subnav = map.list_children("/guide", Some("/guide/setup")).unwrap();
//! assert_eq!(
//!     subnav,
//!     vec![NavLink {
//!         label: "Setup".to_owned(),
//!         url: "/guide/setup".to_owned(),
//!         active: true,
//!     }]
//! );
//!
//! assert!(map.link("/missing").is_none());
//! ```

mod error;
mod nav_map;
mod node;

pub use error::NavError;
pub use nav_map::{DEFAULT_LAST_ITEM_ACTIVE, DEFAULT_LINK_ACTIVE, NavMap};
pub use node::{NavLink, NavNode};
