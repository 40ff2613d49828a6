//! Lookups over an immutable navigation tree.
//!
//! [`NavMap`] owns the tree supplied at construction and answers read-only
//! queries about it. Every query starts from [`NavMap::resolve_path`], a
//! depth-first pre-order search that returns the urls from a root down to
//! the target. The other queries are views derived from that path.
//!
//! # Url Uniqueness
//!
//! Urls are expected to be unique across the tree. Duplicates are not
//! detected: the first node in pre-order (siblings scanned in order, each
//! subtree searched before the next sibling) wins.
//!
//! # Thread Safety
//!
//! The tree is stored as `Arc<[NavNode]>` and never mutated, so a `NavMap`
//! can be cloned cheaply and shared across threads without locking.

use std::sync::Arc;

use crate::error::NavError;
use crate::node::{NavLink, NavNode};

/// Default `active` flag for [`NavMap::link`].
pub const DEFAULT_LINK_ACTIVE: bool = false;

/// Default last-item flag for [`NavMap::breadcrumb`].
pub const DEFAULT_LAST_ITEM_ACTIVE: bool = true;

/// Immutable navigation tree with url lookups.
#[derive(Clone, Debug, Default)]
pub struct NavMap {
    nodes: Arc<[NavNode]>,
}

impl NavMap {
    /// Create a map that takes ownership of the given root nodes.
    #[must_use]
    pub fn new(nodes: Vec<NavNode>) -> Self {
        Self {
            nodes: nodes.into(),
        }
    }

    /// Root nodes of the tree.
    #[must_use]
    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    /// Find the urls leading from a root node to `url`.
    ///
    /// # Returns
    ///
    /// Ancestor urls followed by `url` itself, or `None` if no node matches.
    #[must_use]
    pub fn resolve_path(&self, url: &str) -> Option<Vec<&str>> {
        // Pushes the match first and ancestors while unwinding.
        fn search<'a>(nodes: &'a [NavNode], url: &str, path: &mut Vec<&'a str>) -> bool {
            for node in nodes {
                if node.url == url || search(&node.children, url, path) {
                    path.push(&node.url);
                    return true;
                }
            }
            false
        }

        let mut path = Vec::new();
        if !search(&self.nodes, url, &mut path) {
            tracing::debug!(url, "Navigation url not found");
            return None;
        }
        path.reverse();

        tracing::trace!(url, depth = path.len(), "Navigation path resolved");
        Some(path)
    }

    /// Get the full node (including children) for `url`.
    ///
    /// Resolves the path first, then walks the tree level by level taking
    /// the first sibling whose url matches each path segment.
    #[must_use]
    pub fn resolve_node(&self, url: &str) -> Option<&NavNode> {
        let path = self.resolve_path(url)?;
        let (target, ancestors) = path.split_last()?;

        let mut level: &[NavNode] = &self.nodes;
        for segment in ancestors {
            level = &level.iter().find(|node| node.url == *segment)?.children;
        }
        level.iter().find(|node| node.url == *target)
    }

    /// Get the link for `url` with the given `active` flag.
    #[must_use]
    pub fn to_link(&self, url: &str, active: bool) -> Option<NavLink> {
        self.resolve_node(url)
            .map(|node| NavLink::from_node(node, active))
    }

    /// Get an inactive link for `url`.
    #[must_use]
    pub fn link(&self, url: &str) -> Option<NavLink> {
        self.to_link(url, DEFAULT_LINK_ACTIVE)
    }

    /// List links to the immediate children of `url`.
    ///
    /// A child is active only if its url equals `active_url`.
    ///
    /// # Returns
    ///
    /// `None` both when `url` is unknown and when its node has no children.
    #[must_use]
    pub fn list_children(&self, url: &str, active_url: Option<&str>) -> Option<Vec<NavLink>> {
        let node = self.resolve_node(url)?;
        if node.is_leaf() {
            tracing::debug!(url, "Navigation node has no children");
            return None;
        }

        node.children
            .iter()
            .map(|child| self.to_link(&child.url, active_url == Some(child.url.as_str())))
            .collect()
    }

    /// List links to the immediate children of `url`, all inactive.
    #[must_use]
    pub fn subnav(&self, url: &str) -> Option<Vec<NavLink>> {
        self.list_children(url, None)
    }

    /// Build breadcrumb links from a root node down to `url`.
    ///
    /// Only the last link can be active, and only if `last_item_is_active`
    /// is set.
    #[must_use]
    pub fn resolve_breadcrumb(
        &self,
        url: &str,
        last_item_is_active: bool,
    ) -> Option<Vec<NavLink>> {
        let path = self.resolve_path(url)?;
        let last = path.len() - 1;

        path.iter()
            .enumerate()
            .map(|(i, segment)| self.to_link(segment, last_item_is_active && i == last))
            .collect()
    }

    /// Build breadcrumb links to `url` with the last link active.
    #[must_use]
    pub fn breadcrumb(&self, url: &str) -> Option<Vec<NavLink>> {
        self.resolve_breadcrumb(url, DEFAULT_LAST_ITEM_ACTIVE)
    }

    /// Like [`NavMap::resolve_node`], but fails with [`NavError::NotFound`].
    pub fn require_node(&self, url: &str) -> Result<&NavNode, NavError> {
        self.resolve_node(url)
            .ok_or_else(|| NavError::not_found(url))
    }

    /// Like [`NavMap::resolve_breadcrumb`], but fails with [`NavError::NotFound`].
    pub fn require_breadcrumb(
        &self,
        url: &str,
        last_item_is_active: bool,
    ) -> Result<Vec<NavLink>, NavError> {
        self.resolve_breadcrumb(url, last_item_is_active)
            .ok_or_else(|| NavError::not_found(url))
    }
}

impl From<Vec<NavNode>> for NavMap {
    fn from(nodes: Vec<NavNode>) -> Self {
        Self::new(nodes)
    }
}
