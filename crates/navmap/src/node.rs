//! Navigation map data types.
//!
//! [`NavNode`] is one entry of the navigation tree as supplied by the
//! embedding application. [`NavLink`] is the flattened view handed back
//! to UI code: label, url and an `active` marker, never children.

use serde::{Deserialize, Serialize};

/// Node of the navigation tree.
///
/// A node with no `children` key and a node with an empty `children` list
/// are both leaves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    /// Display label.
    pub label: String,
    /// Page url. Expected to be unique across the whole tree.
    pub url: String,
    /// Child nodes in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Create a leaf node.
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            children: Vec::new(),
        }
    }

    /// Attach child nodes.
    #[must_use]
    pub fn with_children(mut self, children: Vec<NavNode>) -> Self {
        self.children = children;
        self
    }

    /// True if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Navigation link without children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Link target url.
    pub url: String,
    /// Whether this link is the current page.
    pub active: bool,
}

impl NavLink {
    /// Build a link from a node, dropping its children.
    #[must_use]
    pub fn from_node(node: &NavNode, active: bool) -> Self {
        Self {
            label: node.label.clone(),
            url: node.url.clone(),
            active,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    #[test]
    fn test_new_node_is_leaf() {
        let node = NavNode::new("Guide", "/guide");

        assert_eq!(node.label, "Guide");
        assert_eq!(node.url, "/guide");
        assert!(node.is_leaf());
    }

    #[test]
    fn test_with_children_stores_children() {
        let node = NavNode::new("Guide", "/guide")
            .with_children(vec![NavNode::new("Setup", "/guide/setup")]);

        assert!(!node.is_leaf());
        assert_eq!(node.children[0].url, "/guide/setup");
    }

    #[test]
    fn test_link_from_node_drops_children() {
        let node = NavNode::new("Guide", "/guide")
            .with_children(vec![NavNode::new("Setup", "/guide/setup")]);

        let link = NavLink::from_node(&node, true);

        assert_eq!(
            link,
            NavLink {
                label: "Guide".to_owned(),
                url: "/guide".to_owned(),
                active: true,
            }
        );
    }

    #[test]
    fn test_link_serialization_has_no_children_field() {
        let node = NavNode::new("Guide", "/guide")
            .with_children(vec![NavNode::new("Setup", "/guide/setup")]);

        let json = serde_json::to_value(NavLink::from_node(&node, false)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "label": "Guide", "url": "/guide", "active": false })
        );
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_leaf_serialization_skips_children() {
        let json = serde_json::to_value(NavNode::new("Guide", "/guide")).unwrap();

        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_deserialize_json_missing_and_empty_children_are_leaves() {
        let json = r#"[
            { "label": "A", "url": "/a" },
            { "label": "B", "url": "/b", "children": [] }
        ]"#;

        let nodes: Vec<NavNode> = serde_json::from_str(json).unwrap();

        assert_eq!(nodes, vec![NavNode::new("A", "/a"), NavNode::new("B", "/b")]);
    }

    #[test]
    fn test_deserialize_yaml_nested_tree() {
        let yaml = "
- label: Section B
  url: /section-b
  children:
    - label: Page A
      url: /section-b/page-a
";

        let nodes: Vec<NavNode> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            nodes,
            vec![
                NavNode::new("Section B", "/section-b")
                    .with_children(vec![NavNode::new("Page A", "/section-b/page-a")])
            ]
        );
    }

    #[test]
    fn test_deserialize_toml_array_of_tables() {
        #[derive(Deserialize)]
        struct MapFile {
            nodes: Vec<NavNode>,
        }

        let toml = r#"
[[nodes]]
label = "Section A"
url = "/section-a"

[[nodes]]
label = "Section B"
url = "/section-b"

[[nodes.children]]
label = "Page A"
url = "/section-b/page-a"
"#;

        let file: MapFile = toml::from_str(toml).unwrap();

        assert_eq!(file.nodes.len(), 2);
        assert!(file.nodes[0].is_leaf());
        assert_eq!(file.nodes[1].children[0].url, "/section-b/page-a");
    }
}
