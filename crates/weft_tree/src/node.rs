//! Widget node tree
//!
//! A [`Node`] is the unit the propagation pass walks: an element carrying an
//! optional role, props and children; a text leaf; or a fragment grouping a
//! sequence of siblings without introducing an element of its own. The tree
//! is plain data produced by an external construction layer and consumed by
//! an external rendering layer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single typed prop value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl PropValue {
    /// The string payload, if this is a string prop.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Ordered prop map attached to an element.
pub type Props = IndexMap<String, PropValue>;

/// An element in the propagation tree.
///
/// The role tags the element's semantic part within a widget; elements with
/// no role are opaque pass-throughs whose children are still traversed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Semantic part identifier, matched against propagation targets
    #[serde(default)]
    pub role: Option<String>,
    /// Local props; these win over shared props on key collision
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A node in the widget tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Element(Element),
    Text(String),
    /// A grouping of siblings with no element of its own; traversed
    /// transparently by propagation
    Fragment(Vec<Node>),
}

impl Node {
    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Fragment(children) => {
                1 + children.iter().map(Self::node_count).sum::<usize>()
            }
            Self::Element(element) => {
                1 + element.children.iter().map(Self::node_count).sum::<usize>()
            }
        }
    }

    /// True when both trees have the same structure: node kinds, roles and
    /// child ordering, ignoring props and text content.
    pub fn same_shape(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(_), Self::Text(_)) => true,
            (Self::Fragment(a), Self::Fragment(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            (Self::Element(a), Self::Element(b)) => {
                a.role == b.role
                    && a.children.len() == b.children.len()
                    && a.children
                        .iter()
                        .zip(&b.children)
                        .all(|(x, y)| x.same_shape(y))
            }
            _ => false,
        }
    }

    /// The element payload, if this node is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// Shorthand for an element node builder.
pub fn element() -> Element {
    Element::new()
}

/// Shorthand for a text leaf.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Shorthand for a fragment grouping siblings.
pub fn fragment(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(children.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count_spans_all_kinds() {
        let tree = fragment([
            text("hello"),
            element()
                .role("icon")
                .child(text("glyph"))
                .into(),
        ]);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_same_shape_ignores_props() {
        let a: Node = element()
            .role("icon")
            .prop("class", "size-5")
            .child(text("x"))
            .into();
        let b: Node = element().role("icon").child(text("y")).into();
        assert!(a.same_shape(&b));
    }

    #[test]
    fn test_same_shape_detects_role_change() {
        let a: Node = element().role("icon").into();
        let b: Node = element().role("close-button").into();
        assert!(!a.same_shape(&b));
    }

    #[test]
    fn test_element_round_trips_through_json() {
        let node: Node = element()
            .role("icon")
            .prop("class", "size-5")
            .prop("decorative", true)
            .into();
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
