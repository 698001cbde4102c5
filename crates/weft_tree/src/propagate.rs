//! Role-targeted shared-prop propagation
//!
//! [`propagate`] clones a tree depth-first and merges a shared prop set into
//! every element whose role is in the target set, leaving all other nodes
//! structurally cloned but otherwise untouched. Fragments and role-less
//! elements are traversed transparently; propagation never stops at them.
//!
//! Each call derives one coordinating identifier from the caller's id seed
//! and attaches it to every matched element, so otherwise-unrelated
//! role-tagged nodes from the same call can reference each other (a label
//! and the element it labels). The input tree is never mutated.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::node::{Element, Node, PropValue, Props};

/// Prop key under which the coordinating identifier is attached to every
/// role-matched element.
pub const COORDINATION_ID_PROP: &str = "coordination-id";

/// The set of roles that receive shared props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(FxHashSet<String>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Derive the coordinating identifier for one propagation call.
///
/// Pure function of the seed (FNV-1a over its bytes), so repeated calls with
/// the same seed coordinate to the same identifier and distinct seeds stay
/// collision-resistant without any process-wide counter.
pub fn coordination_id(seed: &str) -> String {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for byte in seed.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    format!("weft-{hash:016x}")
}

/// Clone `root`, merging `shared` into every element whose role is in
/// `targets`.
///
/// Matched elements get `shared` merged under their local props (local
/// values win on key collision) plus the coordinating identifier derived
/// from `seed`; their children are traversed with the same shared set, since
/// a role-tagged element may contain further role-tagged descendants.
/// Unmatched roles are tolerated silently, as are zero or multiple matches
/// per role.
///
/// Every visited node is treated uniformly, `root` included: a role-tagged
/// root receives the merge too. Callers that want only descendants
/// augmented should pass a [`Fragment`](Node::Fragment) of children, as the
/// widget roots do.
pub fn propagate(root: &Node, shared: &Props, targets: &RoleSet, seed: &str) -> Node {
    let coordination = coordination_id(seed);
    debug!(id = %coordination, "propagating shared props");
    clone_subtree(root, shared, targets, &coordination)
}

fn clone_subtree(node: &Node, shared: &Props, targets: &RoleSet, coordination: &str) -> Node {
    match node {
        Node::Text(content) => Node::Text(content.clone()),
        Node::Fragment(children) => Node::Fragment(
            children
                .iter()
                .map(|child| clone_subtree(child, shared, targets, coordination))
                .collect(),
        ),
        Node::Element(element) => {
            let children = element
                .children
                .iter()
                .map(|child| clone_subtree(child, shared, targets, coordination))
                .collect();

            let matched = element
                .role
                .as_deref()
                .is_some_and(|role| targets.contains(role));

            let props = if matched {
                let mut merged = shared.clone();
                for (key, value) in &element.props {
                    merged.insert(key.clone(), value.clone());
                }
                merged.insert(
                    COORDINATION_ID_PROP.to_string(),
                    PropValue::Str(coordination.to_string()),
                );
                merged
            } else {
                element.props.clone()
            };

            Node::Element(Element {
                role: element.role.clone(),
                props,
                children,
            })
        }
    }
}
