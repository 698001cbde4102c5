//! # Widget tree and shared-prop propagation (weft_tree)
//!
//! Widgets are trees of [`Node`] values: elements with an optional semantic
//! role, text leaves, and transparent fragments. A widget root shares state
//! with its role-tagged descendants by calling [`propagate`], which clones
//! the tree and merges the shared props into every element whose role is in
//! the target set, regardless of where it sits in the structure.
//!
//! ```
//! use weft_tree::{element, fragment, propagate, Props, RoleSet};
//!
//! let children = fragment([element().role("icon").into()]);
//! let mut shared = Props::default();
//! shared.insert("status".to_string(), "error".into());
//! let targets: RoleSet = ["icon"].into_iter().collect();
//!
//! let out = propagate(&children, &shared, &targets, "banner-1");
//! assert!(children.same_shape(&out));
//! ```

mod node;
mod propagate;

pub use node::{element, fragment, text, Element, Node, PropValue, Props};
pub use propagate::{coordination_id, propagate, RoleSet, COORDINATION_ID_PROP};
