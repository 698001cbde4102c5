//! Class-token merging with conflict groups
//!
//! Style tokens are opaque strings naming an atomic style rule. Some tokens
//! conflict: they set the same underlying visual property (two background
//! colors, two opacities). [`ClassGroups`] classifies a token into a conflict
//! group; [`ClassGroups::merge`] then merges token lists left to right so
//! that within each group the latest-supplied token wins.
//!
//! Classification is advisory: a token with no registered group always passes
//! through unmodified, so the style layer stays extensible without
//! registering every token.
//!
//! # Example
//!
//! ```
//! use weft_cn::ClassGroups;
//!
//! let groups = ClassGroups::with_defaults();
//! let merged = groups.merge(["size-5 text-error-base", "text-success-base"]);
//! assert_eq!(merged, "size-5 text-success-base");
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

mod defaults;

pub use defaults::TYPOGRAPHY_GROUPS;

/// Maps class tokens to conflict-group keys.
///
/// A token is classified first by exact match, then by the longest
/// registered prefix. Tokens that match nothing have no group and are never
/// removed during merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassGroups {
    /// Exact token -> group key
    exact: FxHashMap<String, String>,
    /// (prefix, group key); longest matching prefix wins
    prefixes: Vec<(String, String)>,
}

impl ClassGroups {
    /// Create an empty classification with no registered groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classification preloaded with the weft design-language
    /// groups: utility prefixes (background, text color, opacity, sizing,
    /// spacing, radius) and the dynamically generated typography patterns.
    pub fn with_defaults() -> Self {
        defaults::class_groups()
    }

    /// Register a set of exact tokens under a conflict-group key.
    pub fn group(
        mut self,
        key: impl Into<String>,
        tokens: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let key = key.into();
        for token in tokens {
            self.exact.insert(token.into(), key.clone());
        }
        self
    }

    /// Register a token prefix under a conflict-group key.
    ///
    /// When multiple prefixes match a token, the longest one decides the
    /// group (so `px-` beats `p-` for `px-3`).
    pub fn prefix_group(mut self, key: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.prefixes.push((prefix.into(), key.into()));
        self
    }

    /// Classify a token into its conflict-group key, if it has one.
    pub fn group_of(&self, token: &str) -> Option<&str> {
        if let Some(group) = self.exact.get(token) {
            return Some(group);
        }
        self.prefixes
            .iter()
            .filter(|(prefix, _)| token.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, group)| group.as_str())
    }

    /// Merge whitespace-separated class strings left to right into a single
    /// class string. See [`ClassGroups::merge_tokens`] for the semantics.
    pub fn merge<'a>(&self, sources: impl IntoIterator<Item = &'a str>) -> String {
        self.merge_tokens(sources.into_iter().flat_map(str::split_whitespace))
            .join(" ")
    }

    /// Merge individual tokens left to right.
    ///
    /// A token appearing later always supersedes any earlier token sharing
    /// its conflict-group key; the superseding token takes the removed
    /// token's position so output stays order-stable and diffable. Tokens
    /// with no group pass through; exact duplicate strings collapse to their
    /// first occurrence.
    pub fn merge_tokens<'a>(&self, tokens: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        // group key -> index of the current winner in `out`
        let mut winners: FxHashMap<String, usize> = FxHashMap::default();
        // ungrouped token -> index of its first occurrence
        let mut seen: FxHashMap<String, usize> = FxHashMap::default();

        for token in tokens {
            if token.is_empty() {
                continue;
            }
            match self.group_of(token) {
                Some(group) => {
                    if let Some(&index) = winners.get(group) {
                        out[index] = token.to_string();
                    } else {
                        winners.insert(group.to_string(), out.len());
                        out.push(token.to_string());
                    }
                }
                None => {
                    if !seen.contains_key(token) {
                        seen.insert(token.to_string(), out.len());
                        out.push(token.to_string());
                    }
                }
            }
        }
        out
    }
}
