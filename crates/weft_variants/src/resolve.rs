//! Variant resolution
//!
//! Resolution layers tokens per slot in a fixed order: slot base, matching
//! axis patches in declared-axis order, matching compound rules in
//! declaration order, then caller overrides. The layered list is merged
//! through [`ClassGroups`] so a later layer's token supersedes any earlier
//! token in the same conflict group. Later layers therefore win at the token
//! level, not just the list level.

use indexmap::IndexMap;
use tracing::{debug, trace};
use weft_cn::ClassGroups;

use crate::error::InvalidVariantError;
use crate::spec::{StyleSpec, TokenList};

/// A caller's choice of value per axis. Unset axes fall back to the spec's
/// defaults at resolution time; this value is per-call and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSelection(IndexMap<String, String>);

impl VariantSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a value for an axis.
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(axis.into(), value.into());
        self
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.0.get(axis).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariantSelection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Caller-supplied classes appended last to individual slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotOverrides(IndexMap<String, TokenList>);

impl SlotOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append whitespace-separated classes to a slot.
    pub fn slot(mut self, name: impl Into<String>, classes: &str) -> Self {
        self.0.insert(
            name.into(),
            classes.split_whitespace().map(str::to_string).collect(),
        );
        self
    }

    pub fn get(&self, slot: &str) -> Option<&TokenList> {
        self.0.get(slot)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The resolver's output: one merged token list per slot, in slot
/// declaration order. Consumed immediately by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlots(IndexMap<String, TokenList>);

impl ResolvedSlots {
    /// The resolved tokens for a slot.
    pub fn tokens(&self, slot: &str) -> Option<&[String]> {
        self.0.get(slot).map(Vec::as_slice)
    }

    /// The resolved tokens for a slot joined into a class string.
    pub fn class(&self, slot: &str) -> Option<String> {
        self.0.get(slot).map(|tokens| tokens.join(" "))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl StyleSpec {
    /// Resolve the final token list for every slot.
    ///
    /// Axes left unset by `selection` fall back to the spec's defaults.
    /// A selection naming an undeclared axis or value fails with
    /// [`InvalidVariantError`]; typos are never silently ignored.
    ///
    /// Resolution is deterministic and reads no state outside its
    /// arguments, so identical inputs always produce identical output.
    pub fn resolve(
        &self,
        selection: &VariantSelection,
        overrides: &SlotOverrides,
        groups: &ClassGroups,
    ) -> Result<ResolvedSlots, InvalidVariantError> {
        let mut filled: IndexMap<&str, &str> = IndexMap::new();
        for (axis, value) in selection.iter() {
            let Some(declared) = self.variants.get(axis) else {
                return Err(InvalidVariantError::UnknownAxis {
                    axis: axis.to_string(),
                });
            };
            if !declared.contains_key(value) {
                return Err(InvalidVariantError::UnknownValue {
                    axis: axis.to_string(),
                    value: value.to_string(),
                });
            }
            filled.insert(axis, value);
        }
        for (axis, value) in &self.defaults {
            filled.entry(axis.as_str()).or_insert(value.as_str());
        }
        debug!(selection = ?filled, "resolving variant selection");

        let mut resolved = IndexMap::with_capacity(self.slots.len());
        for (slot, base) in &self.slots {
            let mut layered: Vec<&str> = base.iter().map(String::as_str).collect();

            for (axis, values) in &self.variants {
                let Some(&value) = filled.get(axis.as_str()) else {
                    continue;
                };
                if let Some(tokens) = values.get(value).and_then(|patch| patch.get(slot)) {
                    layered.extend(tokens.iter().map(String::as_str));
                }
            }

            for rule in &self.compound {
                if !rule.matches(&filled) {
                    continue;
                }
                if let Some(tokens) = rule.class.get(slot) {
                    layered.extend(tokens.iter().map(String::as_str));
                }
            }

            if let Some(tokens) = overrides.get(slot) {
                layered.extend(tokens.iter().map(String::as_str));
            }

            let merged = groups.merge_tokens(layered);
            trace!(slot = %slot, class = %merged.join(" "), "resolved slot");
            resolved.insert(slot.clone(), merged);
        }
        Ok(ResolvedSlots(resolved))
    }
}
