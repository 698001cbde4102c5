//! Style specification data model
//!
//! A [`StyleSpec`] is declarative configuration: named slots with base
//! tokens, orthogonal variant axes whose values patch slots, an ordered list
//! of compound rules for variant combinations, and default values per axis.
//! It is authored once per widget kind (via the builder or deserialized from
//! data), validated at construction time, and immutable afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// An ordered list of class tokens.
pub type TokenList = Vec<String>;

fn split_classes(classes: &str) -> TokenList {
    classes.split_whitespace().map(str::to_string).collect()
}

/// Matches one axis within a compound rule: either a single value or any of
/// a set of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisMatch {
    /// The selection's value for the axis must equal this value
    Value(String),
    /// The selection's value for the axis must be one of these values
    AnyOf(Vec<String>),
}

impl AxisMatch {
    pub(crate) fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Value(expected) => expected == value,
            Self::AnyOf(values) => values.iter().any(|v| v == value),
        }
    }

    fn values(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::Value(value) => std::slice::from_ref(value).iter(),
            Self::AnyOf(values) => values.iter(),
        }
        .map(String::as_str)
    }
}

/// An override applied only when a combination of axis values holds
/// simultaneously. Rules are layered in declaration order, after single-axis
/// patches and before caller overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundRule {
    /// Axis -> required value(s); every entry must be satisfied
    #[serde(default)]
    pub(crate) when: IndexMap<String, AxisMatch>,
    /// Slot -> tokens appended when the rule matches
    #[serde(default)]
    pub(crate) class: IndexMap<String, TokenList>,
}

impl CompoundRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an axis to equal a single value.
    pub fn when(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.when.insert(axis.into(), AxisMatch::Value(value.into()));
        self
    }

    /// Require an axis to equal any of the given values.
    pub fn when_any(
        mut self,
        axis: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.when.insert(axis.into(), AxisMatch::AnyOf(values));
        self
    }

    /// Append whitespace-separated classes to a slot when the rule matches.
    pub fn class(mut self, slot: impl Into<String>, classes: &str) -> Self {
        self.class.insert(slot.into(), split_classes(classes));
        self
    }

    /// True when every matched axis is satisfied by the filled selection.
    pub(crate) fn matches(&self, filled: &IndexMap<&str, &str>) -> bool {
        self.when.iter().all(|(axis, matcher)| {
            filled
                .get(axis.as_str())
                .is_some_and(|value| matcher.accepts(value))
        })
    }
}

/// A widget kind's complete style specification.
///
/// Construct with [`StyleSpec::builder`] or deserialize from data and call
/// [`StyleSpec::validate`]. Resolution ([`StyleSpec::resolve`]) is a pure
/// function of the spec and the per-call selection, so a `StyleSpec` may be
/// shared freely across threads.
///
/// [`StyleSpec::resolve`]: crate::StyleSpec::resolve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    /// Slot -> base tokens
    #[serde(default)]
    pub(crate) slots: IndexMap<String, TokenList>,
    /// Axis -> value -> slot -> tokens; declaration order is layering order
    #[serde(default)]
    pub(crate) variants: IndexMap<String, IndexMap<String, IndexMap<String, TokenList>>>,
    /// Combination overrides, applied in declaration order
    #[serde(default)]
    pub(crate) compound: Vec<CompoundRule>,
    /// Axis -> value filled in when the selection leaves the axis unset
    #[serde(default)]
    pub(crate) defaults: IndexMap<String, String>,
}

impl StyleSpec {
    pub fn builder() -> StyleSpecBuilder {
        StyleSpecBuilder {
            spec: Self::default(),
        }
    }

    /// Declared slot names, in declaration order.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Declared values for an axis, in declaration order.
    pub fn axis_values(&self, axis: &str) -> Option<impl Iterator<Item = &str>> {
        self.variants
            .get(axis)
            .map(|values| values.keys().map(String::as_str))
    }

    /// The default value for an axis, if one is declared.
    pub fn default_value(&self, axis: &str) -> Option<&str> {
        self.defaults.get(axis).map(String::as_str)
    }

    /// Check cross-references: defaults and compound rules must name
    /// declared axes and values, and every patch must target a declared
    /// slot. Deserialized specs must be validated before use; the builder
    /// validates automatically.
    pub fn validate(&self) -> Result<(), SpecError> {
        for (axis, value) in &self.defaults {
            let Some(values) = self.variants.get(axis) else {
                return Err(SpecError::DefaultUnknownAxis { axis: axis.clone() });
            };
            if !values.contains_key(value) {
                return Err(SpecError::DefaultUnknownValue {
                    axis: axis.clone(),
                    value: value.clone(),
                });
            }
        }
        for (axis, values) in &self.variants {
            for (value, patch) in values {
                for slot in patch.keys() {
                    if !self.slots.contains_key(slot) {
                        return Err(SpecError::VariantUnknownSlot {
                            axis: axis.clone(),
                            value: value.clone(),
                            slot: slot.clone(),
                        });
                    }
                }
            }
        }
        for (index, rule) in self.compound.iter().enumerate() {
            for (axis, matcher) in &rule.when {
                let Some(declared) = self.variants.get(axis) else {
                    return Err(SpecError::CompoundUnknownAxis {
                        rule: index,
                        axis: axis.clone(),
                    });
                };
                for value in matcher.values() {
                    if !declared.contains_key(value) {
                        return Err(SpecError::CompoundUnknownValue {
                            rule: index,
                            axis: axis.clone(),
                            value: value.to_string(),
                        });
                    }
                }
            }
            for slot in rule.class.keys() {
                if !self.slots.contains_key(slot) {
                    return Err(SpecError::CompoundUnknownSlot {
                        rule: index,
                        slot: slot.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Builder for [`StyleSpec`]. Declaration order of slots, axes and values is
/// preserved and significant for layering.
#[derive(Debug, Clone, Default)]
pub struct StyleSpecBuilder {
    spec: StyleSpec,
}

impl StyleSpecBuilder {
    /// Declare a slot with whitespace-separated base classes.
    pub fn slot(mut self, name: impl Into<String>, classes: &str) -> Self {
        self.spec.slots.insert(name.into(), split_classes(classes));
        self
    }

    /// Declare an axis value with no slot patches.
    pub fn variant_value(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.spec
            .variants
            .entry(axis.into())
            .or_default()
            .entry(value.into())
            .or_default();
        self
    }

    /// Declare an axis value with per-slot class patches.
    pub fn variant<'a>(
        mut self,
        axis: impl Into<String>,
        value: impl Into<String>,
        patches: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let patch = self
            .spec
            .variants
            .entry(axis.into())
            .or_default()
            .entry(value.into())
            .or_default();
        for (slot, classes) in patches {
            patch.insert(slot.to_string(), split_classes(classes));
        }
        self
    }

    /// Append a compound rule; rules layer in the order they are added.
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.spec.compound.push(rule);
        self
    }

    /// Set the default value for an axis.
    pub fn default_variant(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.spec.defaults.insert(axis.into(), value.into());
        self
    }

    /// Validate cross-references and produce the immutable spec.
    pub fn build(self) -> Result<StyleSpec, SpecError> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}
