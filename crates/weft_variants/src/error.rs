//! Variant specification and resolution errors

use thiserror::Error;

/// Errors detected while building or validating a [`StyleSpec`].
///
/// [`StyleSpec`]: crate::StyleSpec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// A default variant names an axis that is not declared
    #[error("default variant names undeclared axis `{axis}`")]
    DefaultUnknownAxis { axis: String },

    /// A default variant names a value that is not declared for its axis
    #[error("default variant for axis `{axis}` names undeclared value `{value}`")]
    DefaultUnknownValue { axis: String, value: String },

    /// An axis patch targets a slot that is not declared
    #[error("variant `{axis}`=`{value}` patches undeclared slot `{slot}`")]
    VariantUnknownSlot {
        axis: String,
        value: String,
        slot: String,
    },

    /// A compound rule matches on an axis that is not declared
    #[error("compound rule #{rule} matches undeclared axis `{axis}`")]
    CompoundUnknownAxis { rule: usize, axis: String },

    /// A compound rule matches on a value that is not declared for its axis
    #[error("compound rule #{rule} matches undeclared value `{value}` for axis `{axis}`")]
    CompoundUnknownValue {
        rule: usize,
        axis: String,
        value: String,
    },

    /// A compound rule patches a slot that is not declared
    #[error("compound rule #{rule} patches undeclared slot `{slot}`")]
    CompoundUnknownSlot { rule: usize, slot: String },
}

/// Errors raised when a selection references something the spec does not
/// declare. Raised synchronously at resolution time; the caller decides
/// whether to fall back to defaults or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidVariantError {
    /// The selection names an axis the spec does not declare
    #[error("unknown variant axis `{axis}`")]
    UnknownAxis { axis: String },

    /// The selection names a value not declared for the axis
    #[error("value `{value}` is not declared for variant axis `{axis}`")]
    UnknownValue { axis: String, value: String },
}
