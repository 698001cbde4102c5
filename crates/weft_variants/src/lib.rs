//! # Slot/variant style resolution (weft_variants)
//!
//! A widget kind declares a [`StyleSpec`]: named slots with base class
//! tokens, orthogonal variant axes, compound rules for axis combinations,
//! and per-axis defaults. At render time the caller supplies a
//! [`VariantSelection`] (and optional [`SlotOverrides`]) and gets back the
//! final class tokens per slot as [`ResolvedSlots`].
//!
//! ## Example
//!
//! ```
//! use weft_cn::ClassGroups;
//! use weft_variants::{StyleSpec, VariantSelection, SlotOverrides};
//!
//! let spec = StyleSpec::builder()
//!     .slot("icon", "size-5")
//!     .variant("status", "error", [("icon", "text-error-base")])
//!     .variant_value("status", "success")
//!     .default_variant("status", "error")
//!     .build()
//!     .unwrap();
//!
//! let groups = ClassGroups::with_defaults();
//! let resolved = spec
//!     .resolve(&VariantSelection::new(), &SlotOverrides::new(), &groups)
//!     .unwrap();
//! assert_eq!(resolved.class("icon").unwrap(), "size-5 text-error-base");
//! ```

pub mod error;
mod resolve;
mod spec;

pub use error::{InvalidVariantError, SpecError};
pub use resolve::{ResolvedSlots, SlotOverrides, VariantSelection};
pub use spec::{AxisMatch, CompoundRule, StyleSpec, StyleSpecBuilder, TokenList};
