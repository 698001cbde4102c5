//! # Weft Widget Library (weft_ui)
//!
//! Widgets here are thin configuration instances of two engines:
//!
//! - **Variant resolution** (`weft_variants` + `weft_cn`): each widget kind
//!   declares a [`StyleSpec`] mapping its slots and variant axes to class
//!   tokens, resolved per render call.
//! - **Shared-prop propagation** (`weft_tree`): a widget root injects its
//!   variant selection into role-tagged descendants, wherever they sit in
//!   the caller's tree.
//!
//! ## Example
//!
//! ```
//! use weft_ui::prelude::*;
//!
//! let node = banner("banner-1")
//!     .variant(BannerVariant::Light)
//!     .status(BannerStatus::Error)
//!     .child(banner_icon().into())
//!     .child(banner_content([text("Something went wrong")]))
//!     .child(banner_close_button().into())
//!     .build()
//!     .unwrap();
//! ```
//!
//! [`StyleSpec`]: weft_variants::StyleSpec

use std::sync::LazyLock;

use weft_cn::ClassGroups;

pub mod banner;
pub mod toast;

/// The shared conflict-group classification for the weft design language.
pub fn class_groups() -> &'static ClassGroups {
    static GROUPS: LazyLock<ClassGroups> = LazyLock::new(ClassGroups::with_defaults);
    &GROUPS
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::banner::{
        banner, banner_close_button, banner_content, banner_icon, Banner, BannerStatus,
        BannerVariant,
    };
    pub use crate::class_groups;
    pub use crate::toast::{ToastOptions, ToastPosition, ToastSink};
    pub use weft_tree::{element, fragment, text, Node, PropValue, Props};
    pub use weft_variants::{SlotOverrides, StyleSpec, VariantSelection};
}
