//! Toast wrapper
//!
//! The notification queue itself is an external collaborator reached through
//! the [`ToastSink`] trait; this module only owns the option defaults and
//! the caller-wins merge applied before delegating. Rendering a toast body
//! reuses the same [`Node`] trees as every other widget.
//!
//! # Example
//!
//! ```
//! use weft_ui::toast::{self, ToastOptions, ToastPosition, ToastSink, ToastId};
//! use weft_tree::{text, Node};
//!
//! struct NullSink;
//! impl ToastSink for NullSink {
//!     fn custom(&self, _render: &dyn Fn(ToastId) -> Node, _options: ToastOptions) -> ToastId {
//!         0
//!     }
//! }
//!
//! let id = toast::custom(&NullSink, |_| text("Saved"), ToastOptions::new());
//! assert_eq!(id, 0);
//! ```

use serde::{Deserialize, Serialize};
use weft_tree::Node;

/// Handle to a queued toast, issued by the external queue.
pub type ToastId = u64;

/// Screen position of the toast stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

/// Per-toast presentation options. Unset fields fall back to
/// [`default_options`] when queued through [`custom`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ToastOptions {
    /// Extra classes for the toast container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ToastPosition>,
    /// How long the toast stays on screen; `None` leaves the queue's policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Field-wise merge where `self`'s set fields win over `base`.
    pub fn merged_over(self, base: &Self) -> Self {
        Self {
            class: self.class.or_else(|| base.class.clone()),
            position: self.position.or(base.position),
            duration_ms: self.duration_ms.or(base.duration_ms),
        }
    }
}

/// The weft defaults applied to every toast queued through [`custom`].
pub fn default_options() -> ToastOptions {
    ToastOptions::new()
        .class("group/toast")
        .position(ToastPosition::BottomCenter)
}

/// Call contract of the external notification queue.
///
/// `render` receives the issued [`ToastId`] so the toast body can reference
/// its own handle (to dismiss itself, for instance).
pub trait ToastSink {
    fn custom(&self, render: &dyn Fn(ToastId) -> Node, options: ToastOptions) -> ToastId;
}

/// Queue a custom-rendered toast with the weft defaults merged under the
/// caller's options.
pub fn custom<S: ToastSink + ?Sized>(
    sink: &S,
    render: impl Fn(ToastId) -> Node,
    options: ToastOptions,
) -> ToastId {
    sink.custom(&render, options.merged_over(&default_options()))
}
