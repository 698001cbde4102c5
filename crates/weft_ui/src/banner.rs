//! Dismissible banner widget
//!
//! The banner is a configuration instance of the variant and propagation
//! engines: a four-slot [`StyleSpec`] over two axes (visual emphasis and
//! semantic status), and a root builder that shares its selection with the
//! icon and close-button roles wherever the caller placed them.
//!
//! # Example
//!
//! ```
//! use weft_ui::banner::{banner, banner_close_button, banner_content, banner_icon};
//! use weft_ui::banner::{BannerStatus, BannerVariant};
//! use weft_tree::text;
//!
//! let node = banner("upgrade-notice")
//!     .variant(BannerVariant::Lighter)
//!     .status(BannerStatus::Information)
//!     .child(banner_icon().into())
//!     .child(banner_content([text("A new version is available")]))
//!     .child(banner_close_button().into())
//!     .build()
//!     .unwrap();
//! ```

use std::sync::LazyLock;

use tracing::debug;
use weft_tree::{element, fragment, propagate, Element, Node, PropValue, Props, RoleSet};
use weft_variants::{CompoundRule, InvalidVariantError, SlotOverrides, StyleSpec, VariantSelection};

use crate::class_groups;

/// Role carried by the banner root element.
pub const BANNER_ROOT_ROLE: &str = "banner-root";
/// Role carried by the centered content area.
pub const BANNER_CONTENT_ROLE: &str = "banner-content";
/// Role carried by the status icon; receives shared props.
pub const BANNER_ICON_ROLE: &str = "banner-icon";
/// Role carried by the dismiss control; receives shared props.
pub const BANNER_CLOSE_BUTTON_ROLE: &str = "banner-close-button";

/// Visual emphasis level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerVariant {
    #[default]
    Filled,
    Light,
    Lighter,
    Stroke,
}

impl BannerVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Light => "light",
            Self::Lighter => "lighter",
            Self::Stroke => "stroke",
        }
    }
}

/// Semantic status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerStatus {
    Error,
    Warning,
    Success,
    Information,
    #[default]
    Feature,
}

impl BannerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Information => "information",
            Self::Feature => "feature",
        }
    }
}

/// (status value, color palette) pairs for the status/variant matrix.
const STATUS_PALETTES: &[(&str, &str)] = &[
    ("error", "error"),
    ("warning", "warning"),
    ("success", "success"),
    ("information", "information"),
    ("feature", "faded"),
];

fn build_banner_spec() -> StyleSpec {
    let mut builder = StyleSpec::builder()
        .slot(
            "root",
            "relative grid h-11 w-full grid-cols-[1fr,auto,1fr] items-center justify-center gap-3 px-3",
        )
        .slot("content", "col-start-2 flex items-center justify-center gap-3")
        .slot("icon", "size-5 shrink-0")
        .slot("close_button", "ml-auto size-5")
        .variant_value("variant", "filled")
        .variant_value("variant", "light")
        .variant_value("variant", "lighter")
        .variant(
            "variant",
            "stroke",
            [(
                "root",
                "bg-bg-white-0 text-text-strong-950 before:absolute before:bottom-0 before:h-px before:w-full before:bg-stroke-soft-200",
            )],
        );
    for &(status, _) in STATUS_PALETTES {
        builder = builder.variant_value("status", status);
    }

    builder = builder
        .compound(
            CompoundRule::new()
                .when("variant", "filled")
                .class("close_button", "opacity-[.72]"),
        )
        .compound(
            CompoundRule::new()
                .when_any("variant", ["light", "lighter", "stroke"])
                .class("close_button", "opacity-[.48]"),
        );

    for &(status, palette) in STATUS_PALETTES {
        builder = builder
            .compound(
                CompoundRule::new()
                    .when("variant", "filled")
                    .when("status", status)
                    .class("icon", "text-static-white")
                    .class("root", &format!("bg-{palette}-base text-static-white")),
            )
            .compound(
                CompoundRule::new()
                    .when("variant", "light")
                    .when("status", status)
                    .class("icon", &format!("text-{palette}-base"))
                    .class("root", &format!("bg-{palette}-light text-text-strong-950")),
            )
            .compound(
                CompoundRule::new()
                    .when("variant", "lighter")
                    .when("status", status)
                    .class("icon", &format!("text-{palette}-base"))
                    .class(
                        "root",
                        &format!("bg-{palette}-lighter text-text-strong-950"),
                    ),
            )
            .compound(
                CompoundRule::new()
                    .when("variant", "stroke")
                    .when("status", status)
                    .class("icon", &format!("text-{palette}-base")),
            );
    }

    builder
        .default_variant("variant", "filled")
        .default_variant("status", "feature")
        .build()
        .unwrap_or_else(|err| panic!("banner style spec is invalid: {err}"))
}

/// The banner's style specification; built once and shared for the process
/// lifetime.
pub fn banner_spec() -> &'static StyleSpec {
    static SPEC: LazyLock<StyleSpec> = LazyLock::new(build_banner_spec);
    &SPEC
}

fn banner_targets() -> &'static RoleSet {
    static TARGETS: LazyLock<RoleSet> = LazyLock::new(|| {
        [BANNER_ICON_ROLE, BANNER_CLOSE_BUTTON_ROLE]
            .into_iter()
            .collect()
    });
    &TARGETS
}

fn slot_for_role(role: &str) -> Option<&'static str> {
    match role {
        BANNER_ROOT_ROLE => Some("root"),
        BANNER_CONTENT_ROLE => Some("content"),
        BANNER_ICON_ROLE => Some("icon"),
        BANNER_CLOSE_BUTTON_ROLE => Some("close_button"),
        _ => None,
    }
}

/// Banner root builder.
///
/// `build` resolves the root slot eagerly and bakes the final class string
/// into the root's props; role-tagged descendants receive the variant
/// selection through propagation and resolve their own slots at render time
/// via [`slot_class`].
#[derive(Debug, Clone)]
pub struct Banner {
    variant: BannerVariant,
    status: BannerStatus,
    class: Option<String>,
    id_seed: String,
    children: Vec<Node>,
}

/// Create a banner root. The id seed coordinates role-tagged descendants of
/// this banner instance; distinct banner instances should use distinct
/// seeds.
pub fn banner(id_seed: impl Into<String>) -> Banner {
    Banner {
        variant: BannerVariant::default(),
        status: BannerStatus::default(),
        class: None,
        id_seed: id_seed.into(),
        children: Vec::new(),
    }
}

impl Banner {
    /// Set the visual emphasis level.
    pub fn variant(mut self, variant: BannerVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the semantic status.
    pub fn status(mut self, status: BannerStatus) -> Self {
        self.status = status;
        self
    }

    /// Append caller classes to the root slot; these win over every
    /// spec-supplied layer per conflict group.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Resolve the root slot and propagate the selection into icon and
    /// close-button descendants, producing the banner's node tree.
    pub fn build(self) -> Result<Node, InvalidVariantError> {
        let selection = VariantSelection::new()
            .set("variant", self.variant.as_str())
            .set("status", self.status.as_str());
        let mut overrides = SlotOverrides::new();
        if let Some(class) = &self.class {
            overrides = overrides.slot("root", class);
        }
        let resolved = banner_spec().resolve(&selection, &overrides, class_groups())?;
        let root_class = resolved.class("root").unwrap_or_default();
        debug!(variant = self.variant.as_str(), status = self.status.as_str(), "building banner");

        let mut shared = Props::default();
        shared.insert("variant".to_string(), self.variant.as_str().into());
        shared.insert("status".to_string(), self.status.as_str().into());

        let propagated = propagate(
            &fragment(self.children),
            &shared,
            banner_targets(),
            &self.id_seed,
        );
        let children = match propagated {
            Node::Fragment(children) => children,
            other => vec![other],
        };

        Ok(element()
            .role(BANNER_ROOT_ROLE)
            .prop("variant", self.variant.as_str())
            .prop("status", self.status.as_str())
            .prop("class", root_class)
            .children(children)
            .into())
    }
}

/// The centered content area. Not a propagation target; resolves its slot
/// from defaults at render time.
pub fn banner_content(children: impl IntoIterator<Item = Node>) -> Node {
    element()
        .role(BANNER_CONTENT_ROLE)
        .children(children)
        .into()
}

/// The status icon. Receives the banner's selection through propagation.
pub fn banner_icon() -> Element {
    element().role(BANNER_ICON_ROLE)
}

/// The dismiss control. Receives the banner's selection through propagation.
pub fn banner_close_button() -> Element {
    element().role(BANNER_CLOSE_BUTTON_ROLE)
}

/// Resolve the class string for a banner part from its (post-propagation)
/// props. This is the rendering layer's entry point for role-tagged
/// descendants; the root's class is already final in its props.
///
/// Returns `Ok(None)` for roles the banner spec does not know.
pub fn slot_class(role: &str, props: &Props) -> Result<Option<String>, InvalidVariantError> {
    let Some(slot) = slot_for_role(role) else {
        return Ok(None);
    };
    let mut selection = VariantSelection::new();
    if let Some(variant) = props.get("variant").and_then(PropValue::as_str) {
        selection = selection.set("variant", variant);
    }
    if let Some(status) = props.get("status").and_then(PropValue::as_str) {
        selection = selection.set("status", status);
    }
    let mut overrides = SlotOverrides::new();
    if let Some(class) = props.get("class").and_then(PropValue::as_str) {
        overrides = overrides.slot(slot, class);
    }
    let resolved = banner_spec().resolve(&selection, &overrides, class_groups())?;
    Ok(resolved.class(slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builds_and_validates() {
        let spec = banner_spec();
        assert_eq!(spec.slot_names().count(), 4);
        assert_eq!(spec.default_value("variant"), Some("filled"));
        assert_eq!(spec.default_value("status"), Some("feature"));
    }

    #[test]
    fn test_filled_error_root_class() {
        let node = banner("b")
            .variant(BannerVariant::Filled)
            .status(BannerStatus::Error)
            .build()
            .unwrap();
        let root = node.as_element().unwrap();
        let class = root.props.get("class").unwrap().as_str().unwrap();
        assert!(class.contains("bg-error-base"));
        assert!(class.contains("text-static-white"));
        assert!(class.starts_with("relative grid h-11 w-full"));
    }

    #[test]
    fn test_default_selection_is_filled_feature() {
        let node = banner("b").build().unwrap();
        let root = node.as_element().unwrap();
        let class = root.props.get("class").unwrap().as_str().unwrap();
        assert!(class.contains("bg-faded-base"));
    }

    #[test]
    fn test_stroke_variant_patches_root() {
        let node = banner("b")
            .variant(BannerVariant::Stroke)
            .status(BannerStatus::Error)
            .build()
            .unwrap();
        let root = node.as_element().unwrap();
        let class = root.props.get("class").unwrap().as_str().unwrap();
        assert!(class.contains("bg-bg-white-0"));
        assert!(class.contains("before:bg-stroke-soft-200"));
        // stroke+error patches the icon only, not the root background
        assert!(!class.contains("bg-error-base"));
    }

    #[test]
    fn test_caller_class_overrides_root_background() {
        let node = banner("b")
            .variant(BannerVariant::Filled)
            .status(BannerStatus::Error)
            .class("bg-static-black")
            .build()
            .unwrap();
        let root = node.as_element().unwrap();
        let class = root.props.get("class").unwrap().as_str().unwrap();
        assert!(class.contains("bg-static-black"));
        assert!(!class.contains("bg-error-base"));
    }

    #[test]
    fn test_icon_resolves_from_propagated_props() {
        let node = banner("b")
            .variant(BannerVariant::Light)
            .status(BannerStatus::Success)
            .child(banner_icon().into())
            .build()
            .unwrap();
        let root = node.as_element().unwrap();
        let icon = root.children[0].as_element().unwrap();
        assert_eq!(icon.role.as_deref(), Some(BANNER_ICON_ROLE));
        let class = slot_class(BANNER_ICON_ROLE, &icon.props).unwrap().unwrap();
        assert_eq!(class, "size-5 shrink-0 text-success-base");
    }

    #[test]
    fn test_close_button_opacity_per_variant() {
        for (variant, expected) in [
            (BannerVariant::Filled, "opacity-[.72]"),
            (BannerVariant::Light, "opacity-[.48]"),
            (BannerVariant::Stroke, "opacity-[.48]"),
        ] {
            let node = banner("b")
                .variant(variant)
                .child(banner_close_button().into())
                .build()
                .unwrap();
            let root = node.as_element().unwrap();
            let close = root.children[0].as_element().unwrap();
            let class = slot_class(BANNER_CLOSE_BUTTON_ROLE, &close.props)
                .unwrap()
                .unwrap();
            assert!(class.contains(expected), "{variant:?}: {class}");
        }
    }

    #[test]
    fn test_icon_and_close_share_coordination_id() {
        let node = banner("notice")
            .child(banner_icon().into())
            .child(banner_close_button().into())
            .build()
            .unwrap();
        let root = node.as_element().unwrap();
        let icon = root.children[0].as_element().unwrap();
        let close = root.children[1].as_element().unwrap();
        let icon_id = icon.props.get(weft_tree::COORDINATION_ID_PROP).unwrap();
        let close_id = close.props.get(weft_tree::COORDINATION_ID_PROP).unwrap();
        assert_eq!(icon_id, close_id);
    }

    #[test]
    fn test_deeply_nested_icon_still_receives_props() {
        let node = banner("b")
            .status(BannerStatus::Warning)
            .child(banner_content([element()
                .child(Into::<weft_tree::Node>::into(banner_icon()))
                .into()]))
            .build()
            .unwrap();
        let root = node.as_element().unwrap();
        let content = root.children[0].as_element().unwrap();
        assert!(content.props.get("status").is_none());
        let wrapper = content.children[0].as_element().unwrap();
        let icon = wrapper.children[0].as_element().unwrap();
        assert_eq!(icon.props.get("status").unwrap().as_str(), Some("warning"));
    }

    #[test]
    fn test_local_icon_status_wins_over_shared() {
        let node = banner("b")
            .variant(BannerVariant::Light)
            .status(BannerStatus::Error)
            .child(banner_icon().prop("status", "success").into())
            .build()
            .unwrap();
        let root = node.as_element().unwrap();
        let icon = root.children[0].as_element().unwrap();
        let class = slot_class(BANNER_ICON_ROLE, &icon.props).unwrap().unwrap();
        assert!(class.contains("text-success-base"));
    }

    #[test]
    fn test_unknown_role_resolves_to_none() {
        let class = slot_class("tooltip", &Props::default()).unwrap();
        assert!(class.is_none());
    }

    #[test]
    fn test_content_resolves_without_selection() {
        let class = slot_class(BANNER_CONTENT_ROLE, &Props::default())
            .unwrap()
            .unwrap();
        assert_eq!(class, "col-start-2 flex items-center justify-center gap-3");
    }

    #[test]
    fn test_spec_survives_json_as_configuration_data() {
        let json = serde_json::to_string(banner_spec()).unwrap();
        let parsed: StyleSpec = serde_json::from_str(&json).unwrap();
        parsed.validate().unwrap();
        assert_eq!(&parsed, banner_spec());

        for (variant, status) in [
            (BannerVariant::Filled, BannerStatus::Error),
            (BannerVariant::Stroke, BannerStatus::Feature),
        ] {
            let selection = VariantSelection::new()
                .set("variant", variant.as_str())
                .set("status", status.as_str());
            let from_data = parsed
                .resolve(&selection, &SlotOverrides::new(), class_groups())
                .unwrap();
            let from_builder = banner_spec()
                .resolve(&selection, &SlotOverrides::new(), class_groups())
                .unwrap();
            assert_eq!(from_data, from_builder);
        }
    }

    #[test]
    fn test_invalid_propagated_value_is_rejected() {
        let mut props = Props::default();
        props.insert("status".to_string(), "unknown".into());
        let err = slot_class(BANNER_ICON_ROLE, &props).unwrap_err();
        assert!(matches!(err, InvalidVariantError::UnknownValue { .. }));
    }
}
