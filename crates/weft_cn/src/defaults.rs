//! Built-in conflict groups for the weft design language
//!
//! Utility tokens follow a `<property>-<value>` naming scheme, so most
//! groups register as prefixes. Typography tokens are generated from a
//! category/size table instead, because their category is the group
//! (`label-xl` and `paragraph-sm` both set the font scale).

use crate::ClassGroups;

/// Typography categories and their allowed sizes. Every generated
/// `<category>-<size>` token belongs to the `font-size` conflict group.
pub const TYPOGRAPHY_GROUPS: &[(&str, &[&str])] = &[
    ("title", &["h1", "h2", "h3", "h4", "h5", "h6"]),
    ("label", &["xl", "lg", "md", "sm", "xs"]),
    ("paragraph", &["xl", "lg", "md", "sm", "xs"]),
    ("subheading", &["md", "sm", "xs", "2xs"]),
    ("doc", &["label", "paragraph"]),
];

/// Utility prefixes and the visual property they control.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("background-color", "bg-"),
    ("text-color", "text-"),
    ("opacity", "opacity-"),
    ("size", "size-"),
    ("height", "h-"),
    ("width", "w-"),
    ("padding", "p-"),
    ("padding-x", "px-"),
    ("padding-y", "py-"),
    ("gap", "gap-"),
    ("radius", "rounded-"),
];

pub(crate) fn class_groups() -> ClassGroups {
    let mut groups = ClassGroups::new();
    for &(key, prefix) in PREFIX_GROUPS {
        groups = groups.prefix_group(key, prefix);
    }
    let typography = TYPOGRAPHY_GROUPS
        .iter()
        .flat_map(|(category, sizes)| sizes.iter().map(move |size| format!("{category}-{size}")));
    groups.group("font-size", typography)
}
