//! End-to-end flow: a banner root resolves its own slot, shares its
//! selection with role-tagged descendants through propagation, and each
//! descendant resolves its own slot from the merged props, the way an
//! external rendering layer would.

use weft_ui::banner::{
    banner, banner_close_button, banner_content, banner_icon, slot_class, BannerStatus,
    BannerVariant, BANNER_CLOSE_BUTTON_ROLE, BANNER_ICON_ROLE,
};
use weft_tree::{element, text, Element, Node, COORDINATION_ID_PROP};

fn build_tree(variant: BannerVariant, status: BannerStatus) -> Node {
    banner("flow-test")
        .variant(variant)
        .status(status)
        .child(banner_icon().into())
        .child(banner_content([
            element().child(text("Heads up")).into(),
            text("A new version is ready"),
        ]))
        .child(banner_close_button().into())
        .build()
        .unwrap()
}

fn find_role<'a>(node: &'a Node, role: &str) -> Option<&'a Element> {
    match node {
        Node::Text(_) => None,
        Node::Fragment(children) => children.iter().find_map(|child| find_role(child, role)),
        Node::Element(el) => {
            if el.role.as_deref() == Some(role) {
                Some(el)
            } else {
                el.children.iter().find_map(|child| find_role(child, role))
            }
        }
    }
}

#[test]
fn filled_error_banner_resolves_every_part() {
    let tree = build_tree(BannerVariant::Filled, BannerStatus::Error);
    let root = tree.as_element().unwrap();

    let root_class = root.props.get("class").unwrap().as_str().unwrap();
    assert_eq!(
        root_class,
        "relative grid h-11 w-full grid-cols-[1fr,auto,1fr] items-center justify-center \
         gap-3 px-3 bg-error-base text-static-white"
    );

    let icon = find_role(&tree, BANNER_ICON_ROLE).unwrap();
    let icon_class = slot_class(BANNER_ICON_ROLE, &icon.props).unwrap().unwrap();
    assert_eq!(icon_class, "size-5 shrink-0 text-static-white");

    let close = find_role(&tree, BANNER_CLOSE_BUTTON_ROLE).unwrap();
    let close_class = slot_class(BANNER_CLOSE_BUTTON_ROLE, &close.props)
        .unwrap()
        .unwrap();
    assert_eq!(close_class, "ml-auto size-5 opacity-[.72]");
}

#[test]
fn lighter_information_banner_uses_its_palette() {
    let tree = build_tree(BannerVariant::Lighter, BannerStatus::Information);
    let root = tree.as_element().unwrap();

    let root_class = root.props.get("class").unwrap().as_str().unwrap();
    assert!(root_class.contains("bg-information-lighter"));
    assert!(root_class.contains("text-text-strong-950"));

    let icon = find_role(&tree, BANNER_ICON_ROLE).unwrap();
    let icon_class = slot_class(BANNER_ICON_ROLE, &icon.props).unwrap().unwrap();
    assert_eq!(icon_class, "size-5 shrink-0 text-information-base");
}

#[test]
fn propagation_keeps_tree_shape_and_coordinates_parts() {
    let tree = build_tree(BannerVariant::Light, BannerStatus::Warning);
    let root = tree.as_element().unwrap();

    // same child ordering as authored: icon, content, close button
    assert_eq!(root.children.len(), 3);
    assert!(find_role(&root.children[0], BANNER_ICON_ROLE).is_some());
    assert!(find_role(&root.children[2], BANNER_CLOSE_BUTTON_ROLE).is_some());

    let icon = find_role(&tree, BANNER_ICON_ROLE).unwrap();
    let close = find_role(&tree, BANNER_CLOSE_BUTTON_ROLE).unwrap();
    assert_eq!(
        icon.props.get(COORDINATION_ID_PROP),
        close.props.get(COORDINATION_ID_PROP)
    );

    // untargeted content kept its own (empty) props
    let content = root.children[1].as_element().unwrap();
    assert!(content.props.get("status").is_none());
    assert!(content.props.get(COORDINATION_ID_PROP).is_none());
}

#[test]
fn distinct_banner_instances_coordinate_independently() {
    let first = build_tree(BannerVariant::Filled, BannerStatus::Feature);
    let second = banner("another-seed")
        .child(banner_icon().into())
        .build()
        .unwrap();

    let first_id = find_role(&first, BANNER_ICON_ROLE)
        .unwrap()
        .props
        .get(COORDINATION_ID_PROP)
        .unwrap();
    let second_id = find_role(&second, BANNER_ICON_ROLE)
        .unwrap()
        .props
        .get(COORDINATION_ID_PROP)
        .unwrap();
    assert_ne!(first_id, second_id);
}
