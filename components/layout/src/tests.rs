//! Container realization tests.
//!
//! These pin down the boundary contract of each container: kind keys,
//! integer-encoded alignment, and strict left-to-right child order.

use alloc::vec::Vec;

use ferryui_core::{Context, EmptyView, HostNode, Value, View};

use crate::padding::DEFAULT_PADDING;
use crate::stack::{
    Alignment, HorizontalAlignment, VerticalAlignment, hstack, vstack, zstack,
};
use crate::{EdgeInsets, Frame, Padding, Spacer};

struct Leaf(&'static str);

impl View for Leaf {
    fn realize(&self, _ctx: &Context) -> HostNode {
        HostNode::new("leaf").attr("name", self.0)
    }
}

fn child_names(node: &HostNode) -> Vec<&str> {
    node.child_nodes()
        .iter()
        .map(|child| child.get("name").and_then(Value::as_text).unwrap_or("-"))
        .collect()
}

#[test]
fn hstack_realizes_children_in_sequence_order() {
    let ctx = Context::new();
    let node = hstack((Leaf("a"), Leaf("b"), Leaf("c"))).realize(&ctx);
    assert_eq!(node.kind(), "hstack");
    assert_eq!(child_names(&node), ["a", "b", "c"]);
}

#[test]
fn hstack_encodes_alignment_as_integer_key() {
    let ctx = Context::new();
    let node = hstack((Leaf("a"), Leaf("b")))
        .alignment(VerticalAlignment::Top)
        .spacing(4.0)
        .realize(&ctx);
    assert_eq!(node.get("alignment").and_then(Value::as_int), Some(1));
    assert_eq!(node.get("spacing").and_then(Value::as_float), Some(4.0));
}

#[test]
fn vstack_defaults_to_centered() {
    let ctx = Context::new();
    let node = vstack((Leaf("a"), Leaf("b"))).realize(&ctx);
    assert_eq!(
        node.get("alignment").and_then(Value::as_int),
        Some(HorizontalAlignment::Center.key())
    );
}

#[test]
fn zstack_carries_both_alignment_axes() {
    let ctx = Context::new();
    let node = zstack((Leaf("back"), Leaf("front")))
        .alignment(Alignment::new(
            HorizontalAlignment::Trailing,
            VerticalAlignment::Bottom,
        ))
        .realize(&ctx);
    assert_eq!(
        node.get("horizontal-alignment").and_then(Value::as_int),
        Some(3)
    );
    assert_eq!(
        node.get("vertical-alignment").and_then(Value::as_int),
        Some(3)
    );
    assert_eq!(child_names(&node), ["back", "front"]);
}

#[test]
fn empty_child_does_not_disturb_siblings() {
    let ctx = Context::new();
    let node = vstack((Leaf("a"), EmptyView, Leaf("b"))).realize(&ctx);
    assert_eq!(node.child_nodes().len(), 3);
    assert!(node.child_nodes()[1].is_empty_leaf());
    assert_eq!(child_names(&node), ["a", "-", "b"]);
}

#[test]
fn stack_of_zero_children_realizes_childless() {
    let ctx = Context::new();
    let node = hstack(()).realize(&ctx);
    assert!(node.child_nodes().is_empty());
}

#[test]
fn spacer_omits_min_length_unless_set() {
    let ctx = Context::new();
    assert!(Spacer::new().realize(&ctx).get("min-length").is_none());
    let node = Spacer::new().min_length(8.0).realize(&ctx);
    assert_eq!(node.get("min-length").and_then(Value::as_float), Some(8.0));
}

#[test]
fn padding_wraps_its_child() {
    let ctx = Context::new();
    let node = Padding::new(EdgeInsets::all(DEFAULT_PADDING), Leaf("inner")).realize(&ctx);
    assert_eq!(node.kind(), crate::padding::KIND);
    assert_eq!(
        node.get("trailing").and_then(Value::as_float),
        Some(DEFAULT_PADDING)
    );
    assert_eq!(node.get("top").and_then(Value::as_float), Some(DEFAULT_PADDING));
    assert_eq!(child_names(&node), ["inner"]);
}

#[test]
fn edge_insets_symmetric_splits_axes() {
    let insets = EdgeInsets::symmetric(8.0, 2.0);
    assert_eq!(insets.leading, 8.0);
    assert_eq!(insets.trailing, 8.0);
    assert_eq!(insets.top, 2.0);
    assert_eq!(insets.bottom, 2.0);
}

#[test]
fn frame_realizes_only_set_constraints() {
    let ctx = Context::new();
    let node = Frame::new(Leaf("sized"))
        .width(100.0)
        .max_height(40.0)
        .realize(&ctx);
    assert_eq!(node.get("width").and_then(Value::as_float), Some(100.0));
    assert_eq!(node.get("max-height").and_then(Value::as_float), Some(40.0));
    assert!(node.get("height").is_none());
    assert!(node.get("min-width").is_none());
}
