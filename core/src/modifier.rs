//! Deferred host-object transformations.

use alloc::boxed::Box;
use core::fmt;

use crate::context::Context;
use crate::host::HostNode;
use crate::view::{AnyView, View};

/// A descriptor wrapping a target view and a transform over its realized
/// host object.
///
/// Construction never touches the target; the transform runs exactly once
/// per realization, after the target has been realized. Chaining modifiers
/// nests `ModifierView`s, and projection applies them innermost-first:
/// the original view is realized, then each transform wraps the previous
/// result in application order. Order is therefore preserved, not
/// commuted — padding-then-opacity differs from opacity-then-padding.
pub struct ModifierView {
    target: AnyView,
    transform: Box<dyn Fn(HostNode) -> HostNode>,
}

impl ModifierView {
    /// Wraps `target` with a transform applied at realization time.
    pub fn new(target: impl View, transform: impl Fn(HostNode) -> HostNode + 'static) -> Self {
        Self {
            target: AnyView::new(target),
            transform: Box::new(transform),
        }
    }
}

impl View for ModifierView {
    fn realize(&self, ctx: &Context) -> HostNode {
        (self.transform)(self.target.realize(ctx))
    }
}

impl fmt::Debug for ModifierView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierView")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::host::Value;
    use crate::view::EmptyView;

    use super::*;

    struct Leaf;

    impl View for Leaf {
        fn realize(&self, _ctx: &Context) -> HostNode {
            HostNode::new("leaf")
        }
    }

    #[test]
    fn transform_applies_after_target_realizes() {
        let ctx = Context::new();
        let view = ModifierView::new(Leaf, |node| node.attr("padding", 8.0));
        let node = view.realize(&ctx);
        assert_eq!(node.kind(), "leaf");
        assert_eq!(node.get("padding"), Some(&Value::Float(8.0)));
    }

    #[test]
    fn chained_modifiers_apply_innermost_first() {
        let ctx = Context::new();
        let inner = ModifierView::new(Leaf, |node| {
            HostNode::new("padding").child(node)
        });
        let outer = ModifierView::new(inner, |node| {
            HostNode::new("opacity").child(node)
        });
        let node = outer.realize(&ctx);
        // M2(M1(realize(D))): opacity wraps padding wraps leaf.
        assert_eq!(node.kind(), "opacity");
        assert_eq!(node.child_nodes()[0].kind(), "padding");
        assert_eq!(node.child_nodes()[0].child_nodes()[0].kind(), "leaf");
    }

    #[test]
    fn modifier_order_is_not_commutative() {
        let ctx = Context::new();
        let pad_then_fade = ModifierView::new(
            ModifierView::new(Leaf, |node| HostNode::new("padding").child(node)),
            |node| HostNode::new("opacity").child(node),
        );
        let fade_then_pad = ModifierView::new(
            ModifierView::new(Leaf, |node| HostNode::new("opacity").child(node)),
            |node| HostNode::new("padding").child(node),
        );
        assert_ne!(
            pad_then_fade.realize(&ctx),
            fade_then_pad.realize(&ctx)
        );
    }

    #[test]
    fn transform_runs_once_per_realization() {
        let ctx = Context::new();
        let view = ModifierView::new(EmptyView, |node| node.attr("count", 1_i64));
        let node = view.realize(&ctx);
        assert_eq!(node.attrs().len(), 1);
    }
}
