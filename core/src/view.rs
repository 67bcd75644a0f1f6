//! The descriptor contract and type erasure.

use alloc::boxed::Box;
use core::fmt;

use crate::context::Context;
use crate::host::HostNode;

/// An immutable descriptor of one piece of UI.
///
/// A `View` describes what should exist; it owns its children and never
/// holds a back-reference to a parent. [`realize`](View::realize) is the
/// bridge protocol: invoked on demand, it produces the corresponding
/// host-runtime object, recursing depth-first and left-to-right over any
/// children so the host only ever receives its own object graph.
///
/// Realization is referentially transparent — the same descriptor value
/// yields a behaviorally equivalent [`HostNode`] every time — but it is
/// not memoized. Repeated realization reconstructs host objects; callers
/// that need identity stability across re-renders should tag views (see
/// [`TaggedView`](crate::TaggedView)) and key their own cache on the tag.
///
/// Boxing embedded closures or typed payloads into the
/// [`Context`](crate::Context) is the one permitted side effect.
pub trait View: 'static {
    /// Translates this descriptor into its host-runtime object.
    fn realize(&self, ctx: &Context) -> HostNode;
}

/// A view that renders nothing: the identity element of composition.
///
/// Zero-child composition produces it, absent conditional branches erase
/// to it, and it projects to a no-op host object.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyView;

impl EmptyView {
    /// Creates an empty view.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl View for EmptyView {
    fn realize(&self, _ctx: &Context) -> HostNode {
        HostNode::empty()
    }
}

/// A type-erased descriptor.
///
/// Conditional branches with different static shapes must be stored in one
/// slot; `AnyView` erases the concrete shape while preserving realization
/// behavior exactly. Erasure is a type-level operation, never a
/// transformation.
pub struct AnyView(Box<dyn View>);

impl AnyView {
    /// Erases a concrete view.
    pub fn new(view: impl View) -> Self {
        Self(Box::new(view))
    }
}

impl View for AnyView {
    fn realize(&self, ctx: &Context) -> HostNode {
        self.0.realize(ctx)
    }
}

impl Default for AnyView {
    fn default() -> Self {
        Self::new(EmptyView)
    }
}

impl fmt::Debug for AnyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnyView")
    }
}

#[cfg(test)]
mod tests {
    use crate::host::{EMPTY, Value};

    use super::*;

    struct Probe(i64);

    impl View for Probe {
        fn realize(&self, _ctx: &Context) -> HostNode {
            HostNode::new("probe").attr("value", self.0)
        }
    }

    #[test]
    fn empty_view_projects_to_the_noop_node() {
        let ctx = Context::new();
        assert_eq!(EmptyView.realize(&ctx).kind(), EMPTY);
    }

    #[test]
    fn erasure_preserves_realization() {
        let ctx = Context::new();
        let erased = AnyView::new(Probe(3));
        let direct = Probe(3).realize(&ctx);
        assert_eq!(erased.realize(&ctx), direct);
    }

    #[test]
    fn repeated_realization_is_behaviorally_equivalent() {
        let ctx = Context::new();
        let view = Probe(9);
        let first = view.realize(&ctx);
        let second = view.realize(&ctx);
        assert_eq!(first, second);
        assert_eq!(first.get("value"), Some(&Value::Int(9)));
    }
}
