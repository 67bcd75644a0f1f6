//! The composition algebra: assembling composites from child expressions.
//!
//! The rules mirror the fixed composite shapes of the host runtime:
//!
//! - zero children (`()`) compose to the empty leaf;
//! - one child passes through unchanged (`(V,)` realizes as `V`);
//! - two to nine children compose to an order-preserving tuple composite
//!   realizing to a `"group"` node;
//! - beyond nine, the tuple algebra simply has no impl — exceeding the
//!   ceiling is a compile-time error, and [`ViewList`] is the explicit,
//!   unbounded escape hatch.
//!
//! Containers take their children as any [`ViewSeq`], so the same tuple
//! syntax feeds stacks and groups alike.

use alloc::vec::Vec;

use crate::context::Context;
use crate::host::{GROUP, HostNode};
use crate::view::{AnyView, View};

/// An ordered sequence of child descriptors a container can realize.
///
/// Child order is significant: host layout containers render children in
/// sequence order, and realization is strictly sequential, left to right.
pub trait ViewSeq: 'static {
    /// Number of children in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no children.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Realizes every child in order.
    fn realize_each(&self, ctx: &Context) -> Vec<HostNode>;
}

impl ViewSeq for () {
    fn len(&self) -> usize {
        0
    }

    fn realize_each(&self, _ctx: &Context) -> Vec<HostNode> {
        Vec::new()
    }
}

// Zero children compose to a descriptor in their own right, realizing as
// the identity element.
impl View for () {
    fn realize(&self, _ctx: &Context) -> HostNode {
        HostNode::empty()
    }
}

// One child is identity: no composite wrapping, no group node.
impl<V: View> ViewSeq for (V,) {
    fn len(&self) -> usize {
        1
    }

    fn realize_each(&self, ctx: &Context) -> Vec<HostNode> {
        alloc::vec![self.0.realize(ctx)]
    }
}

impl<V: View> View for (V,) {
    fn realize(&self, ctx: &Context) -> HostNode {
        self.0.realize(ctx)
    }
}

macro_rules! impl_tuple_seq {
    ($(($ty:ident, $idx:tt)),+) => {
        impl<$($ty: View),+> ViewSeq for ($($ty,)+) {
            fn len(&self) -> usize {
                [$($idx,)+].len()
            }

            fn realize_each(&self, ctx: &Context) -> Vec<HostNode> {
                alloc::vec![$(self.$idx.realize(ctx),)+]
            }
        }

        impl<$($ty: View),+> View for ($($ty,)+) {
            fn realize(&self, ctx: &Context) -> HostNode {
                HostNode::new(GROUP).children(self.realize_each(ctx))
            }
        }
    };
}

impl_tuple_seq!((V0, 0), (V1, 1));
impl_tuple_seq!((V0, 0), (V1, 1), (V2, 2));
impl_tuple_seq!((V0, 0), (V1, 1), (V2, 2), (V3, 3));
impl_tuple_seq!((V0, 0), (V1, 1), (V2, 2), (V3, 3), (V4, 4));
impl_tuple_seq!((V0, 0), (V1, 1), (V2, 2), (V3, 3), (V4, 4), (V5, 5));
impl_tuple_seq!(
    (V0, 0),
    (V1, 1),
    (V2, 2),
    (V3, 3),
    (V4, 4),
    (V5, 5),
    (V6, 6)
);
impl_tuple_seq!(
    (V0, 0),
    (V1, 1),
    (V2, 2),
    (V3, 3),
    (V4, 4),
    (V5, 5),
    (V6, 6),
    (V7, 7)
);
impl_tuple_seq!(
    (V0, 0),
    (V1, 1),
    (V2, 2),
    (V3, 3),
    (V4, 4),
    (V5, 5),
    (V6, 6),
    (V7, 7),
    (V8, 8)
);

/// A dynamically sized, order-preserving sequence of erased descriptors.
///
/// The escape hatch for child counts past the tuple ceiling, and the
/// natural shape for children produced from data.
#[derive(Debug, Default)]
pub struct ViewList(Vec<AnyView>);

impl ViewList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a child, erasing its shape.
    #[must_use]
    pub fn push(mut self, view: impl View) -> Self {
        self.0.push(AnyView::new(view));
        self
    }
}

impl FromIterator<AnyView> for ViewList {
    fn from_iter<I: IntoIterator<Item = AnyView>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl ViewSeq for ViewList {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn realize_each(&self, ctx: &Context) -> Vec<HostNode> {
        self.0.iter().map(|view| view.realize(ctx)).collect()
    }
}

impl View for ViewList {
    fn realize(&self, ctx: &Context) -> HostNode {
        HostNode::new(GROUP).children(self.realize_each(ctx))
    }
}

impl ViewSeq for Vec<AnyView> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn realize_each(&self, ctx: &Context) -> Vec<HostNode> {
        self.iter().map(|view| view.realize(ctx)).collect()
    }
}
