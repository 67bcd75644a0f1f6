//! Vertical stack container.

use ferryui_core::{Context, HostNode, View, ViewSeq};

use super::{DEFAULT_SPACING, HorizontalAlignment};

/// Kind key vertical stacks realize to.
pub const KIND: &str = "vstack";

/// A container arranging its children in a vertical line, in sequence
/// order.
#[derive(Debug)]
pub struct VStack<C> {
    alignment: HorizontalAlignment,
    spacing: f64,
    contents: C,
}

/// Creates a vertical stack with default alignment and spacing.
pub fn vstack<C: ViewSeq>(contents: C) -> VStack<C> {
    VStack::new(contents)
}

impl<C: ViewSeq> VStack<C> {
    /// Creates a vertical stack with default alignment and spacing.
    pub fn new(contents: C) -> Self {
        Self {
            alignment: HorizontalAlignment::default(),
            spacing: DEFAULT_SPACING,
            contents,
        }
    }

    /// Sets the horizontal alignment of children.
    #[must_use]
    pub const fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the spacing between children, in points.
    #[must_use]
    pub const fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }
}

impl<C: ViewSeq> View for VStack<C> {
    fn realize(&self, ctx: &Context) -> HostNode {
        HostNode::new(KIND)
            .attr("alignment", self.alignment.key())
            .attr("spacing", self.spacing)
            .children(self.contents.realize_each(ctx))
    }
}
