//! Horizontal stack container.

use ferryui_core::{Context, HostNode, View, ViewSeq};

use super::{DEFAULT_SPACING, VerticalAlignment};

/// Kind key horizontal stacks realize to.
pub const KIND: &str = "hstack";

/// A container arranging its children in a horizontal line, in sequence
/// order.
#[derive(Debug)]
pub struct HStack<C> {
    alignment: VerticalAlignment,
    spacing: f64,
    contents: C,
}

/// Creates a horizontal stack with default alignment and spacing.
pub fn hstack<C: ViewSeq>(contents: C) -> HStack<C> {
    HStack::new(contents)
}

impl<C: ViewSeq> HStack<C> {
    /// Creates a horizontal stack with default alignment and spacing.
    pub fn new(contents: C) -> Self {
        Self {
            alignment: VerticalAlignment::default(),
            spacing: DEFAULT_SPACING,
            contents,
        }
    }

    /// Sets the vertical alignment of children.
    #[must_use]
    pub const fn alignment(mut self, alignment: VerticalAlignment) -> Self {
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

impl<C: ViewSeq> View for HStack<C> {
    fn realize(&self, ctx: &Context) -> HostNode {
        HostNode::new(KIND)
            .attr("alignment", self.alignment.key())
            .attr("spacing", self.spacing)
            .children(self.contents.realize_each(ctx))
    }
}
