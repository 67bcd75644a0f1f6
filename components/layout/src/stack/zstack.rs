//! Depth stack container.

use ferryui_core::{Context, HostNode, View, ViewSeq};

use super::Alignment;

/// Kind key depth stacks realize to.
pub const KIND: &str = "zstack";

/// A container overlaying its children back to front, in sequence order.
#[derive(Debug)]
pub struct ZStack<C> {
    alignment: Alignment,
    contents: C,
}

/// Creates a depth stack with centered alignment.
pub fn zstack<C: ViewSeq>(contents: C) -> ZStack<C> {
    ZStack::new(contents)
}

impl<C: ViewSeq> ZStack<C> {
    /// Creates a depth stack with centered alignment.
    pub fn new(contents: C) -> Self {
        Self {
            alignment: Alignment::default(),
            contents,
        }
    }

    /// Sets the two-axis alignment of children.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl<C: ViewSeq> View for ZStack<C> {
    fn realize(&self, ctx: &Context) -> HostNode {
        HostNode::new(KIND)
            .attr("horizontal-alignment", self.alignment.horizontal.key())
            .attr("vertical-alignment", self.alignment.vertical.key())
            .children(self.contents.realize_each(ctx))
    }
}
