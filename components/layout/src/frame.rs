//! Fixed and constrained sizing.

use ferryui_core::{AnyView, Context, HostNode, View};

use crate::stack::Alignment;

/// Kind key frames realize to.
pub const KIND: &str = "frame";

/// A wrapper constraining its child's size.
///
/// Unset constraints are simply absent from the realized node; the host
/// falls back to the child's own sizing.
#[derive(Debug)]
pub struct Frame {
    width: Option<f64>,
    height: Option<f64>,
    min_width: Option<f64>,
    max_width: Option<f64>,
    min_height: Option<f64>,
    max_height: Option<f64>,
    alignment: Alignment,
    content: AnyView,
}

impl Frame {
    /// Wraps `content` with no constraints.
    pub fn new(content: impl View) -> Self {
        Self {
            width: None,
            height: None,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            alignment: Alignment::default(),
            content: AnyView::new(content),
        }
    }

    /// Fixes the width.
    #[must_use]
    pub const fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Fixes the height.
    #[must_use]
    pub const fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Applies a minimum width constraint.
    #[must_use]
    pub const fn min_width(mut self, width: f64) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Applies a maximum width constraint.
    #[must_use]
    pub const fn max_width(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Applies a minimum height constraint.
    #[must_use]
    pub const fn min_height(mut self, height: f64) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Applies a maximum height constraint.
    #[must_use]
    pub const fn max_height(mut self, height: f64) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Aligns the child within the frame.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl View for Frame {
    fn realize(&self, ctx: &Context) -> HostNode {
        let mut node = HostNode::new(KIND)
            .attr("horizontal-alignment", self.alignment.horizontal.key())
            .attr("vertical-alignment", self.alignment.vertical.key());
        for (key, constraint) in [
            ("width", self.width),
            ("height", self.height),
            ("min-width", self.min_width),
            ("max-width", self.max_width),
            ("min-height", self.min_height),
            ("max-height", self.max_height),
        ] {
            if let Some(value) = constraint {
                node = node.attr(key, value);
            }
        }
        node.child(self.content.realize(ctx))
    }
}
