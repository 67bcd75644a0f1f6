//! Flexible space.

use ferryui_core::{Context, HostNode, View};

/// Kind key spacers realize to.
pub const KIND: &str = "spacer";

/// A leaf that expands along its container's main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacer {
    min_length: Option<f64>,
}

impl Spacer {
    /// Creates a spacer with no minimum length.
    #[must_use]
    pub const fn new() -> Self {
        Self { min_length: None }
    }

    /// Sets the minimum length along the main axis, in points.
    #[must_use]
    pub const fn min_length(mut self, length: f64) -> Self {
        self.min_length = Some(length);
        self
    }
}

impl View for Spacer {
    fn realize(&self, _ctx: &Context) -> HostNode {
        let node = HostNode::new(KIND);
        match self.min_length {
            Some(length) => node.attr("min-length", length),
            None => node,
        }
    }
}
