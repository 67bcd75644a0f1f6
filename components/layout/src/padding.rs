//! Padding around a single child.

use ferryui_core::{AnyView, Context, HostNode, View};

/// Kind key padding wrappers realize to.
pub const KIND: &str = "padding";

/// Default padding applied by the fluent `.padding()` shorthand, in points.
pub const DEFAULT_PADDING: f64 = 14.0;

/// Insets for the four edges of a view, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    /// Top edge inset.
    pub top: f64,
    /// Leading edge inset.
    pub leading: f64,
    /// Bottom edge inset.
    pub bottom: f64,
    /// Trailing edge inset.
    pub trailing: f64,
}

impl EdgeInsets {
    /// The same inset on all four edges.
    #[must_use]
    pub const fn all(value: f64) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    /// Symmetric insets: `horizontal` on leading/trailing, `vertical` on
    /// top/bottom.
    #[must_use]
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            top: vertical,
            leading: horizontal,
            bottom: vertical,
            trailing: horizontal,
        }
    }
}

impl From<f64> for EdgeInsets {
    fn from(value: f64) -> Self {
        Self::all(value)
    }
}

/// A wrapper insetting its child by fixed edge amounts.
#[derive(Debug)]
pub struct Padding {
    insets: EdgeInsets,
    content: AnyView,
}

impl Padding {
    /// Pads `content` by `insets`.
    pub fn new(insets: impl Into<EdgeInsets>, content: impl View) -> Self {
        Self {
            insets: insets.into(),
            content: AnyView::new(content),
        }
    }
}

impl View for Padding {
    fn realize(&self, ctx: &Context) -> HostNode {
        HostNode::new(KIND)
            .attr("top", self.insets.top)
            .attr("leading", self.insets.leading)
            .attr("bottom", self.insets.bottom)
            .attr("trailing", self.insets.trailing)
            .child(self.content.realize(ctx))
    }
}
