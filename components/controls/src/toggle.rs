//! A boolean toggle switch.

use ferryui_core::{AnyView, Callback, Context, HostNode, View};

/// Kind key toggles realize to.
pub const KIND: &str = "toggle";

/// A control that switches between on and off.
///
/// The current state crosses the boundary as a plain boolean; changes come
/// back through the boxed [`Callback`], fired by the host with the new
/// state.
#[derive(Debug)]
pub struct Toggle {
    label: AnyView,
    is_on: bool,
    on_change: Callback<bool>,
}

/// Creates a toggle with a label, a current state and a change callback.
pub fn toggle(label: impl View, is_on: bool, on_change: impl Fn(bool) + 'static) -> Toggle {
    Toggle::new(is_on, on_change).label(label)
}

impl Toggle {
    /// Creates an unlabeled toggle.
    pub fn new(is_on: bool, on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            label: AnyView::default(),
            is_on,
            on_change: Callback::new(on_change),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, view: impl View) -> Self {
        self.label = AnyView::new(view);
        self
    }
}

impl View for Toggle {
    fn realize(&self, ctx: &Context) -> HostNode {
        HostNode::new(KIND)
            .attr("is-on", self.is_on)
            .attr("on-change", ctx.boxed(self.on_change.clone()))
            .child(self.label.realize(ctx))
    }
}
