//! A tappable button.

use ferryui_core::{Action, AnyView, Context, HostNode, View};

/// Kind key buttons realize to.
pub const KIND: &str = "button";

/// A control that fires an [`Action`] when tapped.
///
/// The label is an arbitrary child view, realized in place. The action is
/// boxed at realization time; the host invokes it through the context by
/// token.
#[derive(Debug)]
pub struct Button {
    label: AnyView,
    action: Action,
}

/// Creates a button with a label and a tap action.
pub fn button(label: impl View, action: impl Fn() + 'static) -> Button {
    Button::new(action).label(label)
}

impl Button {
    /// Creates an unlabeled button.
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self {
            label: AnyView::default(),
            action: Action::new(action),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, view: impl View) -> Self {
        self.label = AnyView::new(view);
        self
    }
}

impl View for Button {
    fn realize(&self, ctx: &Context) -> HostNode {
        HostNode::new(KIND)
            .attr("action", ctx.boxed(self.action.clone()))
            .child(self.label.realize(ctx))
    }
}
