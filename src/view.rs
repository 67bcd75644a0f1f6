//! Extension methods forming the fluent view-building API.

use ferryui_core::env::WithValue;
use ferryui_core::preference::{OnPreferenceChange, Preference};
use ferryui_core::{AnyView, HostNode, ModifierView, PreferenceKey, TaggedView, View};
use ferryui_layout::padding::DEFAULT_PADDING;
use ferryui_layout::{EdgeInsets, Frame, Padding};

/// Extension trait adding common wrapping and configuration methods to
/// every view.
///
/// Each method wraps `self` in another descriptor; nothing is realized
/// until projection. Wrapping order is meaningful — `a.padding().frame(..)`
/// pads first and constrains the padded result, not the other way around.
pub trait ViewExt: View + Sized {
    /// Erases this view's concrete type.
    fn anyview(self) -> AnyView {
        AnyView::new(self)
    }

    /// Defers a transform over this view's realized host object.
    ///
    /// Chained modifiers apply innermost-first: the transform closest to
    /// the view runs first, each later one wrapping the previous result.
    fn modifier(self, transform: impl Fn(HostNode) -> HostNode + 'static) -> ModifierView {
        ModifierView::new(self, transform)
    }

    /// Pads this view by the default inset on all edges.
    fn padding(self) -> Padding {
        Padding::new(DEFAULT_PADDING, self)
    }

    /// Pads this view by explicit insets.
    fn padding_with(self, insets: impl Into<EdgeInsets>) -> Padding {
        Padding::new(insets, self)
    }

    /// Wraps this view in an unconstrained frame for further sizing.
    fn frame(self) -> Frame {
        Frame::new(self)
    }

    /// Fixes this view's width.
    fn width(self, width: f64) -> Frame {
        Frame::new(self).width(width)
    }

    /// Fixes this view's height.
    fn height(self, height: f64) -> Frame {
        Frame::new(self).height(height)
    }

    /// Attaches the host-side opacity attribute.
    fn opacity(self, opacity: f64) -> ModifierView {
        self.modifier(move |node| node.attr("opacity", opacity))
    }

    /// Tags this view with a comparable identity.
    fn tag<T: 'static + PartialEq + Clone>(self, tag: T) -> TaggedView<T, Self> {
        TaggedView::new(tag, self)
    }

    /// Publishes a preference value from this view's subtree.
    fn preference<K: PreferenceKey>(self, value: K::Value) -> Preference<K> {
        ferryui_core::preference::preference::<K>(self, value)
    }

    /// Observes the merged preference value for `K` below this view.
    fn on_preference_change<K, F>(self, action: F) -> OnPreferenceChange<K, F>
    where
        K: PreferenceKey,
        F: Fn(K::Value) + Clone + 'static,
    {
        ferryui_core::preference::on_preference_change::<K, F>(self, action)
    }

    /// Associates an environment value with this view's subtree.
    fn with_value<T: 'static + Clone>(
        self,
        key: impl Into<alloc::string::String>,
        value: T,
    ) -> WithValue<T> {
        ferryui_core::env::with_value(self, key, value)
    }
}

impl<V: View + Sized> ViewExt for V {}

#[cfg(test)]
mod tests {
    use ferryui_core::{Context, Value};
    use ferryui_text::text;

    use super::*;

    #[test]
    fn fluent_wrappers_nest_in_call_order() {
        let ctx = Context::new();
        let node = text("hi").padding().width(120.0).realize(&ctx);
        // Outermost call realizes outermost: frame wraps padding wraps text.
        assert_eq!(node.kind(), "frame");
        let padded = &node.child_nodes()[0];
        assert_eq!(padded.kind(), "padding");
        assert_eq!(padded.child_nodes()[0].kind(), "text");
    }

    #[test]
    fn modifiers_apply_innermost_first() {
        let ctx = Context::new();
        let node = text("hi")
            .modifier(|node| node.attr("order", 1_i64))
            .modifier(|node| node.attr("order", 2_i64))
            .realize(&ctx);
        // Last wrapper applied last, so its attribute wins the lookup.
        assert_eq!(node.get("order").and_then(Value::as_int), Some(2));
        assert_eq!(node.attrs().iter().filter(|(k, _)| *k == "order").count(), 2);
    }

    #[test]
    fn opacity_rides_on_the_realized_node() {
        let ctx = Context::new();
        let node = text("dim").opacity(0.5).realize(&ctx);
        assert_eq!(node.get("opacity").and_then(Value::as_float), Some(0.5));
    }

    #[test]
    fn tags_attach_comparable_handles() {
        let ctx = Context::new();
        let a = text("row").tag("r1").realize(&ctx);
        let b = text("row").tag("r1").realize(&ctx);
        let ta = a.get("tag").and_then(Value::as_handle).unwrap().token();
        let tb = b.get("tag").and_then(Value::as_handle).unwrap().token();
        assert_eq!(ctx.tokens_eq(ta, tb), Ok(true));
    }
}
