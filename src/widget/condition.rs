//! Conditional composition.
//!
//! A conditional's two branches usually have different concrete types, so
//! both sides are erased to [`AnyView`] and the absent branch becomes the
//! empty view. Selection happens at build time: only the chosen branch's
//! builder runs.

use ferryui_core::{AnyView, Context, HostNode, View};

/// A view rendered only while its condition held at build time.
///
/// Created by [`when`]; extend it with [`or`](When::or) to render an
/// alternative instead of nothing.
#[derive(Debug)]
pub struct When {
    condition: bool,
    content: AnyView,
}

/// Renders `then()` when `condition` is true, nothing otherwise.
pub fn when<V: View>(condition: bool, then: impl FnOnce() -> V) -> When {
    let content = if condition {
        AnyView::new(then())
    } else {
        AnyView::default()
    };
    When { condition, content }
}

impl When {
    /// Supplies the view rendered when the condition was false.
    #[must_use]
    pub fn or<V: View>(self, or: impl FnOnce() -> V) -> When {
        if self.condition {
            self
        } else {
            When {
                condition: false,
                content: AnyView::new(or()),
            }
        }
    }
}

impl View for When {
    fn realize(&self, ctx: &Context) -> HostNode {
        self.content.realize(ctx)
    }
}

/// Chooses between two differently shaped views, erasing both to one type.
pub fn either(condition: bool, then: impl View, or: impl View) -> AnyView {
    if condition {
        AnyView::new(then)
    } else {
        AnyView::new(or)
    }
}

#[cfg(test)]
mod tests {
    use ferryui_core::{Context, Value};
    use ferryui_layout::stack::vstack;
    use ferryui_text::text;

    use super::*;

    #[test]
    fn true_condition_realizes_the_branch() {
        let ctx = Context::new();
        let node = when(true, || text("shown")).realize(&ctx);
        assert_eq!(node.kind(), "text");
    }

    #[test]
    fn false_condition_erases_to_the_empty_view() {
        let ctx = Context::new();
        let node = when(false, || text("hidden")).realize(&ctx);
        assert!(node.is_empty_leaf());
    }

    #[test]
    fn false_branch_builder_never_runs() {
        let ctx = Context::new();
        let view = when(false, || -> ferryui_text::Text {
            unreachable!("unselected branch must stay unbuilt")
        });
        let _: HostNode = view.realize(&ctx);
    }

    #[test]
    fn or_supplies_the_alternative() {
        let ctx = Context::new();
        let node = when(false, || text("a")).or(|| text("b")).realize(&ctx);
        assert_eq!(node.get("content").and_then(Value::as_text), Some("b"));
    }

    #[test]
    fn either_unifies_divergent_shapes() {
        let ctx = Context::new();
        let pick = |flag| either(flag, text("leaf"), vstack((text("x"), text("y"))));
        assert_eq!(pick(true).realize(&ctx).kind(), "text");
        assert_eq!(pick(false).realize(&ctx).kind(), "vstack");
    }
}
