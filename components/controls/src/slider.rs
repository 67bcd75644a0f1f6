//! A slider over a continuous numeric range.

use core::ops::RangeInclusive;

use ferryui_core::{AnyView, Callback, Context, HostNode, View};

/// Kind key sliders realize to.
pub const KIND: &str = "slider";

/// A control for selecting a value from a continuous range.
///
/// Range bounds and the current value cross the boundary as floats; drag
/// updates come back through the boxed [`Callback`] with the new value.
#[derive(Debug)]
pub struct Slider {
    label: AnyView,
    range: RangeInclusive<f64>,
    value: f64,
    on_change: Callback<f64>,
}

/// Creates a slider with a range, a current value and a change callback.
pub fn slider(range: RangeInclusive<f64>, value: f64, on_change: impl Fn(f64) + 'static) -> Slider {
    Slider::new(range, value, on_change)
}

impl Slider {
    /// Creates an unlabeled slider.
    pub fn new(range: RangeInclusive<f64>, value: f64, on_change: impl Fn(f64) + 'static) -> Self {
        Self {
            label: AnyView::default(),
            range,
            value,
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

impl View for Slider {
    fn realize(&self, ctx: &Context) -> HostNode {
        HostNode::new(KIND)
            .attr("min", *self.range.start())
            .attr("max", *self.range.end())
            .attr("value", self.value)
            .attr("on-change", ctx.boxed(self.on_change.clone()))
            .child(self.label.realize(ctx))
    }
}
