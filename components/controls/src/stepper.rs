//! An increment/decrement stepper.

use core::ops::RangeInclusive;

use ferryui_core::{AnyView, Callback, Context, HostNode, View};

/// Kind key steppers realize to.
pub const KIND: &str = "stepper";

/// A control that increments or decrements an integer value in steps.
#[derive(Debug)]
pub struct Stepper {
    label: AnyView,
    range: RangeInclusive<i64>,
    value: i64,
    step: i64,
    on_change: Callback<i64>,
}

/// Creates a stepper with a range, a current value and a change callback.
pub fn stepper(
    range: RangeInclusive<i64>,
    value: i64,
    on_change: impl Fn(i64) + 'static,
) -> Stepper {
    Stepper::new(range, value, on_change)
}

impl Stepper {
    /// Creates an unlabeled stepper with a step of 1.
    pub fn new(range: RangeInclusive<i64>, value: i64, on_change: impl Fn(i64) + 'static) -> Self {
        Self {
            label: AnyView::default(),
            range,
            value,
            step: 1,
            on_change: Callback::new(on_change),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, view: impl View) -> Self {
        self.label = AnyView::new(view);
        self
    }

    /// Sets the increment applied per step.
    #[must_use]
    pub const fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }
}

impl View for Stepper {
    fn realize(&self, ctx: &Context) -> HostNode {
        HostNode::new(KIND)
            .attr("min", *self.range.start())
            .attr("max", *self.range.end())
            .attr("value", self.value)
            .attr("step", self.step)
            .attr("on-change", ctx.boxed(self.on_change.clone()))
            .child(self.label.realize(ctx))
    }
}
