//! Environment values threaded through the host tree.
//!
//! The host propagates environment data through its own state containers,
//! which require one uniform, host-representable shape regardless of the
//! carried type. A [`WithValue`] wrapper therefore boxes the payload and
//! attaches only a key string and an opaque handle; the subtree that reads
//! the value back names its type again on the Rust side.

use alloc::string::String;

use crate::context::Context;
use crate::host::HostNode;
use crate::view::{AnyView, View};

/// Attribute key naming the environment entry.
pub const KEY_ATTR: &str = "env-key";
/// Attribute key carrying the boxed payload handle.
pub const VALUE_ATTR: &str = "env-value";

/// Associates an arbitrarily typed value with `target`'s subtree.
pub fn with_value<T: 'static + Clone>(
    target: impl View,
    key: impl Into<String>,
    value: T,
) -> WithValue<T> {
    WithValue {
        target: AnyView::new(target),
        key: key.into(),
        value,
    }
}

/// Descriptor produced by [`with_value`].
#[derive(Debug)]
pub struct WithValue<T> {
    target: AnyView,
    key: String,
    value: T,
}

impl<T: 'static + Clone> View for WithValue<T> {
    fn realize(&self, ctx: &Context) -> HostNode {
        self.target
            .realize(ctx)
            .attr(KEY_ATTR, self.key.clone())
            .attr(VALUE_ATTR, ctx.boxed(self.value.clone()))
    }
}
