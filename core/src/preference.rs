//! Preference propagation across the boundary.
//!
//! A preference is a value a subtree publishes upward. The host runtime
//! owns the traversal that collects and merges preferences, but it cannot
//! interpret the values: defaults, payloads and the merging combinator are
//! all bundled into opaque handles on the realized node, and the host
//! drives the merge through [`Context::reduce`](crate::Context::reduce).

use crate::action::Callback;
use crate::channel::{ChannelError, Reducer, Token};
use crate::context::Context;
use crate::view::View;

/// Attribute keys for the preference bundle on a realized node.
pub mod attr {
    /// The preference key's stable name.
    pub const KEY: &str = "preference-key";
    /// Handle to the boxed published value.
    pub const VALUE: &str = "preference-value";
    /// Handle to the boxed default value.
    pub const DEFAULT: &str = "preference-default";
    /// Handle to the boxed [`Reducer`](crate::Reducer).
    pub const REDUCER: &str = "preference-reducer";
    /// Handle to the boxed change callback.
    pub const ACTION: &str = "preference-action";
}

/// A named preference with a default and a merge rule.
///
/// `reduce` folds the value published by a later sibling subtree into the
/// accumulated value; the host applies it pairwise while walking.
pub trait PreferenceKey: 'static {
    /// The carried value type.
    type Value: 'static + Clone;

    /// Stable name the host matches preference bundles by.
    fn name() -> &'static str;

    /// Value used when no subtree publishes this preference.
    fn default_value() -> Self::Value;

    /// Merges the next published value into the accumulated one.
    fn reduce(value: &mut Self::Value, next: Self::Value);
}

/// Publishes a preference value from `target`'s subtree.
///
/// The value is boxed at realization time so the host can carry it inside
/// its own state containers regardless of `K::Value`.
pub fn preference<K: PreferenceKey>(target: impl View, value: K::Value) -> Preference<K> {
    Preference {
        target: crate::AnyView::new(target),
        value,
    }
}

/// Descriptor produced by [`preference`].
pub struct Preference<K: PreferenceKey> {
    target: crate::AnyView,
    value: K::Value,
}

impl<K: PreferenceKey> core::fmt::Debug for Preference<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Preference")
            .field("key", &K::name())
            .finish_non_exhaustive()
    }
}

impl<K: PreferenceKey> View for Preference<K> {
    fn realize(&self, ctx: &Context) -> crate::HostNode {
        self.target
            .realize(ctx)
            .attr(attr::KEY, K::name())
            .attr(attr::VALUE, ctx.boxed(self.value.clone()))
    }
}

/// Observes the merged preference value for `K` below `target`.
///
/// Realization bundles three handles onto the node: the boxed default, a
/// boxed [`Reducer`] that unboxes two operands, runs `K::reduce`, and
/// re-boxes the result, and a boxed callback the host fires with the final
/// merged token. Everything the host holds is opaque; every unbox happens
/// back on the Rust side.
pub fn on_preference_change<K, F>(target: impl View, action: F) -> OnPreferenceChange<K, F>
where
    K: PreferenceKey,
    F: Fn(K::Value) + Clone + 'static,
{
    OnPreferenceChange {
        target: crate::AnyView::new(target),
        action,
        _key: core::marker::PhantomData,
    }
}

/// Descriptor produced by [`on_preference_change`].
pub struct OnPreferenceChange<K: PreferenceKey, F> {
    target: crate::AnyView,
    action: F,
    _key: core::marker::PhantomData<fn() -> K>,
}

impl<K, F> core::fmt::Debug for OnPreferenceChange<K, F>
where
    K: PreferenceKey,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OnPreferenceChange")
            .field("key", &K::name())
            .finish_non_exhaustive()
    }
}

impl<K, F> View for OnPreferenceChange<K, F>
where
    K: PreferenceKey,
    F: Fn(K::Value) + Clone + 'static,
{
    fn realize(&self, ctx: &Context) -> crate::HostNode {
        let default = ctx.boxed(K::default_value());
        let reducer = ctx.boxed(Reducer::new(|mut value: K::Value, next: K::Value| {
            K::reduce(&mut value, next);
            value
        }));
        // The host hands back the token of the merged value; the action
        // unboxes it with the key's type restored.
        let action = self.action.clone();
        let deliver = ctx.clone();
        let callback = ctx.boxed(Callback::new(move |token: Token| {
            match deliver.unbox_token::<K::Value>(token) {
                Ok(value) => action(value),
                Err(err) => on_delivery_error(err),
            }
        }));
        self.target
            .realize(ctx)
            .attr(attr::KEY, K::name())
            .attr(attr::DEFAULT, default)
            .attr(attr::REDUCER, reducer)
            .attr(attr::ACTION, callback)
    }
}

fn on_delivery_error(err: ChannelError) {
    // A stale or mistyped token here means the host broke the handle
    // contract; surface it loudly rather than dropping the change.
    panic!("preference delivery contract violation: {err}");
}
