//! The explicit per-projection execution context.
//!
//! The original design of this kind of bridge tends to assume a global UI
//! thread and a process-wide box registry. Here the assumption is explicit:
//! a [`Context`] is created by the adapter that drives projection, passed
//! to every `realize` call, and shared (cheaply, by `Rc`) with every
//! [`Handle`] it issues. Because it is `Rc`-based it is not `Send`, so a
//! multi-threaded host cannot accidentally share one without adding its own
//! synchronization.

use alloc::rc::Rc;
use core::fmt;

use crate::action::{Action, Callback};
use crate::channel::{ChannelError, Handle, Reducer, Registry, Token, eq_witness};

/// Shared state for one projection lifetime: the opaque value channel plus
/// dispatch entry points the host calls back into.
#[derive(Clone)]
pub struct Context {
    registry: Rc<Registry>,
}

impl Context {
    /// Creates a fresh context with an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry::new()),
        }
    }

    /// Boxes a value into the channel, returning the owning handle.
    ///
    /// The slot keeps the value alive even if no other Rust reference does;
    /// the host may hold the token across renders.
    pub fn boxed<T: 'static>(&self, value: T) -> Handle {
        Handle::new(&self.registry, value, None)
    }

    /// Boxes a comparable tag, recording an equality witness so the host
    /// can ask whether two tags identify the same logical view.
    pub fn boxed_tag<T: 'static + PartialEq>(&self, value: T) -> Handle {
        Handle::new(&self.registry, value, Some(eq_witness::<T>()))
    }

    /// Number of live slots. Useful for leak assertions in harnesses.
    #[must_use]
    pub fn live_handles(&self) -> usize {
        self.registry.len()
    }

    /// Checks whether a token still refers to a live slot.
    ///
    /// # Errors
    /// [`ChannelError::Released`] once the owning handle has dropped.
    pub fn probe(&self, token: Token) -> Result<(), ChannelError> {
        self.registry.probe(token)
    }

    /// Recovers a boxed value through its raw token.
    ///
    /// This is the host-side path: the host hands a token back (inside a
    /// callback or a reduction) and the Rust side names the type again.
    ///
    /// # Errors
    /// [`ChannelError::Released`] for a stale token,
    /// [`ChannelError::TypeMismatch`] if `T` is not the boxed type.
    pub fn unbox_token<T: 'static + Clone>(&self, token: Token) -> Result<T, ChannelError> {
        self.registry.unbox(token)
    }

    /// Compares two boxed tags with the tag type's own equality.
    ///
    /// Tags of different types compare unequal rather than erroring.
    ///
    /// # Errors
    /// [`ChannelError::Released`] if either token is stale,
    /// [`ChannelError::NotComparable`] if the first was boxed without a
    /// witness (i.e. not via [`Context::boxed_tag`]).
    pub fn tokens_eq(&self, a: Token, b: Token) -> Result<bool, ChannelError> {
        self.registry.tokens_eq(a, b)
    }

    /// Combines two boxed values with a source-runtime combinator,
    /// returning a fresh handle owning the result.
    ///
    /// # Errors
    /// Propagates unbox failures for either operand.
    pub fn combine<T: 'static + Clone>(
        &self,
        a: &Handle,
        b: &Handle,
        combine: impl FnOnce(T, T) -> T,
    ) -> Result<Handle, ChannelError> {
        let va: T = a.try_unbox()?;
        let vb: T = b.try_unbox()?;
        Ok(self.boxed(combine(va, vb)))
    }

    /// Fires a boxed [`Action`]. Host-driven: button pressed, row tapped.
    ///
    /// # Errors
    /// [`ChannelError::Released`] for a stale token,
    /// [`ChannelError::TypeMismatch`] if the slot is not an action.
    pub fn invoke(&self, token: Token) -> Result<(), ChannelError> {
        let action: Action = self.registry.unbox(token)?;
        action.call();
        Ok(())
    }

    /// Fires a boxed [`Callback`] with a payload. Host-driven: slider
    /// moved, toggle flipped.
    ///
    /// # Errors
    /// [`ChannelError::Released`] for a stale token,
    /// [`ChannelError::TypeMismatch`] if the slot is not a callback over `T`.
    pub fn invoke_with<T: 'static>(&self, token: Token, value: T) -> Result<(), ChannelError> {
        let callback: Callback<T> = self.registry.unbox(token)?;
        callback.call(value);
        Ok(())
    }

    /// Applies a boxed [`Reducer`] to two operand tokens.
    ///
    /// Each reduction boxes a fresh handle; the superseded operands stay
    /// owned by whoever held them and release on their own schedule.
    ///
    /// # Errors
    /// Propagates stale-token and mismatch failures from any of the three
    /// slots involved.
    pub fn reduce(&self, reducer: Token, a: Token, b: Token) -> Result<Handle, ChannelError> {
        let reducer: Reducer = self.registry.unbox(reducer)?;
        reducer.call(self, a, b)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("live_handles", &self.live_handles())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use alloc::rc::Rc;

    use super::*;

    #[test]
    fn invoke_fires_the_captured_closure() {
        let ctx = Context::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let action = ctx.boxed(Action::new(move || counter.set(counter.get() + 1)));
        ctx.invoke(action.token()).unwrap();
        ctx.invoke(action.token()).unwrap();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn invoke_with_delivers_the_payload() {
        let ctx = Context::new();
        let seen = Rc::new(Cell::new(0.0_f64));
        let sink = seen.clone();
        let callback = ctx.boxed(Callback::new(move |value: f64| sink.set(value)));
        ctx.invoke_with(callback.token(), 0.75_f64).unwrap();
        assert_eq!(seen.get(), 0.75);
    }

    #[test]
    fn invoke_after_release_reports_released() {
        let ctx = Context::new();
        let action = ctx.boxed(Action::new(|| {}));
        let token = action.token();
        drop(action);
        assert_eq!(ctx.invoke(token), Err(ChannelError::Released(token)));
    }

    #[test]
    fn combine_boxes_a_fresh_handle() {
        let ctx = Context::new();
        let a = ctx.boxed(2_i64);
        let b = ctx.boxed(3_i64);
        let sum = ctx.combine(&a, &b, |x: i64, y| x + y).unwrap();
        assert_eq!(sum.unbox::<i64>(), 5);
        assert_eq!(ctx.live_handles(), 3);
    }
}
