//! Closures captured at leaf-construction time and invoked host-side.
//!
//! The host runtime fires these through the [`Context`](crate::Context)
//! dispatch entry points; it is responsible for thread affinity when doing
//! so. The closure reference stays valid for as long as the handle boxing
//! it has not been released.

use alloc::rc::Rc;
use core::fmt;

/// A fire-and-forget callback with no payload.
#[derive(Clone)]
pub struct Action(Rc<dyn Fn()>);

impl Action {
    /// Wraps a closure.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the closure.
    pub fn call(&self) {
        (self.0)();
    }
}

impl_debug!(Action);

/// A callback carrying one payload value, e.g. a changed slider position.
pub struct Callback<T>(Rc<dyn Fn(T)>);

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Callback<T> {
    /// Wraps a closure.
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the closure with `value`.
    pub fn call(&self, value: T) {
        (self.0)(value);
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(core::any::type_name::<Self>())
    }
}
