//! The opaque value channel.
//!
//! A strongly typed Rust value sometimes has to cross into the host runtime
//! — a comparable tag, a preference payload, a closure to call back later.
//! The host cannot represent Rust generics, so the value is boxed into a
//! registry slot and the host receives only a [`Token`]. The Rust side that
//! later recovers the value must name its type again; the host relays the
//! token without any type information.
//!
//! Lifetime discipline is ownership, not manual retain/release: boxing
//! retains (the slot keeps the value alive independent of any other Rust
//! reference), and dropping the owning [`Handle`] is the single release.
//! Tokens are never reused, so probing a released token fails with
//! [`ChannelError::Released`] instead of silently aliasing a new value.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use core::any::{Any, type_name};
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::context::Context;

/// The stable address-equivalent identity of a boxed value.
///
/// Tokens are plain integers so the host can store, copy and hand them back
/// without understanding them. A token does not own anything; ownership
/// lives in [`Handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token(pub(crate) u64);

impl Token {
    /// The raw integer representation, for boundary code.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Reconstructs a token from its raw representation.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Errors surfaced by the value channel.
///
/// A [`TypeMismatch`](ChannelError::TypeMismatch) is a programmer error —
/// box and unbox disagreed on the carried type — and the infallible APIs
/// turn it into a panic rather than coercing. [`Released`](ChannelError::Released)
/// is the detectable sentinel for a token probed after its owning handle
/// was dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    /// The token's slot has been released (or never existed).
    #[error("handle {0:?} has already been released")]
    Released(Token),
    /// The slot holds a different type than the caller requested.
    #[error("boxed value is `{boxed}`, requested `{requested}`")]
    TypeMismatch {
        /// Type name recorded when the value was boxed.
        boxed: &'static str,
        /// Type name the unboxing site asked for.
        requested: &'static str,
    },
    /// The slot's value was boxed without an equality witness.
    #[error("boxed value `{boxed}` carries no equality witness")]
    NotComparable {
        /// Type name recorded when the value was boxed.
        boxed: &'static str,
    },
}

type EqWitness = fn(&dyn Any, &dyn Any) -> bool;

struct Slot {
    // Rc, not Box: dispatch clones the payload out of the registry so the
    // borrow is not held while a callback runs and boxes new handles.
    value: Rc<dyn Any>,
    type_name: &'static str,
    eq: Option<EqWitness>,
}

/// The slot table shared by a [`Context`] and every [`Handle`] it issues.
pub(crate) struct Registry {
    slots: RefCell<BTreeMap<u64, Slot>>,
    counter: Cell<u64>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            slots: RefCell::new(BTreeMap::new()),
            counter: Cell::new(1),
        }
    }

    fn insert(&self, value: Rc<dyn Any>, type_name: &'static str, eq: Option<EqWitness>) -> Token {
        let id = self.counter.get();
        self.counter
            .set(id.checked_add(1).expect("token counter overflowed"));
        self.slots
            .borrow_mut()
            .insert(id, Slot { value, type_name, eq });
        Token(id)
    }

    fn release(&self, token: Token) {
        self.slots.borrow_mut().remove(&token.0);
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub(crate) fn probe(&self, token: Token) -> Result<(), ChannelError> {
        if self.slots.borrow().contains_key(&token.0) {
            Ok(())
        } else {
            Err(ChannelError::Released(token))
        }
    }

    /// Clones the payload `Rc` out so callers can downcast without keeping
    /// the registry borrowed.
    pub(crate) fn payload(&self, token: Token) -> Result<(Rc<dyn Any>, &'static str), ChannelError> {
        let slots = self.slots.borrow();
        let slot = slots.get(&token.0).ok_or(ChannelError::Released(token))?;
        Ok((slot.value.clone(), slot.type_name))
    }

    pub(crate) fn unbox<T: 'static + Clone>(&self, token: Token) -> Result<T, ChannelError> {
        let (value, boxed) = self.payload(token)?;
        value
            .downcast_ref::<T>()
            .cloned()
            .ok_or(ChannelError::TypeMismatch {
                boxed,
                requested: type_name::<T>(),
            })
    }

    pub(crate) fn tokens_eq(&self, a: Token, b: Token) -> Result<bool, ChannelError> {
        let slots = self.slots.borrow();
        let sa = slots.get(&a.0).ok_or(ChannelError::Released(a))?;
        let sb = slots.get(&b.0).ok_or(ChannelError::Released(b))?;
        let eq = sa.eq.ok_or(ChannelError::NotComparable {
            boxed: sa.type_name,
        })?;
        if sa.type_name != sb.type_name {
            return Ok(false);
        }
        Ok(eq(sa.value.as_ref(), sb.value.as_ref()))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("live", &self.len()).finish()
    }
}

/// An owning reference to one boxed value.
///
/// `Handle` is deliberately neither `Copy` nor `Clone`: every box has
/// exactly one owner chain, and dropping the handle releases the slot
/// exactly once. The host side works with the plain [`Token`] instead and
/// gets [`ChannelError::Released`] when it outlives the owner.
pub struct Handle {
    token: Token,
    registry: Rc<Registry>,
}

impl Handle {
    pub(crate) fn new<T: 'static>(
        registry: &Rc<Registry>,
        value: T,
        eq: Option<EqWitness>,
    ) -> Self {
        let value: Rc<dyn Any> = Rc::new(value);
        let token = registry.insert(value, type_name::<T>(), eq);
        Self {
            token,
            registry: registry.clone(),
        }
    }

    /// The token to hand across the boundary.
    #[must_use]
    pub const fn token(&self) -> Token {
        self.token
    }

    /// Recovers the boxed value, failing on a type mismatch.
    ///
    /// # Errors
    /// [`ChannelError::TypeMismatch`] if `T` differs from the boxed type.
    pub fn try_unbox<T: 'static + Clone>(&self) -> Result<T, ChannelError> {
        self.registry.unbox(self.token)
    }

    /// Recovers the boxed value.
    ///
    /// # Panics
    /// Panics if `T` differs from the boxed type. A mismatch means box and
    /// unbox sites disagree on the contract, which is unrecoverable.
    #[must_use]
    pub fn unbox<T: 'static + Clone>(&self) -> T {
        match self.try_unbox() {
            Ok(value) => value,
            Err(err) => panic!("unbox contract violation: {err}"),
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.registry.release(self.token);
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.token.0).finish()
    }
}

/// A source-runtime combinator over boxed values, invokable from
/// host-driven traversal.
///
/// The host sees a reducer only as yet another token; it asks the
/// [`Context`] to apply it to two operand tokens and receives a fresh
/// [`Handle`] owning the combined result.
#[derive(Clone)]
pub struct Reducer(
    #[allow(clippy::type_complexity)]
    Rc<dyn Fn(&Context, Token, Token) -> Result<Handle, ChannelError>>,
);

impl Reducer {
    /// Wraps a typed combinator: unbox both operands, combine, re-box.
    pub fn new<T: 'static + Clone>(combine: impl Fn(T, T) -> T + 'static) -> Self {
        Self(Rc::new(move |ctx, a, b| {
            let va: T = ctx.unbox_token(a)?;
            let vb: T = ctx.unbox_token(b)?;
            Ok(ctx.boxed(combine(va, vb)))
        }))
    }

    pub(crate) fn call(
        &self,
        ctx: &Context,
        a: Token,
        b: Token,
    ) -> Result<Handle, ChannelError> {
        (self.0)(ctx, a, b)
    }
}

impl_debug!(Reducer);

/// Equality witness recorded for taggable values: downcast both sides and
/// compare with the type's own `PartialEq`.
pub(crate) fn eq_witness<T: 'static + PartialEq>() -> EqWitness {
    |a, b| match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
