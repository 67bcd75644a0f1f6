//! The context and the host-driven dispatch entry points.
//!
//! The host never unboxes a token itself. It hands tokens back through
//! these functions and the Rust side names the carried type again. Every
//! dispatch function returns `false` (or null) on failure — a stale token
//! after the owning node was dropped, or a token boxing something other
//! than what the entry point expects — and logs the error rather than
//! unwinding across the boundary.

use ferryui_core::{Context, Handle, Token};

use crate::IntoFFI;

opaque!(FuiContext, Context, context);
opaque!(FuiHandle, Handle, handle);

unsafe fn ctx<'a>(ptr: *const FuiContext) -> Option<&'a Context> {
    unsafe { ptr.as_ref() }.map(|wrapper| &wrapper.0)
}

/// Creates a fresh context.
///
/// The context drives one projection lifetime; drop it with
/// `ferryui_drop_context` after dropping every tree projected through it.
#[unsafe(no_mangle)]
pub extern "C" fn ferryui_context_new() -> *mut FuiContext {
    Context::new().into_ffi()
}

/// Number of live boxed values. Zero once every projected tree and
/// reduction result has been dropped.
///
/// # Safety
/// `context` must be a valid context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_context_live_handles(context: *const FuiContext) -> usize {
    unsafe { ctx(context) }.map_or(0, Context::live_handles)
}

/// Fires a boxed no-payload action.
///
/// # Safety
/// `context` must be a valid context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_invoke(context: *const FuiContext, token: u64) -> bool {
    let Some(ctx) = (unsafe { ctx(context) }) else {
        return false;
    };
    match ctx.invoke(Token::from_raw(token)) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(token, %err, "action dispatch failed");
            false
        }
    }
}

/// Fires a boxed boolean callback, e.g. a toggle flip.
///
/// # Safety
/// `context` must be a valid context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_invoke_bool(
    context: *const FuiContext,
    token: u64,
    value: bool,
) -> bool {
    unsafe { invoke_with(context, token, value) }
}

/// Fires a boxed integer callback, e.g. a stepper change.
///
/// # Safety
/// `context` must be a valid context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_invoke_int(
    context: *const FuiContext,
    token: u64,
    value: i64,
) -> bool {
    unsafe { invoke_with(context, token, value) }
}

/// Fires a boxed float callback, e.g. a slider drag.
///
/// # Safety
/// `context` must be a valid context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_invoke_float(
    context: *const FuiContext,
    token: u64,
    value: f64,
) -> bool {
    unsafe { invoke_with(context, token, value) }
}

/// Fires a boxed token callback, delivering another boxed value as the
/// payload. This is the delivery path for merged preference values.
///
/// # Safety
/// `context` must be a valid context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_invoke_token(
    context: *const FuiContext,
    token: u64,
    payload: u64,
) -> bool {
    unsafe { invoke_with(context, token, Token::from_raw(payload)) }
}

unsafe fn invoke_with<T: 'static>(context: *const FuiContext, token: u64, value: T) -> bool {
    let Some(ctx) = (unsafe { ctx(context) }) else {
        return false;
    };
    match ctx.invoke_with(Token::from_raw(token), value) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(token, %err, "callback dispatch failed");
            false
        }
    }
}

/// Applies a boxed reducer to two operand tokens.
///
/// Returns a handle owning the combined value, or null on failure. The
/// host drops the handle with `ferryui_drop_handle` when the combined
/// value is no longer needed.
///
/// # Safety
/// `context` must be a valid context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_reduce(
    context: *const FuiContext,
    reducer: u64,
    a: u64,
    b: u64,
) -> *mut FuiHandle {
    let Some(ctx) = (unsafe { ctx(context) }) else {
        return core::ptr::null_mut();
    };
    match ctx.reduce(Token::from_raw(reducer), Token::from_raw(a), Token::from_raw(b)) {
        Ok(handle) => handle.into_ffi(),
        Err(err) => {
            tracing::warn!(reducer, a, b, %err, "reduction failed");
            core::ptr::null_mut()
        }
    }
}

/// The raw token of an owning handle.
///
/// # Safety
/// `handle` must be a valid handle pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_handle_token(handle: *const FuiHandle) -> u64 {
    unsafe { handle.as_ref() }.map_or(0, |handle| handle.token().raw())
}

/// Compares two boxed tags with the tag type's own equality, writing the
/// verdict into `out`. Returns `false` when either token is stale or the
/// first carries no equality witness.
///
/// # Safety
/// `context` must be a valid context pointer and `out` writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_tokens_eq(
    context: *const FuiContext,
    a: u64,
    b: u64,
    out: *mut bool,
) -> bool {
    let Some(ctx) = (unsafe { ctx(context) }) else {
        return false;
    };
    match ctx.tokens_eq(Token::from_raw(a), Token::from_raw(b)) {
        Ok(verdict) => {
            unsafe { out.write(verdict) };
            true
        }
        Err(err) => {
            tracing::warn!(a, b, %err, "tag comparison failed");
            false
        }
    }
}
