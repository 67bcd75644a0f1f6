//! # FerryUI FFI
//!
//! C entry points for host runtimes embedding FerryUI. The boundary
//! follows a small set of rules:
//!
//! - Descriptors, contexts, realized nodes and owning handles cross as
//!   opaque pointers with explicit `ferryui_drop_*` functions.
//! - Boxed values are referred to by their raw integer token; dispatch
//!   entry points return `false` for a stale token instead of crashing.
//! - Strings cross as pointer/length pairs ([`FuiStr`]) borrowed from the
//!   Rust side; the host copies what it wants to keep.
//!
//! The `IntoFFI`/`IntoRust` traits keep the unsafe surface confined to
//! conversion sites.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;
pub mod context;
pub mod node;
pub mod str;
pub mod view;

pub use context::{FuiContext, FuiHandle};
pub use node::FuiNode;
pub use str::FuiStr;
pub use view::FuiAnyView;

/// Converts a Rust value into its FFI-compatible representation.
pub trait IntoFFI: 'static {
    /// The FFI-compatible type this Rust type converts to.
    type FFI: 'static;

    /// Converts this value into its FFI representation.
    fn into_ffi(self) -> Self::FFI;
}

/// Converts an FFI representation back into its Rust value.
pub trait IntoRust {
    /// The Rust type recovered from this FFI representation.
    type Rust;

    /// Recovers the Rust value.
    ///
    /// # Safety
    /// For pointer representations the value must have been produced by
    /// the matching [`IntoFFI`] implementation and not already consumed.
    unsafe fn into_rust(self) -> Self::Rust;
}

ffi_safe!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, bool, usize);

#[cfg(feature = "std")]
fn install_panic_hook() {
    use tracing_subscriber::{EnvFilter, fmt};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .try_init();

    // Route panics through tracing so they reach the host's log sink.
    std::panic::set_hook(alloc::boxed::Box::new(tracing_panic::panic_hook));
}

#[cfg(not(feature = "std"))]
fn install_panic_hook() {}

/// Initializes logging and panic reporting.
///
/// Call once, before any other entry point. Calling it again is harmless.
#[unsafe(no_mangle)]
pub extern "C" fn ferryui_init() {
    install_panic_hook();
    tracing::debug!("ferryui initialized");
}

#[cfg(test)]
mod tests {
    use ferryui_core::{Context, HostNode};

    use super::*;

    #[test]
    fn opaque_pointers_round_trip_ownership() {
        let ptr = Context::new().into_ffi();
        assert!(!ptr.is_null());
        let ctx: Context = unsafe { IntoRust::into_rust(ptr) };
        assert_eq!(ctx.live_handles(), 0);
    }

    #[test]
    fn none_crosses_as_null() {
        let ptr = IntoFFI::into_ffi(None::<HostNode>);
        assert!(ptr.is_null());
    }

    #[test]
    fn scalars_are_identity_converted() {
        assert_eq!(IntoFFI::into_ffi(7_i64), 7_i64);
        let back: bool = unsafe { IntoRust::into_rust(true) };
        assert!(back);
    }
}
