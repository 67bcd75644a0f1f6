//! Descriptors at the boundary and the projection entry point.

use ferryui_core::{AnyView, project};

use crate::IntoFFI;
use crate::context::FuiContext;
use crate::node::FuiNode;

opaque!(FuiAnyView, AnyView, any_view);

/// Projects a descriptor tree into an owned host tree.
///
/// Neither argument is consumed: descriptors are immutable and may be
/// projected again (each projection boxes fresh handles). The returned
/// root is owned by the caller; drop it with `ferryui_drop_node`.
///
/// # Safety
/// `context` and `view` must be valid pointers from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_project(
    context: *const FuiContext,
    view: *const FuiAnyView,
) -> *mut FuiNode {
    let (Some(ctx), Some(view)) = (unsafe { context.as_ref() }, unsafe { view.as_ref() }) else {
        return core::ptr::null_mut();
    };
    project(&view.0, &ctx.0).into_ffi()
}

/// Exports the application entry point.
///
/// The invoking crate defines `fn main() -> impl View`; the macro exports
/// `ferryui_root`, which the host calls to obtain the erased root
/// descriptor it then projects and re-projects as it pleases.
#[macro_export]
macro_rules! export {
    () => {
        /// Builds the application's root descriptor.
        #[unsafe(no_mangle)]
        pub extern "C" fn ferryui_root() -> *mut $crate::FuiAnyView {
            $crate::IntoFFI::into_ffi(ferryui::AnyView::new(main()))
        }
    };
}

#[cfg(test)]
mod tests {
    use ferryui::{Token, button, text, vstack};

    use crate::FuiStr;
    use crate::IntoRust;
    use crate::context::{ferryui_context_new, ferryui_invoke, ferryui_invoke_float};
    use crate::node::{
        ferryui_node_attr_text, ferryui_node_attr_token, ferryui_node_child,
        ferryui_node_child_count, ferryui_node_kind,
    };

    use super::*;

    #[test]
    fn projection_hands_over_an_owned_tree() {
        let ctx = ferryui_context_new();
        let view = AnyView::new(vstack((text("a"), text("b")))).into_ffi();
        let node = unsafe { ferryui_project(ctx, view) };
        assert!(!node.is_null());
        assert_eq!(unsafe { ferryui_node_child_count(node) }, 2);
        assert_eq!(unsafe { ferryui_node_kind(node).as_str() }, Some("vstack"));
        let first = unsafe { ferryui_node_child(node, 0) };
        let content = unsafe { ferryui_node_attr_text(first, FuiStr::borrowed("content")) };
        assert_eq!(unsafe { content.as_str() }, Some("a"));
        unsafe {
            let _ = IntoRust::into_rust(node);
            let _ = IntoRust::into_rust(view);
            let _ = IntoRust::into_rust(ctx);
        }
    }

    #[test]
    fn dropping_the_tree_invalidates_its_tokens() {
        let ctx = ferryui_context_new();
        let view = AnyView::new(button(text("go"), || {})).into_ffi();
        let node = unsafe { ferryui_project(ctx, view) };
        let mut raw = 0_u64;
        assert!(unsafe { ferryui_node_attr_token(node, FuiStr::borrowed("action"), &raw mut raw) });
        assert!(unsafe { ferryui_invoke(ctx, raw) });
        unsafe {
            let _ = IntoRust::into_rust(node);
        }
        // The handle died with the tree; dispatch now reports failure.
        assert!(!unsafe { ferryui_invoke(ctx, raw) });
        assert!(!unsafe { ferryui_invoke_float(ctx, raw, 0.5) });
        unsafe {
            let _ = IntoRust::into_rust(view);
            let _ = IntoRust::into_rust(ctx);
        }
    }

    #[test]
    fn stale_and_null_inputs_fail_soft() {
        let ctx = ferryui_context_new();
        assert!(!unsafe { ferryui_invoke(ctx, Token::from_raw(999).raw()) });
        let node = unsafe { ferryui_project(ctx, core::ptr::null()) };
        assert!(node.is_null());
        unsafe {
            let _ = IntoRust::into_rust(ctx);
        }
    }
}
