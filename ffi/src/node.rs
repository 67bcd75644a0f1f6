//! Accessors over realized host trees.
//!
//! A projection hands the host an owned `*mut FuiNode`. The host walks it
//! through these read-only accessors, building its own native widgets, and
//! finally calls `ferryui_drop_node` on the root — which releases every
//! handle boxed anywhere in the tree exactly once. Child pointers obtained
//! from [`ferryui_node_child`] are borrows into the root and must not be
//! dropped individually.

use ferryui_core::{HostNode, Value};

use crate::FuiStr;

opaque!(FuiNode, HostNode, node);

unsafe fn attr<'a>(node: *const FuiNode, key: FuiStr) -> Option<&'a Value> {
    let node = unsafe { node.as_ref() }?;
    let key = unsafe { key.as_str() }?;
    node.get(key)
}

/// The stable kind key of a node.
///
/// # Safety
/// `node` must be a valid node pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_node_kind(node: *const FuiNode) -> FuiStr {
    match unsafe { node.as_ref() } {
        Some(node) => FuiStr::borrowed(node.kind()),
        None => FuiStr::empty(),
    }
}

/// Returns `true` if the node is the no-op empty leaf.
///
/// # Safety
/// `node` must be a valid node pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_node_is_empty(node: *const FuiNode) -> bool {
    unsafe { node.as_ref() }.is_some_and(|node| node.is_empty_leaf())
}

/// Number of realized children.
///
/// # Safety
/// `node` must be a valid node pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_node_child_count(node: *const FuiNode) -> usize {
    unsafe { node.as_ref() }.map_or(0, |node| node.child_nodes().len())
}

/// Borrows the child at `index`, in composition order.
///
/// Returns null when out of range. The returned pointer borrows from
/// `node`; do not drop it and do not use it after dropping the root.
///
/// # Safety
/// `node` must be a valid node pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_node_child(node: *const FuiNode, index: usize) -> *const FuiNode {
    unsafe { node.as_ref() }
        .and_then(|node| node.child_nodes().get(index))
        .map_or(core::ptr::null(), |child| {
            core::ptr::from_ref(child).cast::<FuiNode>()
        })
}

/// Reads a boolean attribute into `out`, returning whether it was present.
///
/// # Safety
/// `node` must be a valid node pointer and `out` writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_node_attr_bool(
    node: *const FuiNode,
    key: FuiStr,
    out: *mut bool,
) -> bool {
    match unsafe { attr(node, key) }.and_then(Value::as_bool) {
        Some(value) => {
            unsafe { out.write(value) };
            true
        }
        None => false,
    }
}

/// Reads an integer attribute into `out`, returning whether it was present.
///
/// Enumerated configuration (alignments, edges) crosses as stable integer
/// keys through this accessor.
///
/// # Safety
/// `node` must be a valid node pointer and `out` writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_node_attr_int(
    node: *const FuiNode,
    key: FuiStr,
    out: *mut i64,
) -> bool {
    match unsafe { attr(node, key) }.and_then(Value::as_int) {
        Some(value) => {
            unsafe { out.write(value) };
            true
        }
        None => false,
    }
}

/// Reads a float attribute into `out`, returning whether it was present.
///
/// # Safety
/// `node` must be a valid node pointer and `out` writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_node_attr_float(
    node: *const FuiNode,
    key: FuiStr,
    out: *mut f64,
) -> bool {
    match unsafe { attr(node, key) }.and_then(Value::as_float) {
        Some(value) => {
            unsafe { out.write(value) };
            true
        }
        None => false,
    }
}

/// Reads a text attribute, returning the empty view when absent.
///
/// The returned view borrows from `node`.
///
/// # Safety
/// `node` must be a valid node pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_node_attr_text(node: *const FuiNode, key: FuiStr) -> FuiStr {
    unsafe { attr(node, key) }
        .and_then(Value::as_text)
        .map_or(FuiStr::empty(), FuiStr::borrowed)
}

/// Reads a handle attribute as its raw token into `out`, returning whether
/// it was present.
///
/// The token stays valid until the node owning the handle is dropped; the
/// dispatch entry points report a stale token by returning `false`.
///
/// # Safety
/// `node` must be a valid node pointer and `out` writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferryui_node_attr_token(
    node: *const FuiNode,
    key: FuiStr,
    out: *mut u64,
) -> bool {
    match unsafe { attr(node, key) }.and_then(Value::as_handle) {
        Some(handle) => {
            unsafe { out.write(handle.token().raw()) };
            true
        }
        None => false,
    }
}
