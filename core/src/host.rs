//! The host-runtime object model produced by realization.
//!
//! The host engine never sees a descriptor. It receives a tree of
//! [`HostNode`] values: a stable string kind key, a flat list of
//! configuration attributes, and an ordered list of already-realized
//! children. Enumerated source-side configuration (alignments, edges)
//! crosses the boundary as stable integer keys so the host's
//! separately-versioned code can match on them without sharing Rust type
//! definitions.

use alloc::string::String;
use alloc::vec::Vec;

use crate::channel::Handle;

/// Kind key of the empty leaf, the identity element of composition.
pub const EMPTY: &str = "empty";

/// Kind key of the anonymous composite produced by tuple composition.
pub const GROUP: &str = "group";

/// A single configuration value carried on a [`HostNode`].
///
/// This is the closed set of payloads the host runtime can represent
/// natively. Anything outside it crosses the boundary boxed behind a
/// [`Handle`].
#[derive(Debug)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// An integer, also used to encode enumerated keys.
    Int(i64),
    /// A floating point quantity (spacing, sizes, ranges).
    Float(f64),
    /// UTF-8 text.
    Text(String),
    /// An opaque handle to a boxed source-runtime value.
    Handle(Handle),
}

impl Value {
    /// Returns the boolean payload, if this value is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer payload, if this value is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float payload, if this value is one.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text payload, if this value is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the handle payload, if this value is one.
    #[must_use]
    pub const fn as_handle(&self) -> Option<&Handle> {
        match self {
            Self::Handle(handle) => Some(handle),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            // Handles compare by token: two boxes are the same payload only
            // if they are the same registry slot.
            (Self::Handle(a), Self::Handle(b)) => a.token() == b.token(),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Handle> for Value {
    fn from(value: Handle) -> Self {
        Self::Handle(value)
    }
}

/// One node of the realized host-runtime tree.
///
/// A `HostNode` owns its children and every [`Handle`] stored in its
/// attributes; dropping the node (typically host-driven, through the FFI
/// drop function for the owning pointer) releases those handles exactly
/// once.
#[derive(Debug, PartialEq)]
pub struct HostNode {
    kind: &'static str,
    attrs: Vec<(&'static str, Value)>,
    children: Vec<HostNode>,
}

impl HostNode {
    /// Creates an empty node of the given kind.
    #[must_use]
    pub const fn new(kind: &'static str) -> Self {
        Self {
            kind,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates the no-op node the empty leaf realizes to.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(EMPTY)
    }

    /// Attaches a configuration attribute.
    #[must_use]
    pub fn attr(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    /// Appends one realized child.
    #[must_use]
    pub fn child(mut self, child: HostNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends realized children in order.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = HostNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// The stable kind key of this node.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Looks up an attribute by key, returning the last one pushed.
    ///
    /// Later attributes win so that an outer modifier can override a value
    /// set by the node it wraps.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// All attributes in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[(&'static str, Value)] {
        &self.attrs
    }

    /// The realized children, in composition order.
    #[must_use]
    pub fn child_nodes(&self) -> &[HostNode] {
        &self.children
    }

    /// Returns `true` if this node is the empty leaf.
    #[must_use]
    pub fn is_empty_leaf(&self) -> bool {
        self.kind == EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attrs_are_ordered_and_last_wins() {
        let node = HostNode::new("probe")
            .attr("spacing", 4.0)
            .attr("spacing", 8.0);
        assert_eq!(node.get("spacing"), Some(&Value::Float(8.0)));
        assert_eq!(node.attrs().len(), 2);
    }

    #[test]
    fn children_preserve_order() {
        let node = HostNode::new(GROUP)
            .child(HostNode::new("a"))
            .children([HostNode::new("b"), HostNode::new("c")]);
        let kinds: alloc::vec::Vec<_> =
            node.child_nodes().iter().map(HostNode::kind).collect();
        assert_eq!(kinds, ["a", "b", "c"]);
    }

    #[test]
    fn empty_node_is_empty_leaf() {
        assert!(HostNode::empty().is_empty_leaf());
        assert!(!HostNode::new(GROUP).is_empty_leaf());
    }
}
