//! Text display for FerryUI.

#![no_std]
extern crate alloc;

use alloc::string::String;

use ferryui_core::{Context, HostNode, View};

/// Kind key text leaves realize to.
pub const KIND: &str = "text";

/// A leaf descriptor displaying a run of text.
///
/// Configuration crosses the boundary as plain scalars; the host owns
/// fonts, wrapping and measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    size: Option<f64>,
    bold: bool,
}

/// Creates a text view.
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

impl Text {
    /// Creates a text view with default styling.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: None,
            bold: false,
        }
    }

    /// Sets the point size.
    #[must_use]
    pub const fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Renders the text bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl View for Text {
    fn realize(&self, _ctx: &Context) -> HostNode {
        let mut node = HostNode::new(KIND).attr("content", self.content.clone());
        if let Some(size) = self.size {
            node = node.attr("size", size);
        }
        if self.bold {
            node = node.attr("bold", true);
        }
        node
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use ferryui_core::Value;

    use super::*;

    #[test]
    fn realizes_content_and_styling() {
        let ctx = Context::new();
        let node = text("hello").size(17.0).bold().realize(&ctx);
        assert_eq!(node.kind(), KIND);
        assert_eq!(node.get("content").and_then(Value::as_text), Some("hello"));
        assert_eq!(node.get("size").and_then(Value::as_float), Some(17.0));
        assert_eq!(node.get("bold").and_then(Value::as_bool), Some(true));
    }

    #[test]
    fn unstyled_text_omits_optional_attrs() {
        let ctx = Context::new();
        let node = text("plain").realize(&ctx);
        assert!(node.get("size").is_none());
        assert!(node.get("bold").is_none());
    }
}
