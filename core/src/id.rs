//! User-assigned identity tags.
//!
//! Realization is not memoized, so a host adapter that wants to reuse host
//! objects across re-renders needs something stable to key on. A tag is an
//! arbitrary comparable Rust value boxed into the channel; the host holds
//! its token and asks [`Context::tokens_eq`](crate::Context::tokens_eq)
//! whether two tagged views are the same logical view.

use crate::context::Context;
use crate::host::HostNode;
use crate::view::View;

/// Attribute key under which a tag handle is attached.
pub const TAG_ATTR: &str = "tag";

/// A view paired with a comparable identity tag.
#[derive(Debug, Clone)]
pub struct TaggedView<T, V> {
    tag: T,
    content: V,
}

impl<T, V> TaggedView<T, V>
where
    T: 'static + PartialEq + Clone,
    V: View,
{
    /// Tags `content` with `tag`.
    pub const fn new(tag: T, content: V) -> Self {
        Self { tag, content }
    }
}

impl<T, V> View for TaggedView<T, V>
where
    T: 'static + PartialEq + Clone,
    V: View,
{
    fn realize(&self, ctx: &Context) -> HostNode {
        let handle = ctx.boxed_tag(self.tag.clone());
        self.content.realize(ctx).attr(TAG_ATTR, handle)
    }
}

#[cfg(test)]
mod tests {
    use crate::host::Value;
    use crate::view::EmptyView;

    use super::*;

    #[test]
    fn tag_is_boxed_and_comparable_host_side() {
        let ctx = Context::new();
        let a = TaggedView::new("row", EmptyView).realize(&ctx);
        let b = TaggedView::new("row", EmptyView).realize(&ctx);
        let c = TaggedView::new("header", EmptyView).realize(&ctx);

        let token = |node: &HostNode| {
            node.get(TAG_ATTR)
                .and_then(Value::as_handle)
                .map(|handle| handle.token())
                .unwrap()
        };
        assert_eq!(ctx.tokens_eq(token(&a), token(&b)), Ok(true));
        assert_eq!(ctx.tokens_eq(token(&a), token(&c)), Ok(false));
    }

    #[test]
    fn dropping_the_tagged_node_releases_its_tag() {
        let ctx = Context::new();
        let node = TaggedView::new(7_i32, EmptyView).realize(&ctx);
        assert_eq!(ctx.live_handles(), 1);
        drop(node);
        assert_eq!(ctx.live_handles(), 0);
    }
}
