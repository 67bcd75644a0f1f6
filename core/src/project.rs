//! The projection walk.

use crate::context::Context;
use crate::host::HostNode;
use crate::view::View;

/// Translates a descriptor tree into a fully realized host tree.
///
/// This is the single entry point a host adapter calls to obtain a
/// renderable tree. It is one projection: deciding *when* to re-project
/// (state invalidation) and whether to diff against a previous tree is the
/// adapter's business, not this crate's.
///
/// Handles boxed during the walk are owned by the nodes that carry them,
/// so a projection abandoned midway leaves nothing pinned: dropping the
/// partial tree releases every handle it boxed.
pub fn project<V: View>(root: &V, ctx: &Context) -> HostNode {
    let _span = tracing::debug_span!("project").entered();
    let node = root.realize(ctx);
    tracing::debug!(
        kind = node.kind(),
        live_handles = ctx.live_handles(),
        "projection complete"
    );
    node
}
