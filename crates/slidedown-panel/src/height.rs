//! Height resolution: deciding the pixel height a panel should drive
//! toward for its current logical state.

use crate::host::SlideHost;
use crate::types::NodeId;

/// Resolve the target height for a panel.
///
/// Closed panels and panels without content target zero. Open panels
/// with content target the node's natural content height. Resolution is
/// read-only measurement; it never mutates persisted style.
///
/// A detached node resolves to zero rather than failing.
pub fn resolve_target<H: SlideHost>(host: &H, node: NodeId, has_content: bool, open: bool) -> f64 {
    if !open || !has_content {
        return 0.0;
    }
    match host.measure_natural_height(node) {
        Some(px) => px.max(0.0),
        None => {
            tracing::warn!("height resolution on detached node {:?}", node);
            0.0
        }
    }
}
