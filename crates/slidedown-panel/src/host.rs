//! The seam between the panel and its host rendering environment.
//!
//! The host owns the real nodes, runs the native height transition, and
//! delivers the transition-finished notification. The panel never drives
//! its own scheduling loop; it reacts to lifecycle calls and to the
//! `HostEvent`s the host delivers.
//!
//! Two rules keep interruption unambiguous:
//! - a completion watcher is a one-shot subscription keyed to a specific
//!   in-flight transition, never an implicit flag;
//! - disarming is unconditional and idempotent, so disarming an
//!   already-fired or never-armed watcher is a no-op.

use serde::{Deserialize, Serialize};

use crate::render::RenderedAttributes;
use crate::types::{ElementKind, NodeId, TimerId, WatcherId};

/// Host environment contract for slide panels.
///
/// All methods are synchronous; the only asynchrony in the system is the
/// delivery of `HostEvent`s, which the host schedules and the caller
/// routes back into the panel.
pub trait SlideHost {
    /// Create a container node of the given element kind.
    fn create_node(&mut self, kind: &ElementKind) -> NodeId;

    /// Destroy a node. After this call the panel performs no further
    /// mutation of the node.
    fn destroy_node(&mut self, node: NodeId);

    /// Attach the given children to a node, replacing any previous set.
    fn set_children(&mut self, node: NodeId, children: &[NodeId]);

    /// Apply the full rendered attribute set (classes, height style,
    /// passthrough attributes) to a node in one call.
    fn apply_attributes(&mut self, node: NodeId, attrs: &RenderedAttributes);

    /// Measure the node's natural content height with any height
    /// constraint ignored.
    ///
    /// Read-only: must not disturb the persisted style or produce a
    /// visible flash. Returns `None` when the node is detached.
    fn measure_natural_height(&self, node: NodeId) -> Option<f64>;

    /// The height the node visually renders at this instant, including
    /// mid-flight values while a transition plays.
    fn rendered_height(&self, node: NodeId) -> f64;

    /// Schedule a one-shot tick, delivered on the host's next turn.
    fn schedule_tick(&mut self) -> TimerId;

    /// Cancel a scheduled tick. Idempotent.
    fn cancel_tick(&mut self, timer: TimerId);

    /// Arm a one-shot watcher for the height transition-finished signal
    /// on the given node. The host snapshots the currently rendered
    /// height as the transition's visual starting point.
    fn arm_completion_watcher(&mut self, node: NodeId) -> WatcherId;

    /// Disarm a completion watcher. Unconditional and idempotent.
    fn disarm_completion_watcher(&mut self, watcher: WatcherId);
}

/// Asynchronous notification delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// A scheduled tick fired.
    Tick { timer: TimerId },
    /// The height transition watched by this subscription finished.
    TransitionFinished { watcher: WatcherId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_event_serialization() {
        let event = HostEvent::TransitionFinished {
            watcher: WatcherId(7),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("transition_finished"));

        let parsed: HostEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }
}
