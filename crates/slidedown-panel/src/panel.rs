//! The Panel entity: one managed container node and its transition state.

use std::collections::BTreeMap;

use crate::types::{AppliedHeight, ElementKind, NodeId, SlidePhase, TimerId, WatcherId};

/// One managed slide container and its associated transition state.
///
/// Invariants:
/// - `applied` is a concrete pixel value whenever a transition can occur;
///   `Auto` only while settled open.
/// - `target_px` is recomputed synchronously on every logical change and
///   is never stale with respect to `logical_open` / `has_content`.
/// - At most one transition is in flight; `pending_timer` and
///   `armed_watcher` each hold at most one outstanding handle and are
///   cleared before teardown.
#[derive(Debug, Clone)]
pub struct Panel {
    /// The container node, exclusively owned by this panel.
    pub node: NodeId,
    /// Logical open state; false collapses to zero height.
    pub logical_open: bool,
    /// Whether child content is present.
    pub has_content: bool,
    /// Element kind rendered for the container.
    pub kind: ElementKind,
    /// Caller's class name, appended verbatim after the marker classes.
    pub class_name: Option<String>,
    /// Caller-supplied attributes, passed through verbatim.
    pub attributes: BTreeMap<String, String>,
    /// The height currently applied to the node's style.
    pub applied: AppliedHeight,
    /// Last concrete pixel height observed; used to pin `Auto` before a
    /// transition can start.
    pub last_measured_px: f64,
    /// The height the current or next transition drives toward.
    pub target_px: f64,
    /// Current state of the transition cycle.
    pub phase: SlidePhase,
    /// Outstanding tick handle, if any.
    pub pending_timer: Option<TimerId>,
    /// Armed completion watcher, if any.
    pub armed_watcher: Option<WatcherId>,
}

impl Panel {
    /// Create a panel for a freshly created node, pinned at zero height.
    pub fn new(node: NodeId, kind: ElementKind) -> Self {
        Self {
            node,
            logical_open: true,
            has_content: false,
            kind,
            class_name: None,
            attributes: BTreeMap::new(),
            applied: AppliedHeight::from(0.0),
            last_measured_px: 0.0,
            target_px: 0.0,
            phase: SlidePhase::Idle,
            pending_timer: None,
            armed_watcher: None,
        }
    }

    /// Whether a transition is in flight (pinned or actively animating).
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, SlidePhase::Pinned | SlidePhase::Transitioning)
    }

    /// Whether the panel is already resting at the given target height,
    /// so that no transition is needed.
    ///
    /// A settled-open panel with an unconstrained height is at rest for
    /// any positive target: content reflows do not require a transition.
    pub fn at_rest_for(&self, target_px: f64) -> bool {
        if self.phase != SlidePhase::Settled {
            return false;
        }
        match self.applied {
            AppliedHeight::Auto => target_px > 0.0,
            AppliedHeight::Px { px } => (px - target_px).abs() < f64::EPSILON,
        }
    }
}
