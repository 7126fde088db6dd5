//! A deterministic, headless host with a manual clock.
//!
//! `SimHost` implements the same `SlideHost` trait a production host
//! does, replacing real layout and native transitions with linear
//! interpolation over a configured duration. Tests and headless callers
//! drive it with `advance`, routing the returned events back into the
//! panel.
//!
//! While a completion watcher is armed, the rendered height travels
//! linearly from the height snapshotted at arm time toward the currently
//! styled pixel height; once the due completion is delivered (or the
//! watcher is disarmed) the rendered height is simply the styled value.

use std::collections::HashMap;

use slidedown_config::SlideConfig;

use crate::host::{HostEvent, SlideHost};
use crate::render::RenderedAttributes;
use crate::types::{AppliedHeight, ElementKind, NodeId, TimerId, WatcherId};

#[derive(Debug)]
struct SimNode {
    attrs: RenderedAttributes,
    children: Vec<NodeId>,
    natural_height: f64,
}

#[derive(Debug, Clone, Copy)]
struct SimTransition {
    watcher: WatcherId,
    from_px: f64,
    armed_at_ms: f64,
    due_at_ms: f64,
}

/// Simulated host environment with a manual millisecond clock.
#[derive(Debug)]
pub struct SimHost {
    duration_ms: f64,
    default_natural_height: f64,
    clock_ms: f64,
    nodes: HashMap<NodeId, SimNode>,
    pending_ticks: Vec<(TimerId, f64)>,
    active: HashMap<NodeId, SimTransition>,
}

impl SimHost {
    /// Create a host whose native height transitions take `duration_ms`.
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            default_natural_height: 0.0,
            clock_ms: 0.0,
            nodes: HashMap::new(),
            pending_ticks: Vec::new(),
            active: HashMap::new(),
        }
    }

    /// Create a host agreeing with the configured transition duration.
    pub fn with_config(config: &SlideConfig) -> Self {
        Self::new(config.transition.duration_ms)
    }

    /// Natural content height assigned to nodes created from now on.
    pub fn set_default_natural_height(&mut self, px: f64) {
        self.default_natural_height = px;
    }

    /// Override the natural content height of an existing node.
    pub fn set_natural_height(&mut self, node: NodeId, px: f64) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.natural_height = px;
        }
    }

    /// Current clock value in milliseconds.
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Whether a node is still attached.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// The last attributes applied to a node.
    pub fn attributes_of(&self, node: NodeId) -> Option<&RenderedAttributes> {
        self.nodes.get(&node).map(|n| &n.attrs)
    }

    /// The children currently attached to a node.
    pub fn children_of(&self, node: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(&node).map(|n| n.children.as_slice())
    }

    /// Advance the clock by `ms` and return the events that came due,
    /// in due order (ticks before completions at equal times).
    ///
    /// Callers that arm new work while processing returned events should
    /// advance in small steps so the new work lands at the right time.
    pub fn advance(&mut self, ms: f64) -> Vec<HostEvent> {
        self.clock_ms += ms;
        let clock = self.clock_ms;

        let mut due: Vec<(f64, u8, HostEvent)> = Vec::new();

        self.pending_ticks.retain(|(timer, at)| {
            if *at <= clock {
                due.push((*at, 0, HostEvent::Tick { timer: *timer }));
                false
            } else {
                true
            }
        });

        let finished: Vec<NodeId> = self
            .active
            .iter()
            .filter(|(_, tr)| tr.due_at_ms <= clock)
            .map(|(node, _)| *node)
            .collect();
        for node in finished {
            if let Some(tr) = self.active.remove(&node) {
                due.push((
                    tr.due_at_ms,
                    1,
                    HostEvent::TransitionFinished {
                        watcher: tr.watcher,
                    },
                ));
            }
        }

        due.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });
        due.into_iter().map(|(_, _, event)| event).collect()
    }

    fn natural_of(&self, node: &SimNode) -> f64 {
        if node.children.is_empty() {
            0.0
        } else {
            node.natural_height
        }
    }

    fn styled_px(&self, node: &SimNode) -> f64 {
        match node.attrs.height {
            AppliedHeight::Px { px } => px,
            AppliedHeight::Auto => self.natural_of(node),
        }
    }
}

impl SlideHost for SimHost {
    fn create_node(&mut self, kind: &ElementKind) -> NodeId {
        let id = NodeId::new();
        self.nodes.insert(
            id,
            SimNode {
                attrs: RenderedAttributes {
                    kind: kind.clone(),
                    classes: Vec::new(),
                    height: AppliedHeight::from(0.0),
                    attributes: Default::default(),
                },
                children: Vec::new(),
                natural_height: self.default_natural_height,
            },
        );
        id
    }

    fn destroy_node(&mut self, node: NodeId) {
        self.nodes.remove(&node);
        self.active.remove(&node);
    }

    fn set_children(&mut self, node: NodeId, children: &[NodeId]) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.children = children.to_vec();
        }
    }

    fn apply_attributes(&mut self, node: NodeId, attrs: &RenderedAttributes) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.attrs = attrs.clone();
        }
    }

    fn measure_natural_height(&self, node: NodeId) -> Option<f64> {
        self.nodes.get(&node).map(|n| self.natural_of(n))
    }

    fn rendered_height(&self, node: NodeId) -> f64 {
        let Some(n) = self.nodes.get(&node) else {
            return 0.0;
        };
        let styled = self.styled_px(n);
        if let Some(tr) = self.active.get(&node) {
            let progress = if self.duration_ms > 0.0 {
                ((self.clock_ms - tr.armed_at_ms) / self.duration_ms).clamp(0.0, 1.0)
            } else {
                1.0
            };
            return tr.from_px + (styled - tr.from_px) * progress;
        }
        styled
    }

    fn schedule_tick(&mut self) -> TimerId {
        let timer = TimerId::new();
        self.pending_ticks.push((timer, self.clock_ms));
        timer
    }

    fn cancel_tick(&mut self, timer: TimerId) {
        self.pending_ticks.retain(|(t, _)| *t != timer);
    }

    fn arm_completion_watcher(&mut self, node: NodeId) -> WatcherId {
        let watcher = WatcherId::new();
        let from_px = self.rendered_height(node);
        self.active.insert(
            node,
            SimTransition {
                watcher,
                from_px,
                armed_at_ms: self.clock_ms,
                due_at_ms: self.clock_ms + self.duration_ms,
            },
        );
        watcher
    }

    fn disarm_completion_watcher(&mut self, watcher: WatcherId) {
        self.active.retain(|_, tr| tr.watcher != watcher);
    }
}

static_assertions::assert_impl_all!(SimHost: Send);
