//! The lifecycle adapter: ties a panel's life to a host component's
//! mount / update / unmount cycle.
//!
//! `SlideDown` owns one `Panel` and translates declarative prop changes
//! into transition work:
//! - `mount` creates the container node, attaches children, publishes the
//!   node ref, and either settles or starts an appear transition.
//! - `update` re-resolves the target height and retargets only when the
//!   panel is not already resting there.
//! - `unmount` cancels all pending work before the node goes away.
//!
//! Host events (`Tick`, `TransitionFinished`) are routed back in through
//! `handle_host_event`; lifecycle events accumulate in an internal queue
//! and are polled with `drain_events`.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use slidedown_config::SlideConfig;

use crate::controller;
use crate::events::{EventQueue, SlideEvent};
use crate::height;
use crate::host::{HostEvent, SlideHost};
use crate::panel::Panel;
use crate::types::{ElementKind, NodeId, SlidePhase};

/// A forwarded handle to the panel's container node.
///
/// Published with `Some(node)` at mount and `None` at unmount, matching
/// the lifetime of the underlying node.
#[derive(Clone)]
pub enum NodeRef {
    /// Writes the node into a shared cell.
    Cell(Rc<Cell<Option<NodeId>>>),
    /// Invokes a callback with the node.
    Callback(Rc<dyn Fn(Option<NodeId>)>),
}

impl NodeRef {
    /// Create a cell-backed ref along with the cell to read it from.
    pub fn cell() -> (Self, Rc<Cell<Option<NodeId>>>) {
        let cell = Rc::new(Cell::new(None));
        (Self::Cell(Rc::clone(&cell)), cell)
    }

    /// Create a callback-backed ref.
    pub fn callback(f: impl Fn(Option<NodeId>) + 'static) -> Self {
        Self::Callback(Rc::new(f))
    }

    fn publish(&self, node: Option<NodeId>) {
        match self {
            Self::Cell(cell) => cell.set(node),
            Self::Callback(f) => f(node),
        }
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell(cell) => f.debug_tuple("NodeRef::Cell").field(&cell.get()).finish(),
            Self::Callback(_) => f.write_str("NodeRef::Callback"),
        }
    }
}

/// Declarative inputs for a slide panel.
#[derive(Debug, Clone)]
pub struct SlideProps {
    /// Collapse to zero height when true.
    pub closed: bool,
    /// Animate from zero at mount instead of appearing at full height.
    pub transition_on_appear: bool,
    /// Element kind for the container node.
    pub kind: ElementKind,
    /// Class appended after the marker classes.
    pub class_name: Option<String>,
    /// Extra attributes passed through to the container.
    pub attributes: BTreeMap<String, String>,
    /// Forwarded handle to the container node.
    pub node_ref: Option<NodeRef>,
    /// Child nodes slid open and closed.
    pub children: Vec<NodeId>,
}

impl Default for SlideProps {
    fn default() -> Self {
        Self {
            closed: false,
            transition_on_appear: true,
            kind: ElementKind::default(),
            class_name: None,
            attributes: BTreeMap::new(),
            node_ref: None,
            children: Vec::new(),
        }
    }
}

impl SlideProps {
    /// Props with defaults drawn from configuration.
    pub fn from_config(config: &SlideConfig) -> Self {
        Self {
            transition_on_appear: config.appear.transition_on_appear,
            ..Self::default()
        }
    }

    /// Set the closed state.
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Set whether mounting animates from zero.
    pub fn transition_on_appear(mut self, on: bool) -> Self {
        self.transition_on_appear = on;
        self
    }

    /// Set the container element kind.
    pub fn as_element(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the caller's class name.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Add a pass-through attribute.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Forward the container node through a ref.
    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Set the child content.
    pub fn children(mut self, children: Vec<NodeId>) -> Self {
        self.children = children;
        self
    }
}

/// A mounted slide panel bound to a host component lifecycle.
///
/// When children are removed while the panel is open, the previous
/// children stay attached until the close-out transition settles, so the
/// content remains visible while it slides away.
#[derive(Debug)]
pub struct SlideDown {
    panel: Panel,
    node_ref: Option<NodeRef>,
    children: Vec<NodeId>,
    events: EventQueue,
}

impl SlideDown {
    /// Mount a new panel.
    ///
    /// Creates the container node, attaches children, and publishes the
    /// node ref. An open mount with appear transitions enabled starts a
    /// transition from zero; everything else settles directly at its
    /// resolved height.
    pub fn mount<H: SlideHost>(host: &mut H, props: SlideProps) -> Self {
        let SlideProps {
            closed,
            transition_on_appear,
            kind,
            class_name,
            attributes,
            node_ref,
            children,
        } = props;

        let node = host.create_node(&kind);
        host.set_children(node, &children);

        let mut panel = Panel::new(node, kind);
        panel.logical_open = !closed;
        panel.has_content = !children.is_empty();
        panel.class_name = class_name;
        panel.attributes = attributes;

        if let Some(node_ref) = &node_ref {
            node_ref.publish(Some(node));
        }

        let mut events = EventQueue::new();
        let target = height::resolve_target(host, node, panel.has_content, panel.logical_open);
        if transition_on_appear {
            controller::retarget(&mut panel, host, target, &mut events);
        } else {
            controller::settle(&mut panel, host, target, &mut events);
        }
        log::debug!(
            "mounted panel {:?} (closed: {}, appear: {})",
            node,
            closed,
            transition_on_appear,
        );

        Self {
            panel,
            node_ref,
            children,
            events,
        }
    }

    /// Apply a new set of props to the mounted panel.
    ///
    /// The target height is re-resolved from the new logical state. A
    /// panel already resting at that target only has its attributes
    /// refreshed; a panel mid-flight toward it is left alone. Any other
    /// target supersedes whatever is in flight.
    ///
    /// An update that removes all children keeps the previous children
    /// attached until the panel has settled closed.
    pub fn update<H: SlideHost>(&mut self, host: &mut H, props: SlideProps) {
        let SlideProps {
            closed,
            transition_on_appear: _,
            kind,
            class_name,
            attributes,
            node_ref,
            children,
        } = props;

        if !children.is_empty() {
            host.set_children(self.panel.node, &children);
            self.children = children;
            self.panel.has_content = true;
        } else {
            // Previous children stay attached while the panel closes.
            self.panel.has_content = false;
        }

        self.panel.logical_open = !closed;
        self.panel.kind = kind;
        self.panel.class_name = class_name;
        self.panel.attributes = attributes;

        if let Some(node_ref) = node_ref {
            node_ref.publish(Some(self.panel.node));
            self.node_ref = Some(node_ref);
        }

        let target = height::resolve_target(
            host,
            self.panel.node,
            self.panel.has_content,
            self.panel.logical_open,
        );

        if self.panel.at_rest_for(target) {
            controller::sync_attributes(&self.panel, host);
            self.release_children(host);
            return;
        }
        if self.panel.is_transitioning()
            && (self.panel.target_px - target).abs() < f64::EPSILON
        {
            controller::sync_attributes(&self.panel, host);
            return;
        }

        controller::retarget(&mut self.panel, host, target, &mut self.events);
        self.release_children(host);
    }

    /// Route a host event to the panel.
    ///
    /// Events carrying handles the panel no longer holds are ignored.
    pub fn handle_host_event<H: SlideHost>(&mut self, host: &mut H, event: HostEvent) {
        match event {
            HostEvent::Tick { timer } => controller::handle_tick(&mut self.panel, host, timer),
            HostEvent::TransitionFinished { watcher } => {
                controller::handle_transition_finished(
                    &mut self.panel,
                    host,
                    watcher,
                    &mut self.events,
                );
                self.release_children(host);
            }
        }
    }

    /// Detach retained children once the panel has settled without content.
    fn release_children<H: SlideHost>(&mut self, host: &mut H) {
        if self.panel.phase == SlidePhase::Settled
            && !self.panel.has_content
            && !self.children.is_empty()
        {
            host.set_children(self.panel.node, &[]);
            self.children.clear();
        }
    }

    /// Unmount the panel: cancel pending work, clear the forwarded ref,
    /// and destroy the container node.
    pub fn unmount<H: SlideHost>(mut self, host: &mut H) {
        controller::teardown(&mut self.panel, host);
        if let Some(node_ref) = &self.node_ref {
            node_ref.publish(None);
        }
        host.destroy_node(self.panel.node);
        log::debug!("unmounted panel {:?}", self.panel.node);
    }

    /// The container node.
    pub fn node(&self) -> NodeId {
        self.panel.node
    }

    /// Current phase of the transition cycle.
    pub fn phase(&self) -> SlidePhase {
        self.panel.phase
    }

    /// Whether a transition is pinned or in flight.
    pub fn is_transitioning(&self) -> bool {
        self.panel.is_transitioning()
    }

    /// The height currently rendered by the host.
    pub fn rendered<H: SlideHost>(&self, host: &H) -> f64 {
        host.rendered_height(self.panel.node)
    }

    /// Drain the lifecycle events accumulated since the last poll.
    pub fn drain_events(&mut self) -> Vec<SlideEvent> {
        self.events.drain().collect()
    }
}
