//! Slide lifecycle events.
//!
//! Events are collected in a queue during lifecycle calls and host-event
//! handling, and polled by the caller afterwards to respond to transition
//! state changes.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::types::{AppliedHeight, NodeId, SlideDirection};

/// Event emitted when a panel's transition state changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlideEvent {
    /// A transition started from a resting state.
    Started {
        /// The panel's container node.
        node: NodeId,
        /// Pixel height the transition starts from.
        from_px: f64,
        /// Pixel height the transition drives toward.
        to_px: f64,
        /// Direction of travel.
        direction: SlideDirection,
    },
    /// An in-flight transition was superseded by a new target.
    Interrupted {
        /// The panel's container node.
        node: NodeId,
        /// The mid-flight height the new transition starts from.
        mid_px: f64,
        /// Pixel height the new transition drives toward.
        to_px: f64,
        /// Direction of the new travel.
        direction: SlideDirection,
    },
    /// The panel settled at a resting height.
    Settled {
        /// The panel's container node.
        node: NodeId,
        /// The resting height (zero, or unconstrained once open).
        resting: AppliedHeight,
    },
}

impl SlideEvent {
    /// Get the node for this event.
    pub fn node(&self) -> NodeId {
        match self {
            Self::Started { node, .. }
            | Self::Interrupted { node, .. }
            | Self::Settled { node, .. } => *node,
        }
    }

    /// Check if this is a "settled" event.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled { .. })
    }

    /// Check if this is an "interrupted" event.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted { .. })
    }
}

/// Queue for collecting slide events during lifecycle calls.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<SlideEvent>,
}

impl EventQueue {
    /// Create a new empty event queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&mut self, event: SlideEvent) {
        self.events.push_back(event);
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get the number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Pop the next event from the queue.
    pub fn pop(&mut self) -> Option<SlideEvent> {
        self.events.pop_front()
    }

    /// Peek at the next event without removing it.
    pub fn peek(&self) -> Option<&SlideEvent> {
        self.events.front()
    }

    /// Drain all events from the queue, returning an iterator.
    pub fn drain(&mut self) -> impl Iterator<Item = SlideEvent> + '_ {
        self.events.drain(..)
    }

    /// Clear all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let node = NodeId(3);
        let event = SlideEvent::Interrupted {
            node,
            mid_px: 8.0,
            to_px: 0.0,
            direction: SlideDirection::Closing,
        };

        assert_eq!(event.node(), node);
        assert!(event.is_interrupted());
        assert!(!event.is_settled());
    }

    #[test]
    fn test_event_queue_operations() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());

        queue.push(SlideEvent::Started {
            node: NodeId(1),
            from_px: 0.0,
            to_px: 18.0,
            direction: SlideDirection::Opening,
        });
        queue.push(SlideEvent::Settled {
            node: NodeId(1),
            resting: AppliedHeight::Auto,
        });

        assert_eq!(queue.len(), 2);
        assert!(matches!(queue.peek(), Some(SlideEvent::Started { .. })));

        let first = queue.pop().unwrap();
        assert!(matches!(first, SlideEvent::Started { .. }));

        let second = queue.pop().unwrap();
        assert!(second.is_settled());

        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_event_queue_drain() {
        let mut queue = EventQueue::new();
        queue.push(SlideEvent::Settled {
            node: NodeId(1),
            resting: AppliedHeight::from(0.0),
        });
        queue.push(SlideEvent::Settled {
            node: NodeId(2),
            resting: AppliedHeight::Auto,
        });

        let events: Vec<_> = queue.drain().collect();
        assert_eq!(events.len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let event = SlideEvent::Started {
            node: NodeId(42),
            from_px: 0.0,
            to_px: 18.0,
            direction: SlideDirection::Opening,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("started"));
        assert!(json.contains("opening"));

        let parsed: SlideEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }
}
