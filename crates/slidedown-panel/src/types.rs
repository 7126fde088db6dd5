//! Core panel types and identifiers.
//!
//! This module defines the fundamental types for the slide panel:
//! - `NodeId`: Handle to a host-owned container node
//! - `WatcherId` / `TimerId`: One-shot subscription and tick handles
//! - `AppliedHeight`: The height value carried by the rendered style
//! - `SlidePhase`: Current state of a panel's transition cycle
//! - `ElementKind`: The rendered element tag

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle to a container node owned by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Generate a new unique node ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a one-shot completion-watcher subscription.
///
/// A watcher is keyed to a specific in-flight transition; disarming the
/// handle before arming a new one is what guarantees a stale completion
/// can never mutate state after a retarget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatcherId(pub u64);

impl WatcherId {
    /// Generate a new unique watcher ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for WatcherId {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a one-shot scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl TimerId {
    /// Generate a new unique timer ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TimerId {
    fn default() -> Self {
        Self::new()
    }
}

/// The height value applied to the rendered style.
///
/// Native transitions can only run between two concrete pixel values, so
/// the applied height is a number whenever a transition can occur. `Auto`
/// is used only once a panel has settled open, so the surrounding layout
/// can resize freely with content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppliedHeight {
    /// Concrete pixel height.
    Px { px: f64 },
    /// Unconstrained height; the node sizes to its content.
    Auto,
}

impl AppliedHeight {
    /// Try to extract a concrete pixel value.
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Self::Px { px } => Some(*px),
            Self::Auto => None,
        }
    }

    /// Check whether the height is unconstrained.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Render the style value for this height.
    ///
    /// `Auto` renders as an empty string: a settled-open panel carries no
    /// height constraint at all.
    pub fn to_style(&self) -> String {
        match self {
            Self::Px { px } => format!("{}px", px),
            Self::Auto => String::new(),
        }
    }
}

impl From<f64> for AppliedHeight {
    fn from(px: f64) -> Self {
        Self::Px { px }
    }
}

/// Direction a transition travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    /// Height is increasing toward the natural content height.
    Opening,
    /// Height is decreasing toward zero.
    Closing,
}

impl SlideDirection {
    /// Derive the direction from a start and target height.
    pub fn of(from_px: f64, to_px: f64) -> Self {
        if to_px >= from_px {
            Self::Opening
        } else {
            Self::Closing
        }
    }
}

/// Current state of a panel's transition cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlidePhase {
    /// No target has been resolved yet.
    Idle,
    /// The start height is pinned; the transition begins on the next tick.
    Pinned,
    /// A host transition toward the target height is in flight.
    Transitioning,
    /// No transition in flight; height is at a stable resting value.
    Settled,
}

impl Default for SlidePhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// The element kind (tag name) rendered for a panel's container node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementKind(String);

impl ElementKind {
    /// Create an element kind from a tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl Default for ElementKind {
    fn default() -> Self {
        Self("div".to_string())
    }
}
