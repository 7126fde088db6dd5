//! Animated height transitions for a collapsible container panel.
//!
//! A panel's rendered height slides between zero and the natural height
//! of its content, driven by the host environment's native height
//! transitions. The crate is split along the seams of that work:
//!
//! - [`types`]: identifiers, applied heights, phases
//! - [`host`]: the `SlideHost` trait the panel drives, and the events a
//!   host delivers back
//! - [`panel`]: the panel entity and its invariants
//! - [`height`]: resolving the pixel height a panel should drive toward
//! - [`render`]: marker classes and the attribute set pushed to the host
//! - [`adapter`]: binding a panel to a component-style lifecycle
//! - [`sim`]: a deterministic host with a manual clock
//!
//! The transition cycle for one target change:
//!
//! ```text
//! Idle/Settled --retarget--> Pinned --tick--> Transitioning --finished--> Settled
//!                              ^                   |
//!                              +----- retarget ----+   (interruption)
//! ```
//!
//! Retargeting mid-flight is always continuous: the new travel starts at
//! the exact height rendered at the moment of interruption, never at an
//! endpoint the previous transition had not reached.

pub mod adapter;
mod controller;
pub mod events;
pub mod height;
pub mod host;
pub mod panel;
pub mod render;
pub mod sim;
pub mod types;

pub use adapter::{NodeRef, SlideDown, SlideProps};
pub use events::{EventQueue, SlideEvent};
pub use host::{HostEvent, SlideHost};
pub use panel::Panel;
pub use render::{
    attributes_for, RenderedAttributes, BASE_CLASS, CLOSED_CLASS, TRANSITIONING_CLASS,
};
pub use sim::SimHost;
pub use types::{
    AppliedHeight, ElementKind, NodeId, SlideDirection, SlidePhase, TimerId, WatcherId,
};
