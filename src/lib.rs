//! Facade crate re-exporting the slide panel and its configuration.

pub use slidedown_config::{AppearConfig, SlideConfig, TransitionConfig};
pub use slidedown_panel::{
    attributes_for, AppliedHeight, ElementKind, EventQueue, HostEvent, NodeId, NodeRef, Panel,
    RenderedAttributes, SimHost, SlideDirection, SlideDown, SlideEvent, SlideHost, SlidePhase,
    SlideProps, TimerId, WatcherId, BASE_CLASS, CLOSED_CLASS, TRANSITIONING_CLASS,
};
