//! Pure mapping from panel state to rendered attributes.
//!
//! The panel never writes to the node ad hoc; every state change
//! re-derives the full attribute set through `attributes_for` and pushes
//! it to the host in a single call. This is what keeps the rendered
//! output in lockstep with the logical state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::panel::Panel;
use crate::types::{AppliedHeight, ElementKind};

/// Fixed base class carried by every panel container.
pub const BASE_CLASS: &str = "react-slidedown";

/// Marker class present while the panel is logically closed.
pub const CLOSED_CLASS: &str = "closed";

/// Marker class present while a transition is in flight.
pub const TRANSITIONING_CLASS: &str = "transitioning";

/// The complete attribute set rendered for a panel's container node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedAttributes {
    /// Element kind (tag name) of the container.
    pub kind: ElementKind,
    /// Class list, in rendering order.
    pub classes: Vec<String>,
    /// The only style property the panel manages.
    pub height: AppliedHeight,
    /// Caller-supplied attributes, passed through verbatim.
    pub attributes: BTreeMap<String, String>,
}

impl RenderedAttributes {
    /// The class attribute value, classes joined by single spaces.
    pub fn class_attribute(&self) -> String {
        self.classes.join(" ")
    }

    /// Check whether a class is present.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// The style attribute value. Empty once settled open, since an
    /// unconstrained panel carries no height at all.
    pub fn style_attribute(&self) -> String {
        match self.height {
            AppliedHeight::Px { .. } => format!("height: {}", self.height.to_style()),
            AppliedHeight::Auto => String::new(),
        }
    }
}

/// Derive the rendered attributes for the panel's current state.
///
/// Class order: base class, `closed`, `transitioning`, then the caller's
/// class name verbatim.
pub fn attributes_for(panel: &Panel) -> RenderedAttributes {
    let mut classes = vec![BASE_CLASS.to_string()];
    if !panel.logical_open {
        classes.push(CLOSED_CLASS.to_string());
    }
    if panel.is_transitioning() {
        classes.push(TRANSITIONING_CLASS.to_string());
    }
    if let Some(name) = &panel.class_name {
        classes.push(name.clone());
    }

    RenderedAttributes {
        kind: panel.kind.clone(),
        classes,
        height: panel.applied,
        attributes: panel.attributes.clone(),
    }
}
