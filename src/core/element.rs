//! core::element
//!
//! The diagram side of a real terminal.
//!
//! # Overview
//!
//! Terminal symbols are drawn and owned by the diagram layer, which is not
//! part of this crate. The strip only needs:
//!
//! - a stable identity for the element ([`ElementId`])
//! - its electrical attributes ([`TerminalData`])
//! - a way to ask whether the element still exists ([`ElementRegistry`])
//!
//! The strip keeps an [`ElementId`] per element-backed terminal and never a
//! pointer to the element itself.

use serde::{Deserialize, Serialize};

use super::types::{ElementId, TerminalFunction, TerminalType};

/// Electrical attributes of a real terminal.
///
/// For element-backed terminals this is a snapshot of what the element
/// reported when it was added (or last refreshed). For virtual terminals it
/// is whatever the user reserved the terminal with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalData {
    pub label: String,
    /// Cross reference to where the terminal is drawn
    pub xref: String,
    pub cable: String,
    pub cable_wire: String,
    pub conductor: String,
    pub terminal_type: TerminalType,
    pub terminal_function: TerminalFunction,
    pub led: bool,
}

impl TerminalData {
    /// Data with only a label set.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// A terminal element drawn on a diagram.
pub trait DiagramElement {
    /// Stable identity of the element.
    fn element_id(&self) -> ElementId;

    /// Current electrical attributes of the element.
    fn terminal_data(&self) -> TerminalData;
}

/// Liveness query answered by the diagram layer.
pub trait ElementRegistry {
    /// Whether the element still exists on some diagram.
    fn is_alive(&self, element: ElementId) -> bool;
}

impl<F> ElementRegistry for F
where
    F: Fn(ElementId) -> bool,
{
    fn is_alive(&self, element: ElementId) -> bool {
        self(element)
    }
}

/// A plain element value, handy for callers that already hold the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub data: TerminalData,
}

impl ElementSnapshot {
    /// Snapshot with a fresh identity.
    pub fn new(data: TerminalData) -> Self {
        Self {
            id: ElementId::new(),
            data,
        }
    }
}

impl DiagramElement for ElementSnapshot {
    fn element_id(&self) -> ElementId {
        self.id
    }

    fn terminal_data(&self) -> TerminalData {
        self.data.clone()
    }
}
