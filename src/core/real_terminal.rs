//! core::real_terminal
//!
//! A single electrical contact of a terminal strip.
//!
//! A real terminal is either backed by a terminal element drawn on a
//! diagram, or virtual (reserved by the user but drawn nowhere).
//!
//! # Invariants
//!
//! - The identity never changes for the life of the terminal
//! - `physical_terminal` and `level` always agree with the owning
//!   [`PhysicalTerminal`](super::physical_terminal::PhysicalTerminal)
//! - `bridge` is set iff the bridge lists this terminal as a member
//!
//! Values are only created and mutated by
//! [`TerminalStrip`](super::strip::TerminalStrip); callers get shared
//! references.

use super::element::TerminalData;
use super::types::{
    BridgeId, ElementId, PhysicalTerminalId, RealTerminalId, StripId, TerminalFunction,
    TerminalType,
};

/// One electrical contact, drawn or virtual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealTerminal {
    id: RealTerminalId,
    strip: StripId,
    element: Option<ElementId>,
    physical: PhysicalTerminalId,
    level: usize,
    bridge: Option<BridgeId>,
    data: TerminalData,
}

impl RealTerminal {
    pub(crate) fn new(
        id: RealTerminalId,
        strip: StripId,
        element: Option<ElementId>,
        physical: PhysicalTerminalId,
        data: TerminalData,
    ) -> Self {
        Self {
            id,
            strip,
            element,
            physical,
            level: 0,
            bridge: None,
            data,
        }
    }

    pub fn id(&self) -> RealTerminalId {
        self.id
    }

    /// The strip this terminal belongs to.
    pub fn parent_strip(&self) -> StripId {
        self.strip
    }

    /// The backing diagram element, `None` for a virtual terminal.
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    /// The physical terminal currently holding this terminal.
    pub fn physical_terminal(&self) -> PhysicalTerminalId {
        self.physical
    }

    /// Stacking position inside the physical terminal, starting at 0.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn bridge(&self) -> Option<BridgeId> {
        self.bridge
    }

    pub fn is_bridged(&self) -> bool {
        self.bridge.is_some()
    }

    /// Whether this terminal is drawn on a diagram.
    pub fn is_element(&self) -> bool {
        self.element.is_some()
    }

    pub fn data(&self) -> &TerminalData {
        &self.data
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }

    pub fn xref(&self) -> &str {
        &self.data.xref
    }

    pub fn cable(&self) -> &str {
        &self.data.cable
    }

    pub fn cable_wire(&self) -> &str {
        &self.data.cable_wire
    }

    pub fn conductor(&self) -> &str {
        &self.data.conductor
    }

    pub fn terminal_type(&self) -> TerminalType {
        self.data.terminal_type
    }

    pub fn terminal_function(&self) -> TerminalFunction {
        self.data.terminal_function
    }

    pub fn is_led(&self) -> bool {
        self.data.led
    }

    pub(crate) fn place(&mut self, physical: PhysicalTerminalId, level: usize) {
        self.physical = physical;
        self.level = level;
    }

    pub(crate) fn set_bridge(&mut self, bridge: Option<BridgeId>) {
        self.bridge = bridge;
    }

    pub(crate) fn set_data(&mut self, data: TerminalData) {
        self.data = data;
    }
}
