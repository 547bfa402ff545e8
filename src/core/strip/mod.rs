//! core::strip
//!
//! The terminal strip aggregate.
//!
//! # Architecture
//!
//! A [`TerminalStrip`] owns every [`RealTerminal`], [`PhysicalTerminal`]
//! and [`TerminalStripBridge`] by value, keyed by their identifiers. All
//! cross references between them are identifiers resolved through the
//! strip's tables:
//!
//! - `physical_order` - the left-to-right order of physical terminals
//! - `physicals` - physical terminals by id
//! - `terminals` - the flat table of real terminals by id
//! - `elements` - element id to real terminal, for element-backed terminals
//! - `bridges` - bridges in creation order
//!
//! The strip is the only constructor of terminals and bridges, and the only
//! place that mutates them.
//!
//! # Invariants
//!
//! - Flattening `physical_order` yields exactly the keys of `terminals`
//! - No physical terminal is empty
//! - Each real terminal's level and physical terminal match its stack
//! - Every bridge has at least two members, each pointing back at it
//!
//! Every public mutation either applies completely and notifies observers,
//! or returns an error with the strip unchanged. [`fast_verify`] checks the
//! invariants from the outside.
//!
//! [`fast_verify`]: crate::core::verify::fast_verify
//!
//! # Submodules
//!
//! - `ordering` - positions, reordering and navigation
//! - `grouping` - multi-level grouping and levels
//! - `bridging` - bridges

mod bridging;
mod grouping;
mod ordering;

use std::collections::HashMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bridge::{BridgePalette, TerminalStripBridge};
use super::element::{DiagramElement, ElementRegistry, TerminalData};
use super::events::{Observers, StripEvent, SubscriptionId};
use super::physical_terminal::PhysicalTerminal;
use super::real_terminal::RealTerminal;
use super::types::{BridgeId, Color, ElementId, PhysicalTerminalId, RealTerminalId, StripId};

/// Errors from strip operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StripError {
    #[error("element {0} already has a terminal in this strip")]
    DuplicateTerminal(ElementId),

    #[error("{0} not found in this strip")]
    NotFound(Missing),

    #[error("order is not a permutation of the strip's physical terminals")]
    InvalidPermutation,

    #[error("cannot group a physical terminal with its own terminals")]
    SelfGrouping,

    #[error("terminal belongs to another strip")]
    CrossStripGrouping,

    #[error("terminals cannot be bridged")]
    NotBridgeable,

    #[error("level {level} out of range, physical terminal has {count} level(s)")]
    InvalidLevel { level: usize, count: usize },

    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("failed to write document: {0}")]
    XmlWrite(String),
}

/// What a [`StripError::NotFound`] was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Element(ElementId),
    RealTerminal(RealTerminalId),
    PhysicalTerminal(PhysicalTerminalId),
    Bridge(BridgeId),
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Element(id) => write!(f, "element {id}"),
            Missing::RealTerminal(id) => write!(f, "real terminal {id}"),
            Missing::PhysicalTerminal(id) => write!(f, "physical terminal {id}"),
            Missing::Bridge(id) => write!(f, "bridge {id}"),
        }
    }
}

/// Where in the real cabinet a strip lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalStripData {
    pub installation: String,
    pub location: String,
    pub name: String,
    pub comment: String,
    pub description: String,
    pub uuid: StripId,
}

/// A terminal strip: ordered physical terminals, their real terminals and
/// the bridges between them.
pub struct TerminalStrip {
    data: TerminalStripData,
    physical_order: Vec<PhysicalTerminalId>,
    physicals: HashMap<PhysicalTerminalId, PhysicalTerminal>,
    terminals: HashMap<RealTerminalId, RealTerminal>,
    elements: HashMap<ElementId, RealTerminalId>,
    bridges: Vec<TerminalStripBridge>,
    palette: BridgePalette,
    observers: Observers,
}

impl TerminalStrip {
    /// Create an empty strip with a fresh id.
    pub fn new(
        installation: impl Into<String>,
        location: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::from_data(TerminalStripData {
            installation: installation.into(),
            location: location.into(),
            name: name.into(),
            ..TerminalStripData::default()
        })
    }

    /// Create an empty strip described by `data`, keeping its uuid.
    pub fn from_data(data: TerminalStripData) -> Self {
        Self {
            data,
            physical_order: Vec::new(),
            physicals: HashMap::new(),
            terminals: HashMap::new(),
            elements: HashMap::new(),
            bridges: Vec::new(),
            palette: BridgePalette::default(),
            observers: Observers::default(),
        }
    }

    /// Use `palette` for bridges created from now on.
    pub fn with_palette(mut self, palette: BridgePalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &BridgePalette {
        &self.palette
    }

    // ----- metadata -----

    pub fn uuid(&self) -> StripId {
        self.data.uuid
    }

    pub fn installation(&self) -> &str {
        &self.data.installation
    }

    pub fn set_installation(&mut self, installation: impl Into<String>) {
        self.data.installation = installation.into();
    }

    pub fn location(&self) -> &str {
        &self.data.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.data.location = location.into();
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.data.name = name.into();
    }

    pub fn comment(&self) -> &str {
        &self.data.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.data.comment = comment.into();
    }

    pub fn description(&self) -> &str {
        &self.data.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.data.description = description.into();
    }

    pub fn data(&self) -> &TerminalStripData {
        &self.data
    }

    /// Replace the descriptive metadata. The strip keeps its own uuid.
    pub fn set_data(&mut self, data: TerminalStripData) {
        let uuid = self.data.uuid;
        self.data = TerminalStripData { uuid, ..data };
    }

    // ----- observers -----

    /// Register a change observer.
    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(StripId, StripEvent) + 'static,
    {
        self.observers.subscribe(f)
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub(crate) fn notify(&mut self, event: StripEvent) {
        let uuid = self.data.uuid;
        self.observers.emit(uuid, event);
    }

    // ----- terminal lifecycle -----

    /// Register the terminal drawn by `element`.
    ///
    /// The new real terminal gets its own single-level physical terminal at
    /// the end of the strip.
    ///
    /// # Errors
    ///
    /// `DuplicateTerminal` if the element already has a terminal here.
    pub fn add_terminal(
        &mut self,
        element: &dyn DiagramElement,
    ) -> Result<RealTerminalId, StripError> {
        let element_id = element.element_id();
        if self.elements.contains_key(&element_id) {
            debug!("strip {}: element {element_id} already registered", self.data.uuid);
            return Err(StripError::DuplicateTerminal(element_id));
        }

        let id = self.insert_terminal(Some(element_id), element.terminal_data());
        debug!("strip {}: added terminal {id} for element {element_id}", self.data.uuid);
        self.notify(StripEvent::OrderChanged);
        Ok(id)
    }

    /// Reserve a terminal that is not drawn on any diagram.
    pub fn add_virtual_terminal(&mut self, data: TerminalData) -> RealTerminalId {
        let id = self.insert_terminal(None, data);
        debug!("strip {}: added virtual terminal {id}", self.data.uuid);
        self.notify(StripEvent::OrderChanged);
        id
    }

    /// Remove the terminal drawn by `element`.
    ///
    /// # Errors
    ///
    /// `NotFound` if the element has no terminal here.
    pub fn remove_terminal(&mut self, element: ElementId) -> Result<(), StripError> {
        let id = *self
            .elements
            .get(&element)
            .ok_or(StripError::NotFound(Missing::Element(element)))?;
        self.remove_real_terminal(id)
    }

    /// Remove a real terminal, drawn or virtual.
    ///
    /// The terminal first leaves its bridge (dissolving the bridge if fewer
    /// than two members remain), then its physical terminal (destroying it
    /// if emptied).
    ///
    /// # Errors
    ///
    /// `NotFound` if the terminal is not in this strip.
    pub fn remove_real_terminal(&mut self, id: RealTerminalId) -> Result<(), StripError> {
        if !self.terminals.contains_key(&id) {
            return Err(StripError::NotFound(Missing::RealTerminal(id)));
        }

        let bridge_changed = self.leave_bridge(id);
        self.detach(id);
        if let Some(terminal) = self.terminals.remove(&id) {
            if let Some(element) = terminal.element() {
                self.elements.remove(&element);
            }
        }

        debug!("strip {}: removed terminal {id}", self.data.uuid);
        if bridge_changed {
            self.notify(StripEvent::BridgeChanged);
        }
        self.notify(StripEvent::OrderChanged);
        Ok(())
    }

    /// Re-read the electrical data of an already registered element.
    ///
    /// This changes no structure, so no observer is notified.
    ///
    /// # Errors
    ///
    /// `NotFound` if the element has no terminal here.
    pub fn refresh_element(&mut self, element: &dyn DiagramElement) -> Result<(), StripError> {
        let element_id = element.element_id();
        let id = *self
            .elements
            .get(&element_id)
            .ok_or(StripError::NotFound(Missing::Element(element_id)))?;
        if let Some(terminal) = self.terminals.get_mut(&id) {
            terminal.set_data(element.terminal_data());
        }
        Ok(())
    }

    /// Remove every terminal whose element `registry` reports destroyed.
    ///
    /// Returns the removed element ids in strip order.
    pub fn prune_dead_elements(&mut self, registry: &dyn ElementRegistry) -> Vec<ElementId> {
        let dead: Vec<ElementId> = self
            .terminal_elements()
            .into_iter()
            .filter(|e| !registry.is_alive(*e))
            .collect();

        for element in &dead {
            if let Err(e) = self.remove_terminal(*element) {
                debug!("strip {}: prune of {element} failed: {e}", self.data.uuid);
            }
        }
        dead
    }

    // ----- lookups -----

    pub fn real_terminal(&self, id: RealTerminalId) -> Option<&RealTerminal> {
        self.terminals.get(&id)
    }

    pub fn real_terminal_for_element(&self, element: ElementId) -> Option<&RealTerminal> {
        self.elements
            .get(&element)
            .and_then(|id| self.terminals.get(id))
    }

    pub fn contains(&self, id: RealTerminalId) -> bool {
        self.terminals.contains_key(&id)
    }

    /// Real terminal ids in strip order: physical terminals left to right,
    /// levels bottom to top within each.
    pub fn real_terminal_ids(&self) -> Vec<RealTerminalId> {
        self.physical_terminals()
            .flat_map(|pt| pt.real_terminals().iter().copied())
            .collect()
    }

    /// Real terminals in strip order.
    pub fn real_terminals(&self) -> Vec<&RealTerminal> {
        self.real_terminal_ids()
            .into_iter()
            .filter_map(|id| self.terminals.get(&id))
            .collect()
    }

    pub fn real_terminal_count(&self) -> usize {
        self.terminals.len()
    }

    /// Elements backing terminals, in strip order.
    pub fn terminal_elements(&self) -> Vec<ElementId> {
        self.real_terminals()
            .into_iter()
            .filter_map(RealTerminal::element)
            .collect()
    }

    pub fn physical_terminal(&self, id: PhysicalTerminalId) -> Option<&PhysicalTerminal> {
        self.physicals.get(&id)
    }

    pub fn physical_terminal_at(&self, index: usize) -> Option<&PhysicalTerminal> {
        self.physical_order
            .get(index)
            .and_then(|id| self.physicals.get(id))
    }

    /// The physical terminal holding `terminal`.
    pub fn physical_terminal_of(&self, terminal: RealTerminalId) -> Option<&PhysicalTerminal> {
        self.terminals
            .get(&terminal)
            .and_then(|t| self.physicals.get(&t.physical_terminal()))
    }

    /// Physical terminals in strip order.
    pub fn physical_terminals(&self) -> impl Iterator<Item = &PhysicalTerminal> + '_ {
        self.physical_order
            .iter()
            .filter_map(|id| self.physicals.get(id))
    }

    pub fn physical_terminal_ids(&self) -> &[PhysicalTerminalId] {
        &self.physical_order
    }

    pub fn physical_terminal_count(&self) -> usize {
        self.physical_order.len()
    }

    // ----- crate internals -----

    /// Every real terminal in table order (unordered).
    pub(crate) fn terminal_table(&self) -> impl Iterator<Item = &RealTerminal> + '_ {
        self.terminals.values()
    }

    /// Number of physical terminals stored, ordered or not.
    pub(crate) fn physical_table_len(&self) -> usize {
        self.physicals.len()
    }

    pub(crate) fn element_index(&self) -> impl Iterator<Item = (ElementId, RealTerminalId)> + '_ {
        self.elements.iter().map(|(e, t)| (*e, *t))
    }

    /// Create a terminal in a new physical terminal at the end. No notification.
    fn insert_terminal(&mut self, element: Option<ElementId>, data: TerminalData) -> RealTerminalId {
        let id = RealTerminalId::new();
        let physical = PhysicalTerminalId::new();
        self.terminals.insert(
            id,
            RealTerminal::new(id, self.data.uuid, element, physical, data),
        );
        if let Some(element) = element {
            self.elements.insert(element, id);
        }
        self.push_physical(physical, vec![id]);
        id
    }

    /// Append a physical terminal holding `levels` and place its terminals.
    fn push_physical(&mut self, id: PhysicalTerminalId, levels: Vec<RealTerminalId>) {
        self.physicals.insert(id, PhysicalTerminal::new(id, levels));
        self.physical_order.push(id);
        self.sync_levels(id);
    }

    /// Copy the stack positions of `physical` into its real terminals.
    fn sync_levels(&mut self, physical: PhysicalTerminalId) {
        let Some(pt) = self.physicals.get(&physical) else {
            return;
        };
        for (level, id) in pt.real_terminals().iter().enumerate() {
            if let Some(terminal) = self.terminals.get_mut(id) {
                terminal.place(physical, level);
            }
        }
    }

    /// Take `terminal` out of its physical terminal, destroying the physical
    /// terminal if it is left empty. Returns true if it was destroyed.
    fn detach(&mut self, terminal: RealTerminalId) -> bool {
        let Some(physical) = self.terminals.get(&terminal).map(|t| t.physical_terminal()) else {
            return false;
        };
        let emptied = match self.physicals.get_mut(&physical) {
            Some(pt) => {
                pt.remove(terminal);
                pt.is_empty()
            }
            None => return false,
        };

        if emptied {
            self.physicals.remove(&physical);
            self.physical_order.retain(|id| *id != physical);
        } else {
            self.sync_levels(physical);
        }
        emptied
    }

    /// Take `terminal` out of its bridge, dissolving the bridge if fewer than
    /// two members remain. Returns true if a bridge changed.
    fn leave_bridge(&mut self, terminal: RealTerminalId) -> bool {
        let Some(bridge_id) = self.terminals.get(&terminal).and_then(|t| t.bridge()) else {
            return false;
        };
        if let Some(t) = self.terminals.get_mut(&terminal) {
            t.set_bridge(None);
        }
        let Some(index) = self.bridges.iter().position(|b| b.id() == bridge_id) else {
            return true;
        };

        self.bridges[index].remove(terminal);
        if self.bridges[index].len() < 2 {
            let mut bridge = self.bridges.remove(index);
            for member in bridge.drain() {
                if let Some(t) = self.terminals.get_mut(&member) {
                    t.set_bridge(None);
                }
            }
            debug!("strip {}: bridge {bridge_id} dissolved", self.data.uuid);
        }
        true
    }

    /// Insert a loaded physical terminal with known ids. No notification.
    ///
    /// Callers guarantee none of the ids or elements are already present.
    pub(crate) fn restore_physical(
        &mut self,
        id: PhysicalTerminalId,
        levels: Vec<(RealTerminalId, Option<ElementId>, TerminalData)>,
    ) {
        let mut stack = Vec::with_capacity(levels.len());
        for (terminal, element, data) in levels {
            self.terminals.insert(
                terminal,
                RealTerminal::new(terminal, self.data.uuid, element, id, data),
            );
            if let Some(element) = element {
                self.elements.insert(element, terminal);
            }
            stack.push(terminal);
        }
        self.push_physical(id, stack);
    }

    /// Insert a loaded bridge with known ids. No notification.
    ///
    /// Callers guarantee the members exist, are unbridged and number at
    /// least two.
    pub(crate) fn restore_bridge(&mut self, id: BridgeId, color: Color, members: Vec<RealTerminalId>) {
        for member in &members {
            if let Some(t) = self.terminals.get_mut(member) {
                t.set_bridge(Some(id));
            }
        }
        self.bridges.push(TerminalStripBridge::new(id, color, members));
    }
}

impl fmt::Debug for TerminalStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalStrip")
            .field("data", &self.data)
            .field("physical_terminals", &self.physical_order.len())
            .field("real_terminals", &self.terminals.len())
            .field("bridges", &self.bridges.len())
            .field("observers", &self.observers)
            .finish()
    }
}

/// Keep the first occurrence of each id.
pub(crate) fn distinct(ids: &[RealTerminalId]) -> Vec<RealTerminalId> {
    let mut out: Vec<RealTerminalId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    out
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::core::element::ElementSnapshot;

    mod lifecycle {
        use super::*;

        #[test]
        fn add_terminal_appends_single_level_physical() {
            let (mut strip, events) = observed_strip();
            let element = ElementSnapshot::new(TerminalData::labeled("1"));

            let id = strip.add_terminal(&element).unwrap();

            assert_eq!(strip.physical_terminal_count(), 1);
            assert_eq!(strip.real_terminal_count(), 1);
            let t = strip.real_terminal(id).unwrap();
            assert_eq!(t.level(), 0);
            assert_eq!(t.element(), Some(element.id));
            assert_eq!(t.parent_strip(), strip.uuid());
            assert_eq!(t.label(), "1");
            assert_eq!(*events.borrow(), vec![StripEvent::OrderChanged]);
            assert_verified(&strip);
        }

        #[test]
        fn add_same_element_twice_is_duplicate() {
            let (mut strip, events) = observed_strip();
            let element = ElementSnapshot::new(TerminalData::default());
            strip.add_terminal(&element).unwrap();
            events.borrow_mut().clear();

            let err = strip.add_terminal(&element).unwrap_err();

            assert_eq!(err, StripError::DuplicateTerminal(element.id));
            assert_eq!(strip.real_terminal_count(), 1);
            assert!(events.borrow().is_empty());
        }

        #[test]
        fn add_then_remove_leaves_empty_strip() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let element = ElementSnapshot::new(TerminalData::default());
            strip.add_terminal(&element).unwrap();

            strip.remove_terminal(element.id).unwrap();

            assert_eq!(strip.physical_terminal_count(), 0);
            assert_eq!(strip.real_terminal_count(), 0);
            assert!(strip.terminal_elements().is_empty());
            assert_verified(&strip);
        }

        #[test]
        fn remove_unknown_element_is_not_found() {
            let (mut strip, events) = observed_strip();
            let unknown = ElementId::new();

            let err = strip.remove_terminal(unknown).unwrap_err();

            assert_eq!(err, StripError::NotFound(Missing::Element(unknown)));
            assert!(events.borrow().is_empty());
        }

        #[test]
        fn remove_grouped_terminal_keeps_physical() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 3);
            let receiver = strip.real_terminal(ids[0]).unwrap().physical_terminal();
            strip.group_terminals(receiver, &[ids[1], ids[2]]).unwrap();

            strip.remove_real_terminal(ids[1]).unwrap();

            let pt = strip.physical_terminal(receiver).unwrap();
            assert_eq!(pt.real_terminals(), &[ids[0], ids[2]]);
            assert_eq!(strip.real_terminal(ids[2]).unwrap().level(), 1);
            assert_verified(&strip);
        }

        #[test]
        fn remove_bridged_terminal_dissolves_two_member_bridge() {
            let (mut strip, events) = observed_strip();
            let ids = add_n(&mut strip, 2);
            strip.set_bridge(&ids).unwrap();
            events.borrow_mut().clear();

            strip.remove_real_terminal(ids[0]).unwrap();

            assert!(strip.bridges().is_empty());
            assert!(!strip.real_terminal(ids[1]).unwrap().is_bridged());
            assert_eq!(
                *events.borrow(),
                vec![StripEvent::BridgeChanged, StripEvent::OrderChanged]
            );
            assert_verified(&strip);
        }

        #[test]
        fn remove_bridged_terminal_keeps_larger_bridge() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 3);
            let bridge = strip.set_bridge(&ids).unwrap();

            strip.remove_real_terminal(ids[0]).unwrap();

            assert_eq!(strip.bridge(bridge).unwrap().real_terminals(), &[ids[1], ids[2]]);
            assert_verified(&strip);
        }

        #[test]
        fn virtual_terminal_has_no_element() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let id = strip.add_virtual_terminal(TerminalData::labeled("spare"));

            let t = strip.real_terminal(id).unwrap();
            assert!(!t.is_element());
            assert!(strip.terminal_elements().is_empty());
            assert_verified(&strip);
        }

        #[test]
        fn refresh_element_updates_data() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let mut element = ElementSnapshot::new(TerminalData::labeled("old"));
            let id = strip.add_terminal(&element).unwrap();

            element.data.label = "new".into();
            element.data.led = true;
            strip.refresh_element(&element).unwrap();

            let t = strip.real_terminal(id).unwrap();
            assert_eq!(t.label(), "new");
            assert!(t.is_led());
        }

        #[test]
        fn prune_removes_dead_elements_only() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let alive = ElementSnapshot::new(TerminalData::default());
            let dead = ElementSnapshot::new(TerminalData::default());
            strip.add_terminal(&alive).unwrap();
            strip.add_terminal(&dead).unwrap();
            strip.add_virtual_terminal(TerminalData::default());

            let alive_id = alive.id;
            let removed = strip.prune_dead_elements(&move |e: ElementId| e == alive_id);

            assert_eq!(removed, vec![dead.id]);
            assert_eq!(strip.real_terminal_count(), 2);
            assert!(strip.real_terminal_for_element(alive.id).is_some());
            assert_verified(&strip);
        }
    }

    mod metadata {
        use super::*;

        #[test]
        fn setters_update_fields() {
            let mut strip = TerminalStrip::new("a", "b", "c");
            strip.set_comment("note");
            strip.set_description("main supply");
            strip.set_installation("plant 2");

            assert_eq!(strip.installation(), "plant 2");
            assert_eq!(strip.location(), "b");
            assert_eq!(strip.name(), "c");
            assert_eq!(strip.comment(), "note");
            assert_eq!(strip.description(), "main supply");
        }

        #[test]
        fn set_data_keeps_uuid() {
            let mut strip = TerminalStrip::new("a", "b", "c");
            let uuid = strip.uuid();

            strip.set_data(TerminalStripData {
                name: "X9".into(),
                ..TerminalStripData::default()
            });

            assert_eq!(strip.uuid(), uuid);
            assert_eq!(strip.name(), "X9");
            assert_eq!(strip.installation(), "");
        }

        #[test]
        fn unsubscribed_observer_is_silent() {
            let (mut strip, events) = observed_strip();
            let extra = std::rc::Rc::new(std::cell::RefCell::new(0));
            let e = extra.clone();
            let sub = strip.subscribe(move |_, _| *e.borrow_mut() += 1);
            assert!(strip.unsubscribe(sub));

            add_n(&mut strip, 1);

            assert_eq!(*extra.borrow(), 0);
            assert_eq!(events.borrow().len(), 1);
        }
    }

    #[test]
    fn distinct_keeps_first_occurrence() {
        let a = RealTerminalId::new();
        let b = RealTerminalId::new();
        assert_eq!(distinct(&[a, b, a, b]), vec![a, b]);
    }
}
