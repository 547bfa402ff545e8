//! Bridges between real terminals.
//!
//! A new bridge can only be made of unbridged terminals; joining terminals
//! to a bridge that already exists goes through [`TerminalStrip::set_bridge_to`].
//! A bridge never has fewer than two members: when removal leaves one, the
//! bridge is dissolved.

use log::debug;

use super::{distinct, Missing, StripError, TerminalStrip};
use crate::core::bridge::TerminalStripBridge;
use crate::core::events::StripEvent;
use crate::core::types::{BridgeId, Color, RealTerminalId};

impl TerminalStrip {
    /// Whether `terminals` can form a new bridge: at least two distinct
    /// terminals of this strip, none of them bridged yet.
    pub fn is_bridgeable(&self, terminals: &[RealTerminalId]) -> bool {
        let terminals = distinct(terminals);
        terminals.len() >= 2
            && terminals.iter().all(|id| {
                self.terminals
                    .get(id)
                    .is_some_and(|t| !t.is_bridged())
            })
    }

    /// Whether `terminals` can join `bridge`: each must be in this strip and
    /// either unbridged or already a member of `bridge`.
    pub fn is_bridgeable_to(&self, bridge: BridgeId, terminals: &[RealTerminalId]) -> bool {
        let Some(existing) = self.bridge(bridge) else {
            return false;
        };
        let terminals = distinct(terminals);
        let joined = terminals
            .iter()
            .filter(|id| !existing.contains(**id))
            .count();

        !terminals.is_empty()
            && existing.len() + joined >= 2
            && terminals.iter().all(|id| {
                self.terminals
                    .get(id)
                    .is_some_and(|t| t.bridge().map_or(true, |b| b == bridge))
            })
    }

    /// Bridge `terminals` together with a new bridge.
    ///
    /// The bridge color is the next one from the strip palette.
    ///
    /// # Errors
    ///
    /// `NotBridgeable` unless [`is_bridgeable`](Self::is_bridgeable).
    pub fn set_bridge(&mut self, terminals: &[RealTerminalId]) -> Result<BridgeId, StripError> {
        if !self.is_bridgeable(terminals) {
            debug!("strip {}: terminals not bridgeable", self.data.uuid);
            return Err(StripError::NotBridgeable);
        }

        let id = BridgeId::new();
        let color = self
            .palette
            .next_color(self.bridges.iter().map(TerminalStripBridge::color));
        let members = distinct(terminals);
        for member in &members {
            if let Some(t) = self.terminals.get_mut(member) {
                t.set_bridge(Some(id));
            }
        }
        self.bridges
            .push(TerminalStripBridge::new(id, color, members));

        debug!("strip {}: created bridge {id} ({color})", self.data.uuid);
        self.notify(StripEvent::BridgeChanged);
        Ok(id)
    }

    /// Add `terminals` to the existing `bridge`.
    ///
    /// Terminals that already belong to it are ignored; nothing is notified
    /// if no terminal actually joined.
    ///
    /// # Errors
    ///
    /// `NotBridgeable` unless [`is_bridgeable_to`](Self::is_bridgeable_to).
    pub fn set_bridge_to(
        &mut self,
        bridge: BridgeId,
        terminals: &[RealTerminalId],
    ) -> Result<(), StripError> {
        if !self.is_bridgeable_to(bridge, terminals) {
            debug!("strip {}: terminals cannot join bridge {bridge}", self.data.uuid);
            return Err(StripError::NotBridgeable);
        }

        let mut joined = 0;
        for id in distinct(terminals) {
            let Some(t) = self.terminals.get_mut(&id) else {
                continue;
            };
            if t.is_bridged() {
                continue;
            }
            t.set_bridge(Some(bridge));
            if let Some(b) = self.bridges.iter_mut().find(|b| b.id() == bridge) {
                b.add(id);
            }
            joined += 1;
        }

        if joined > 0 {
            debug!("strip {}: {joined} terminal(s) joined bridge {bridge}", self.data.uuid);
            self.notify(StripEvent::BridgeChanged);
        }
        Ok(())
    }

    /// Take each terminal out of its bridge.
    ///
    /// Unbridged terminals are ignored. A bridge left with fewer than two
    /// members is dissolved.
    ///
    /// # Errors
    ///
    /// `NotFound` if any terminal is not in this strip; nothing changes.
    pub fn un_bridge(&mut self, terminals: &[RealTerminalId]) -> Result<(), StripError> {
        if let Some(unknown) = terminals.iter().find(|id| !self.terminals.contains_key(*id)) {
            return Err(StripError::NotFound(Missing::RealTerminal(*unknown)));
        }

        let mut changed = false;
        for id in distinct(terminals) {
            changed |= self.leave_bridge(id);
        }

        if changed {
            self.notify(StripEvent::BridgeChanged);
        }
        Ok(())
    }

    /// Whether every terminal is in this strip and currently bridged.
    pub fn can_un_bridge(&self, terminals: &[RealTerminalId]) -> bool {
        !terminals.is_empty()
            && terminals.iter().all(|id| {
                self.terminals
                    .get(id)
                    .is_some_and(|t| t.is_bridged())
            })
    }

    /// The bridge `terminal` belongs to.
    pub fn is_bridged(&self, terminal: RealTerminalId) -> Option<&TerminalStripBridge> {
        self.terminals
            .get(&terminal)
            .and_then(|t| t.bridge())
            .and_then(|b| self.bridge(b))
    }

    /// The bridge shared by every terminal, `None` if they do not all share
    /// one.
    pub fn bridge_for(&self, terminals: &[RealTerminalId]) -> Option<&TerminalStripBridge> {
        let (first, rest) = terminals.split_first()?;
        let bridge = self.is_bridged(*first)?;
        rest.iter()
            .all(|id| self.is_bridged(*id).is_some_and(|b| b.id() == bridge.id()))
            .then_some(bridge)
    }

    pub fn bridge(&self, id: BridgeId) -> Option<&TerminalStripBridge> {
        self.bridges.iter().find(|b| b.id() == id)
    }

    /// Bridges in creation order.
    pub fn bridges(&self) -> &[TerminalStripBridge] {
        &self.bridges
    }

    /// Recolor a bridge.
    ///
    /// # Errors
    ///
    /// `NotFound` if the bridge is not in this strip.
    pub fn set_bridge_color(&mut self, bridge: BridgeId, color: Color) -> Result<(), StripError> {
        let b = self
            .bridges
            .iter_mut()
            .find(|b| b.id() == bridge)
            .ok_or(StripError::NotFound(Missing::Bridge(bridge)))?;
        if b.color() == color {
            return Ok(());
        }
        b.set_color(color);
        self.notify(StripEvent::BridgeChanged);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::bridge::BridgePalette;
    use crate::core::events::StripEvent;
    use crate::core::strip::test_support::*;
    use crate::core::strip::{Missing, StripError, TerminalStrip};
    use crate::core::types::{BridgeId, Color, RealTerminalId};

    mod set_bridge {
        use super::*;

        #[test]
        fn both_members_share_the_bridge() {
            let (mut strip, events) = observed_strip();
            let ids = add_n(&mut strip, 2);
            events.borrow_mut().clear();

            let bridge = strip.set_bridge(&ids).unwrap();

            assert_eq!(strip.is_bridged(ids[0]).map(|b| b.id()), Some(bridge));
            assert_eq!(strip.is_bridged(ids[1]).map(|b| b.id()), Some(bridge));
            assert!(strip.real_terminal(ids[0]).unwrap().is_bridged());
            assert_eq!(*events.borrow(), vec![StripEvent::BridgeChanged]);
            assert_verified(&strip);
        }

        #[test]
        fn single_terminal_is_not_bridgeable() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 1);
            assert!(!strip.is_bridgeable(&ids));
            assert!(!strip.is_bridgeable(&[ids[0], ids[0]]));
            assert_eq!(strip.set_bridge(&[ids[0], ids[0]]), Err(StripError::NotBridgeable));
        }

        #[test]
        fn foreign_terminal_is_not_bridgeable() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 1);
            assert!(!strip.is_bridgeable(&[ids[0], RealTerminalId::new()]));
        }

        #[test]
        fn members_of_one_bridge_cannot_form_another() {
            let (mut strip, events) = observed_strip();
            let ids = add_n(&mut strip, 2);
            let bridge = strip.set_bridge(&ids).unwrap();
            events.borrow_mut().clear();

            assert!(!strip.is_bridgeable(&ids));
            assert_eq!(strip.set_bridge(&ids), Err(StripError::NotBridgeable));
            assert_eq!(strip.bridges().len(), 1);
            assert_eq!(strip.is_bridged(ids[0]).map(|b| b.id()), Some(bridge));
            assert!(events.borrow().is_empty());
            assert!(strip.is_bridgeable_to(bridge, &ids));
        }

        #[test]
        fn already_bridged_terminal_needs_extension() {
            let (mut strip, events) = observed_strip();
            let ids = add_n(&mut strip, 3);
            let (t1, t2, t3) = (ids[0], ids[1], ids[2]);
            let bridge = strip.set_bridge(&[t1, t3]).unwrap();
            events.borrow_mut().clear();

            assert_eq!(strip.set_bridge(&[t1, t2]), Err(StripError::NotBridgeable));
            assert!(events.borrow().is_empty());
            assert!(!strip.real_terminal(t2).unwrap().is_bridged());

            strip.set_bridge_to(bridge, &[t1, t2]).unwrap();

            assert_eq!(strip.bridge(bridge).unwrap().real_terminals(), &[t1, t3, t2]);
            assert_eq!(strip.bridges().len(), 1);
            assert_eq!(*events.borrow(), vec![StripEvent::BridgeChanged]);
            assert_verified(&strip);
        }

        #[test]
        fn extension_rejects_members_of_other_bridges() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 4);
            let first = strip.set_bridge(&ids[..2]).unwrap();
            strip.set_bridge(&ids[2..]).unwrap();

            assert!(!strip.is_bridgeable_to(first, &[ids[2]]));
            assert_eq!(strip.set_bridge_to(first, &[ids[2]]), Err(StripError::NotBridgeable));
            assert_eq!(
                strip.set_bridge_to(BridgeId::new(), &[ids[0]]),
                Err(StripError::NotBridgeable)
            );
        }

        #[test]
        fn extension_with_existing_members_is_silent() {
            let (mut strip, events) = observed_strip();
            let ids = add_n(&mut strip, 2);
            let bridge = strip.set_bridge(&ids).unwrap();
            events.borrow_mut().clear();

            strip.set_bridge_to(bridge, &ids).unwrap();

            assert!(events.borrow().is_empty());
            assert_eq!(strip.bridge(bridge).unwrap().len(), 2);
        }

        #[test]
        fn colors_follow_palette_policy() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 12);
            let colors: Vec<Color> = ids
                .chunks(2)
                .map(|pair| {
                    let b = strip.set_bridge(pair).unwrap();
                    strip.bridge(b).unwrap().color()
                })
                .collect();

            assert_eq!(
                colors,
                vec![
                    Color::RED,
                    Color::BLUE,
                    Color::WHITE,
                    Color::DARK_GRAY,
                    Color::BLACK,
                    Color::RED
                ]
            );
        }

        #[test]
        fn dissolved_bridge_frees_its_color() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 4);
            strip.set_bridge(&ids[..2]).unwrap();
            strip.set_bridge(&ids[2..]).unwrap();
            strip.un_bridge(&ids[..1]).unwrap();

            let again = strip.set_bridge(&ids[..2]).unwrap();

            assert_eq!(strip.bridge(again).unwrap().color(), Color::RED);
        }

        #[test]
        fn custom_palette_is_used() {
            let green = Color::rgb(0, 0xff, 0);
            let mut strip =
                TerminalStrip::new("", "", "X1").with_palette(BridgePalette::new(vec![green]));
            let ids = add_n(&mut strip, 2);
            let bridge = strip.set_bridge(&ids).unwrap();
            assert_eq!(strip.bridge(bridge).unwrap().color(), green);
        }
    }

    mod un_bridge {
        use super::*;

        #[test]
        fn two_member_bridge_dissolves() {
            let (mut strip, events) = observed_strip();
            let ids = add_n(&mut strip, 2);
            strip.set_bridge(&ids).unwrap();
            events.borrow_mut().clear();

            strip.un_bridge(&ids[..1]).unwrap();

            assert!(strip.is_bridged(ids[0]).is_none());
            assert!(strip.is_bridged(ids[1]).is_none());
            assert!(strip.bridges().is_empty());
            assert_eq!(*events.borrow(), vec![StripEvent::BridgeChanged]);
            assert_verified(&strip);
        }

        #[test]
        fn larger_bridge_survives() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 3);
            let bridge = strip.set_bridge(&ids).unwrap();

            strip.un_bridge(&ids[..1]).unwrap();

            assert!(strip.is_bridged(ids[0]).is_none());
            assert_eq!(strip.is_bridged(ids[1]).map(|b| b.id()), Some(bridge));
            assert_eq!(strip.is_bridged(ids[2]).map(|b| b.id()), Some(bridge));
            assert_verified(&strip);
        }

        #[test]
        fn unbridged_terminals_are_ignored() {
            let (mut strip, events) = observed_strip();
            let ids = add_n(&mut strip, 2);
            events.borrow_mut().clear();

            strip.un_bridge(&ids).unwrap();

            assert!(events.borrow().is_empty());
        }

        #[test]
        fn unknown_terminal_fails_without_change() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 2);
            strip.set_bridge(&ids).unwrap();
            let unknown = RealTerminalId::new();

            let err = strip.un_bridge(&[ids[0], unknown]).unwrap_err();

            assert_eq!(err, StripError::NotFound(Missing::RealTerminal(unknown)));
            assert_eq!(strip.bridges().len(), 1);
        }

        #[test]
        fn can_un_bridge_requires_every_terminal_bridged() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 3);
            strip.set_bridge(&ids[..2]).unwrap();

            assert!(strip.can_un_bridge(&ids[..2]));
            assert!(!strip.can_un_bridge(&ids));
            assert!(!strip.can_un_bridge(&[]));
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn bridge_for_requires_a_common_bridge() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 5);
            let first = strip.set_bridge(&ids[..2]).unwrap();
            strip.set_bridge(&ids[2..4]).unwrap();

            assert_eq!(strip.bridge_for(&ids[..2]).map(|b| b.id()), Some(first));
            assert!(strip.bridge_for(&ids[1..3]).is_none());
            assert!(strip.bridge_for(&[ids[0], ids[4]]).is_none());
            assert!(strip.bridge_for(&[ids[4]]).is_none());
            assert!(strip.bridge_for(&[]).is_none());
        }

        #[test]
        fn recolor_notifies_once() {
            let (mut strip, events) = observed_strip();
            let ids = add_n(&mut strip, 2);
            let bridge = strip.set_bridge(&ids).unwrap();
            events.borrow_mut().clear();

            strip.set_bridge_color(bridge, Color::BLACK).unwrap();
            strip.set_bridge_color(bridge, Color::BLACK).unwrap();

            assert_eq!(strip.bridge(bridge).unwrap().color(), Color::BLACK);
            assert_eq!(*events.borrow(), vec![StripEvent::BridgeChanged]);

            let unknown = BridgeId::new();
            assert_eq!(
                strip.set_bridge_color(unknown, Color::RED),
                Err(StripError::NotFound(Missing::Bridge(unknown)))
            );
        }
    }
}
