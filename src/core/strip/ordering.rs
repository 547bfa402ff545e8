//! Positions, reordering and navigation.
//!
//! Navigation never wraps around: asking for the neighbour of the first or
//! last terminal returns `None`.

use std::collections::HashSet;

use log::debug;

use super::{StripError, TerminalStrip};
use crate::core::events::StripEvent;
use crate::core::types::{PhysicalTerminalId, RealTerminalId};

impl TerminalStrip {
    /// Index of `physical` in the strip order.
    pub fn pos(&self, physical: PhysicalTerminalId) -> Option<usize> {
        self.physical_order.iter().position(|id| *id == physical)
    }

    /// Replace the physical order.
    ///
    /// # Errors
    ///
    /// `InvalidPermutation` unless `sorted` holds every current physical
    /// terminal exactly once and nothing else.
    pub fn set_order_to(&mut self, sorted: &[PhysicalTerminalId]) -> Result<(), StripError> {
        let unique: HashSet<_> = sorted.iter().collect();
        let valid = sorted.len() == self.physical_order.len()
            && unique.len() == sorted.len()
            && sorted.iter().all(|id| self.physicals.contains_key(id));
        if !valid {
            debug!("strip {}: rejected order of {} entries", self.data.uuid, sorted.len());
            return Err(StripError::InvalidPermutation);
        }

        self.physical_order = sorted.to_vec();
        self.notify(StripEvent::OrderChanged);
        Ok(())
    }

    /// The terminal one level below `terminal` in the same physical terminal.
    pub fn previous_terminal_in_level(&self, terminal: RealTerminalId) -> Option<RealTerminalId> {
        let (pt, level) = self.locate(terminal)?;
        let pt = self.physicals.get(&pt)?;
        level.checked_sub(1).and_then(|l| pt.at_level(l))
    }

    /// The terminal one level above `terminal` in the same physical terminal.
    pub fn next_terminal_in_level(&self, terminal: RealTerminalId) -> Option<RealTerminalId> {
        let (pt, level) = self.locate(terminal)?;
        self.physicals.get(&pt)?.at_level(level + 1)
    }

    /// The terminal before `terminal` in the flattened strip.
    pub fn previous_real_terminal(&self, terminal: RealTerminalId) -> Option<RealTerminalId> {
        if let Some(below) = self.previous_terminal_in_level(terminal) {
            return Some(below);
        }
        let index = self.pos(self.locate(terminal)?.0)?;
        let previous = self.physical_terminal_at(index.checked_sub(1)?)?;
        previous.real_terminals().last().copied()
    }

    /// The terminal after `terminal` in the flattened strip.
    pub fn next_real_terminal(&self, terminal: RealTerminalId) -> Option<RealTerminalId> {
        if let Some(above) = self.next_terminal_in_level(terminal) {
            return Some(above);
        }
        let index = self.pos(self.locate(terminal)?.0)?;
        self.physical_terminal_at(index + 1)?.at_level(0)
    }

    /// The terminal at the same level in the previous physical terminal.
    pub fn previous_terminal_at_level(&self, terminal: RealTerminalId) -> Option<RealTerminalId> {
        let (pt, level) = self.locate(terminal)?;
        let index = self.pos(pt)?;
        self.physical_terminal_at(index.checked_sub(1)?)?
            .at_level(level)
    }

    /// The terminal at the same level in the next physical terminal.
    pub fn next_terminal_at_level(&self, terminal: RealTerminalId) -> Option<RealTerminalId> {
        let (pt, level) = self.locate(terminal)?;
        let index = self.pos(pt)?;
        self.physical_terminal_at(index + 1)?.at_level(level)
    }

    fn locate(&self, terminal: RealTerminalId) -> Option<(PhysicalTerminalId, usize)> {
        self.terminals
            .get(&terminal)
            .map(|t| (t.physical_terminal(), t.level()))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::StripEvent;
    use crate::core::strip::test_support::*;
    use crate::core::strip::{StripError, TerminalStrip};
    use crate::core::types::{PhysicalTerminalId, RealTerminalId};

    /// Strip [P0{a}, P1{b, c}, P2{d}].
    fn layout() -> (TerminalStrip, Vec<RealTerminalId>) {
        let mut strip = TerminalStrip::new("", "", "X1");
        let ids = add_n(&mut strip, 4);
        let p1 = strip.real_terminal(ids[1]).unwrap().physical_terminal();
        strip.group_terminals(p1, &[ids[2]]).unwrap();
        (strip, ids)
    }

    mod order {
        use super::*;

        #[test]
        fn pos_follows_insertion() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 3);
            for (i, id) in ids.iter().enumerate() {
                let pt = strip.real_terminal(*id).unwrap().physical_terminal();
                assert_eq!(strip.pos(pt), Some(i));
            }
            assert_eq!(strip.pos(PhysicalTerminalId::new()), None);
        }

        #[test]
        fn current_order_is_accepted_unchanged() {
            let (mut strip, events) = observed_strip();
            add_n(&mut strip, 3);
            let order = strip.physical_terminal_ids().to_vec();
            events.borrow_mut().clear();

            strip.set_order_to(&order).unwrap();

            assert_eq!(strip.physical_terminal_ids(), order.as_slice());
            assert_eq!(*events.borrow(), vec![StripEvent::OrderChanged]);
        }

        #[test]
        fn reversed_order_is_applied() {
            let mut strip = TerminalStrip::new("", "", "X1");
            let ids = add_n(&mut strip, 3);
            let mut order = strip.physical_terminal_ids().to_vec();
            order.reverse();

            strip.set_order_to(&order).unwrap();

            let flat = strip.real_terminal_ids();
            assert_eq!(flat, vec![ids[2], ids[1], ids[0]]);
            assert_verified(&strip);
        }

        #[test]
        fn missing_entry_is_rejected() {
            let (mut strip, events) = observed_strip();
            add_n(&mut strip, 3);
            let order = strip.physical_terminal_ids().to_vec();
            events.borrow_mut().clear();

            let err = strip.set_order_to(&order[..2]).unwrap_err();

            assert_eq!(err, StripError::InvalidPermutation);
            assert_eq!(strip.physical_terminal_ids(), order.as_slice());
            assert!(events.borrow().is_empty());
        }

        #[test]
        fn duplicated_entry_is_rejected() {
            let mut strip = TerminalStrip::new("", "", "X1");
            add_n(&mut strip, 3);
            let order = strip.physical_terminal_ids().to_vec();
            let bad = vec![order[0], order[0], order[1]];

            assert_eq!(strip.set_order_to(&bad), Err(StripError::InvalidPermutation));
            assert_eq!(strip.physical_terminal_ids(), order.as_slice());
        }

        #[test]
        fn foreign_entry_is_rejected() {
            let mut strip = TerminalStrip::new("", "", "X1");
            add_n(&mut strip, 2);
            let order = strip.physical_terminal_ids().to_vec();
            let bad = vec![order[0], PhysicalTerminalId::new()];

            assert_eq!(strip.set_order_to(&bad), Err(StripError::InvalidPermutation));
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn within_level_stops_at_ends() {
            let (strip, ids) = layout();
            assert_eq!(strip.next_terminal_in_level(ids[1]), Some(ids[2]));
            assert_eq!(strip.previous_terminal_in_level(ids[2]), Some(ids[1]));
            assert_eq!(strip.next_terminal_in_level(ids[2]), None);
            assert_eq!(strip.previous_terminal_in_level(ids[1]), None);
            assert_eq!(strip.next_terminal_in_level(ids[0]), None);
        }

        #[test]
        fn flattened_chain_crosses_physical_boundaries() {
            let (strip, ids) = layout();
            let mut chain = vec![ids[0]];
            while let Some(next) = strip.next_real_terminal(*chain.last().unwrap()) {
                chain.push(next);
            }
            assert_eq!(chain, ids);
            assert_eq!(chain, strip.real_terminal_ids());
        }

        #[test]
        fn flattened_chain_backwards() {
            let (strip, ids) = layout();
            assert_eq!(strip.previous_real_terminal(ids[3]), Some(ids[2]));
            assert_eq!(strip.previous_real_terminal(ids[2]), Some(ids[1]));
            assert_eq!(strip.previous_real_terminal(ids[1]), Some(ids[0]));
            assert_eq!(strip.previous_real_terminal(ids[0]), None);
        }

        #[test]
        fn no_wraparound_at_strip_ends() {
            let (strip, ids) = layout();
            assert_eq!(strip.next_real_terminal(ids[3]), None);
            assert_eq!(strip.previous_real_terminal(ids[0]), None);
        }

        #[test]
        fn unknown_terminal_has_no_neighbours() {
            let (strip, _) = layout();
            let unknown = RealTerminalId::new();
            assert_eq!(strip.next_real_terminal(unknown), None);
            assert_eq!(strip.previous_terminal_in_level(unknown), None);
            assert_eq!(strip.next_terminal_at_level(unknown), None);
        }

        #[test]
        fn same_level_in_neighbour_physical() {
            let (strip, ids) = layout();
            // level 0 row: a, b, d
            assert_eq!(strip.next_terminal_at_level(ids[0]), Some(ids[1]));
            assert_eq!(strip.next_terminal_at_level(ids[1]), Some(ids[3]));
            assert_eq!(strip.previous_terminal_at_level(ids[3]), Some(ids[1]));
            // c sits at level 1, neither neighbour has a level 1
            assert_eq!(strip.next_terminal_at_level(ids[2]), None);
            assert_eq!(strip.previous_terminal_at_level(ids[2]), None);
            assert_eq!(strip.previous_terminal_at_level(ids[0]), None);
        }
    }
}
