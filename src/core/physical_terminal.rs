//! core::physical_terminal
//!
//! One physical slot of a terminal strip.
//!
//! A physical terminal stacks one or more real terminals; the index of a
//! real terminal in the stack is its level. Multi-level terminal blocks
//! have more than one level.
//!
//! # Invariants
//!
//! - Levels are contiguous from 0 and unique
//! - Removing a level shifts the levels above it down by one, keeping
//!   relative order
//! - A physical terminal owned by a strip is never empty; the strip
//!   destroys it in the same call that removes its last level

use super::types::{PhysicalTerminalId, RealTerminalId};

/// An ordered stack of real terminals sharing one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalTerminal {
    id: PhysicalTerminalId,
    levels: Vec<RealTerminalId>,
}

impl PhysicalTerminal {
    pub(crate) fn new(id: PhysicalTerminalId, levels: Vec<RealTerminalId>) -> Self {
        Self { id, levels }
    }

    pub fn id(&self) -> PhysicalTerminalId {
        self.id
    }

    /// Real terminals ordered by level.
    pub fn real_terminals(&self) -> &[RealTerminalId] {
        &self.levels
    }

    pub fn real_terminal_count(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn contains(&self, terminal: RealTerminalId) -> bool {
        self.levels.contains(&terminal)
    }

    /// Level of `terminal`, `None` if it is not stacked here.
    pub fn level_of(&self, terminal: RealTerminalId) -> Option<usize> {
        self.levels.iter().position(|t| *t == terminal)
    }

    /// Real terminal at `level`.
    pub fn at_level(&self, level: usize) -> Option<RealTerminalId> {
        self.levels.get(level).copied()
    }

    /// Stack `terminal` on top. Returns its level.
    pub(crate) fn push(&mut self, terminal: RealTerminalId) -> usize {
        self.levels.push(terminal);
        self.levels.len() - 1
    }

    /// Remove `terminal`, shifting the levels above it down.
    ///
    /// Returns false if it was not stacked here.
    pub(crate) fn remove(&mut self, terminal: RealTerminalId) -> bool {
        match self.level_of(terminal) {
            Some(level) => {
                self.levels.remove(level);
                true
            }
            None => false,
        }
    }

    /// Move `terminal` to `level`, shifting the others.
    ///
    /// Returns false if the terminal is not here or `level` is out of range.
    pub(crate) fn move_to_level(&mut self, terminal: RealTerminalId, level: usize) -> bool {
        if level >= self.levels.len() {
            return false;
        }
        match self.level_of(terminal) {
            Some(current) => {
                let t = self.levels.remove(current);
                self.levels.insert(level, t);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(n: usize) -> (PhysicalTerminal, Vec<RealTerminalId>) {
        let ids: Vec<_> = (0..n).map(|_| RealTerminalId::new()).collect();
        (PhysicalTerminal::new(PhysicalTerminalId::new(), ids.clone()), ids)
    }

    #[test]
    fn push_returns_next_level() {
        let (mut pt, _) = stack(2);
        assert_eq!(pt.push(RealTerminalId::new()), 2);
        assert_eq!(pt.real_terminal_count(), 3);
    }

    #[test]
    fn levels_follow_insertion_order() {
        let (pt, ids) = stack(3);
        for (level, id) in ids.iter().enumerate() {
            assert_eq!(pt.level_of(*id), Some(level));
            assert_eq!(pt.at_level(level), Some(*id));
        }
        assert_eq!(pt.at_level(3), None);
    }

    #[test]
    fn remove_shifts_upper_levels_down() {
        let (mut pt, ids) = stack(3);

        assert!(pt.remove(ids[0]));

        assert_eq!(pt.real_terminals(), &[ids[1], ids[2]]);
        assert_eq!(pt.level_of(ids[1]), Some(0));
        assert_eq!(pt.level_of(ids[2]), Some(1));
    }

    #[test]
    fn remove_unknown_is_refused() {
        let (mut pt, _) = stack(1);
        assert!(!pt.remove(RealTerminalId::new()));
        assert_eq!(pt.real_terminal_count(), 1);
    }

    #[test]
    fn remove_last_level_leaves_empty_stack() {
        let (mut pt, ids) = stack(1);
        assert!(pt.remove(ids[0]));
        assert!(pt.is_empty());
    }

    #[test]
    fn move_to_level_reorders() {
        let (mut pt, ids) = stack(3);

        assert!(pt.move_to_level(ids[2], 0));

        assert_eq!(pt.real_terminals(), &[ids[2], ids[0], ids[1]]);
    }

    #[test]
    fn move_to_level_out_of_range_is_refused() {
        let (mut pt, ids) = stack(2);
        assert!(!pt.move_to_level(ids[0], 2));
        assert_eq!(pt.real_terminals(), &[ids[0], ids[1]]);
    }
}
