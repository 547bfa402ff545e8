//! Multi-level grouping and levels.
//!
//! Grouping stacks real terminals onto one physical terminal; ungrouping
//! gives each of them a physical terminal of its own again. A level can only
//! change inside the physical terminal the real terminal already sits on;
//! moving to another physical terminal is what grouping is for.

use log::debug;

use super::{distinct, Missing, StripError, TerminalStrip};
use crate::core::events::StripEvent;
use crate::core::types::{PhysicalTerminalId, RealTerminalId};

impl TerminalStrip {
    /// Stack `added` on top of `receiver`, in the given order.
    ///
    /// Physical terminals emptied by the move are destroyed. An empty
    /// `added` changes nothing.
    ///
    /// # Errors
    ///
    /// - `CrossStripGrouping` if `receiver` or any terminal is not in this strip
    /// - `SelfGrouping` if any terminal already sits on `receiver`
    pub fn group_terminals(
        &mut self,
        receiver: PhysicalTerminalId,
        added: &[RealTerminalId],
    ) -> Result<(), StripError> {
        if !self.physicals.contains_key(&receiver) {
            return Err(StripError::CrossStripGrouping);
        }
        for id in added {
            match self.terminals.get(id) {
                None => return Err(StripError::CrossStripGrouping),
                Some(t) if t.physical_terminal() == receiver => {
                    return Err(StripError::SelfGrouping)
                }
                Some(_) => {}
            }
        }

        let added = distinct(added);
        if added.is_empty() {
            return Ok(());
        }

        for id in &added {
            self.detach(*id);
            if let Some(pt) = self.physicals.get_mut(&receiver) {
                pt.push(*id);
            }
        }
        self.sync_levels(receiver);

        debug!(
            "strip {}: grouped {} terminal(s) onto {receiver}",
            self.data.uuid,
            added.len()
        );
        self.notify(StripEvent::OrderChanged);
        Ok(())
    }

    /// Give each terminal its own physical terminal.
    ///
    /// Terminals are taken in the given order. Each one that shares its
    /// physical terminal with another level moves into a new physical
    /// terminal appended at the end of the strip; a terminal that is the
    /// only level left stays where it is.
    ///
    /// # Errors
    ///
    /// `CrossStripGrouping` if any terminal is not in this strip.
    pub fn un_group_terminals(&mut self, terminals: &[RealTerminalId]) -> Result<(), StripError> {
        if terminals.iter().any(|id| !self.terminals.contains_key(id)) {
            return Err(StripError::CrossStripGrouping);
        }

        let mut extracted = 0;
        for id in distinct(terminals) {
            let shared = self
                .physical_terminal_of(id)
                .is_some_and(|pt| pt.real_terminal_count() > 1);
            if !shared {
                continue;
            }
            self.detach(id);
            self.push_physical(PhysicalTerminalId::new(), vec![id]);
            extracted += 1;
        }

        if extracted > 0 {
            debug!("strip {}: ungrouped {extracted} terminal(s)", self.data.uuid);
            self.notify(StripEvent::OrderChanged);
        }
        Ok(())
    }

    /// Move `terminal` to `level` inside its current physical terminal.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the terminal is not in this strip
    /// - `InvalidLevel` if `level` is not an existing level of its physical
    ///   terminal
    pub fn set_level(&mut self, terminal: RealTerminalId, level: usize) -> Result<(), StripError> {
        let t = self
            .terminals
            .get(&terminal)
            .ok_or(StripError::NotFound(Missing::RealTerminal(terminal)))?;
        let physical = t.physical_terminal();
        let current = t.level();
        let count = self
            .physicals
            .get(&physical)
            .map_or(0, |pt| pt.real_terminal_count());

        if level >= count {
            return Err(StripError::InvalidLevel { level, count });
        }
        if level == current {
            return Ok(());
        }

        if let Some(pt) = self.physicals.get_mut(&physical) {
            pt.move_to_level(terminal, level);
        }
        self.sync_levels(physical);
        self.notify(StripEvent::OrderChanged);
        Ok(())
    }
}
