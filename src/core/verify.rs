//! core::verify
//!
//! Fast verification of terminal strip invariants.
//!
//! # Checks
//!
//! - Flattened physical order equals the real terminal table, no duplicates
//! - No empty physical terminal, no unordered physical terminal
//! - Each real terminal's physical terminal and level match its stack
//! - Each real terminal names this strip as its parent
//! - Bridges have at least two members, each pointing back at the bridge,
//!   and no terminal is in two bridges
//! - The element index matches the element-backed terminals
//!
//! # Invariants
//!
//! - Never mutates the strip
//! - Must be deterministic

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::strip::TerminalStrip;
use super::types::{BridgeId, PhysicalTerminalId, RealTerminalId};

/// Errors from verification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("real terminal {0} appears more than once in the physical order")]
    DuplicateInOrder(RealTerminalId),

    #[error("real terminal {0} is stacked but missing from the terminal table")]
    NotInTable(RealTerminalId),

    #[error("real terminal {0} is in the table but on no physical terminal")]
    Orphaned(RealTerminalId),

    #[error("physical terminal {0} is empty")]
    EmptyPhysical(PhysicalTerminalId),

    #[error("physical terminal order and table disagree")]
    PhysicalTableMismatch,

    #[error("real terminal {0} records the wrong physical terminal or level")]
    PlacementMismatch(RealTerminalId),

    #[error("real terminal {0} belongs to another strip")]
    ForeignTerminal(RealTerminalId),

    #[error("bridge {0} has fewer than two members")]
    UndersizedBridge(BridgeId),

    #[error("real terminal {0} disagrees with its bridge membership")]
    BridgeMismatch(RealTerminalId),

    #[error("element index out of sync for real terminal {0}")]
    ElementIndexMismatch(RealTerminalId),
}

/// Result of fast verification.
#[derive(Debug)]
pub struct VerifyResult {
    /// Whether verification passed
    pub ok: bool,
    /// Errors found during verification
    pub errors: Vec<VerifyError>,
}

impl VerifyResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: vec![],
        }
    }

    /// Create a failed result with errors.
    pub fn failure(errors: Vec<VerifyError>) -> Self {
        Self { ok: false, errors }
    }
}

/// Check every structural invariant of `strip`.
pub fn fast_verify(strip: &TerminalStrip) -> VerifyResult {
    let mut errors = Vec::new();

    check_structure(strip, &mut errors);
    check_bridges(strip, &mut errors);
    check_elements(strip, &mut errors);

    if errors.is_empty() {
        VerifyResult::success()
    } else {
        VerifyResult::failure(errors)
    }
}

fn check_structure(strip: &TerminalStrip, errors: &mut Vec<VerifyError>) {
    let ordered: HashSet<_> = strip.physical_terminal_ids().iter().collect();
    if ordered.len() != strip.physical_terminal_count()
        || strip.physical_table_len() != strip.physical_terminal_count()
        || strip.physical_terminals().count() != strip.physical_terminal_count()
    {
        errors.push(VerifyError::PhysicalTableMismatch);
    }

    let mut seen = HashSet::new();
    for pt in strip.physical_terminals() {
        if pt.is_empty() {
            errors.push(VerifyError::EmptyPhysical(pt.id()));
        }
        for (level, id) in pt.real_terminals().iter().enumerate() {
            if !seen.insert(*id) {
                errors.push(VerifyError::DuplicateInOrder(*id));
            }
            match strip.real_terminal(*id) {
                None => errors.push(VerifyError::NotInTable(*id)),
                Some(t) => {
                    if t.physical_terminal() != pt.id() || t.level() != level {
                        errors.push(VerifyError::PlacementMismatch(*id));
                    }
                    if t.parent_strip() != strip.uuid() {
                        errors.push(VerifyError::ForeignTerminal(*id));
                    }
                }
            }
        }
    }

    let mut orphans: Vec<_> = strip
        .terminal_table()
        .map(|t| t.id())
        .filter(|id| !seen.contains(id))
        .collect();
    orphans.sort();
    errors.extend(orphans.into_iter().map(VerifyError::Orphaned));
}

fn check_bridges(strip: &TerminalStrip, errors: &mut Vec<VerifyError>) {
    let mut membership: HashMap<RealTerminalId, BridgeId> = HashMap::new();
    for bridge in strip.bridges() {
        if bridge.len() < 2 {
            errors.push(VerifyError::UndersizedBridge(bridge.id()));
        }
        for id in bridge.real_terminals() {
            let points_back = strip
                .real_terminal(*id)
                .is_some_and(|t| t.bridge() == Some(bridge.id()));
            if membership.insert(*id, bridge.id()).is_some() || !points_back {
                errors.push(VerifyError::BridgeMismatch(*id));
            }
        }
    }

    let mut dangling: Vec<_> = strip
        .terminal_table()
        .filter(|t| t.bridge().is_some() && !membership.contains_key(&t.id()))
        .map(|t| t.id())
        .collect();
    dangling.sort();
    errors.extend(dangling.into_iter().map(VerifyError::BridgeMismatch));
}

fn check_elements(strip: &TerminalStrip, errors: &mut Vec<VerifyError>) {
    let mut mismatched: Vec<_> = strip
        .element_index()
        .filter(|(element, id)| {
            strip
                .real_terminal(*id)
                .map_or(true, |t| t.element() != Some(*element))
        })
        .map(|(_, id)| id)
        .collect();

    // every element-backed terminal must be reachable through the index
    mismatched.extend(strip.terminal_table().filter_map(|t| {
        let element = t.element()?;
        let indexed = strip.real_terminal_for_element(element).map(|i| i.id());
        (indexed != Some(t.id())).then_some(t.id())
    }));

    mismatched.sort();
    mismatched.dedup();
    errors.extend(mismatched.into_iter().map(VerifyError::ElementIndexMismatch));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::{ElementSnapshot, TerminalData};

    #[test]
    fn empty_strip_is_valid() {
        let strip = TerminalStrip::new("", "", "X1");
        let result = fast_verify(&strip);
        assert!(result.ok);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn populated_strip_is_valid() {
        let mut strip = TerminalStrip::new("", "", "X1");
        let a = strip
            .add_terminal(&ElementSnapshot::new(TerminalData::default()))
            .unwrap();
        let b = strip.add_virtual_terminal(TerminalData::default());
        let c = strip.add_virtual_terminal(TerminalData::default());
        let pa = strip.real_terminal(a).unwrap().physical_terminal();
        strip.group_terminals(pa, &[b]).unwrap();
        strip.set_bridge(&[a, c]).unwrap();

        let result = fast_verify(&strip);
        assert!(result.ok, "{:?}", result.errors);
    }

    #[test]
    fn failure_carries_errors() {
        let result = VerifyResult::failure(vec![VerifyError::PhysicalTableMismatch]);
        assert!(!result.ok);
        assert_eq!(result.errors.len(), 1);
    }
}
