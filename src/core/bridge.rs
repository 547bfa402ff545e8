//! core::bridge
//!
//! Bridges (jumpers) between real terminals and the colors they are drawn
//! with.
//!
//! # Color policy
//!
//! New bridges take their color from a [`BridgePalette`]:
//!
//! 1. the first palette color that no existing bridge uses
//! 2. once every color is in use, the least used color, earlier palette
//!    entries winning ties
//!
//! With the default palette five bridges get red, blue, white, dark gray and
//! black, and the sixth gets red again.

use super::types::{BridgeId, Color, RealTerminalId};

/// A set of real terminals electrically tied together.
///
/// Member order has no electrical meaning; it is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalStripBridge {
    id: BridgeId,
    color: Color,
    members: Vec<RealTerminalId>,
}

impl TerminalStripBridge {
    pub(crate) fn new(id: BridgeId, color: Color, members: Vec<RealTerminalId>) -> Self {
        Self { id, color, members }
    }

    pub fn id(&self) -> BridgeId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn real_terminals(&self) -> &[RealTerminalId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, terminal: RealTerminalId) -> bool {
        self.members.contains(&terminal)
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn add(&mut self, terminal: RealTerminalId) {
        if !self.contains(terminal) {
            self.members.push(terminal);
        }
    }

    pub(crate) fn remove(&mut self, terminal: RealTerminalId) -> bool {
        let before = self.members.len();
        self.members.retain(|t| *t != terminal);
        self.members.len() != before
    }

    /// Remove every member and return them.
    pub(crate) fn drain(&mut self) -> Vec<RealTerminalId> {
        std::mem::take(&mut self.members)
    }
}

/// The ordered list of colors new bridges cycle through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgePalette {
    colors: Vec<Color>,
}

impl BridgePalette {
    /// Build a palette. An empty list falls back to the default palette.
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Pick the color for a new bridge given the colors already in use.
    ///
    /// # Example
    ///
    /// ```
    /// use terminalstrip::core::bridge::BridgePalette;
    /// use terminalstrip::core::types::Color;
    ///
    /// let palette = BridgePalette::default();
    /// assert_eq!(palette.next_color([]), Color::RED);
    /// assert_eq!(palette.next_color([Color::RED]), Color::BLUE);
    /// ```
    pub fn next_color(&self, in_use: impl IntoIterator<Item = Color>) -> Color {
        let mut usage = vec![0usize; self.colors.len()];
        for color in in_use {
            if let Some(i) = self.colors.iter().position(|c| *c == color) {
                usage[i] += 1;
            }
        }

        // min_by_key keeps the first minimum, so palette order breaks ties
        usage
            .iter()
            .enumerate()
            .min_by_key(|(_, count)| **count)
            .map(|(i, _)| self.colors[i])
            .unwrap_or_default()
    }
}

impl Default for BridgePalette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::RED,
                Color::BLUE,
                Color::WHITE,
                Color::DARK_GRAY,
                Color::BLACK,
            ],
        }
    }
}
