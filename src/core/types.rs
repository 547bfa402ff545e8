//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`StripId`] - Identity of a terminal strip
//! - [`RealTerminalId`] - Identity of a real terminal (one electrical contact)
//! - [`PhysicalTerminalId`] - Identity of a physical terminal (one slot in the strip)
//! - [`BridgeId`] - Identity of a bridge (jumper)
//! - [`ElementId`] - Identity of the diagram element backing a real terminal
//! - [`Color`] - RGB color of a bridge
//! - [`TerminalType`] / [`TerminalFunction`] - Electrical classification
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use terminalstrip::core::types::{Color, RealTerminalId};
//!
//! let id = RealTerminalId::parse("{67e55044-10b1-426f-9247-bb680e5fe0c8}").unwrap();
//! assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
//!
//! assert_eq!(Color::parse("#FF0000").unwrap(), Color::RED);
//! assert!(Color::parse("red").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid uuid: {0}")]
    InvalidUuid(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("unknown terminal type: {0}")]
    InvalidTerminalType(String),

    #[error("unknown terminal function: {0}")]
    InvalidTerminalFunction(String),
}

/// Declares a copyable identifier backed by a UUID.
///
/// Identifiers print in hyphenated form and parse the hyphenated, simple,
/// braced and URN forms accepted by [`Uuid::parse_str`].
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(Uuid);

        impl $name {
            /// Create a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse an identifier from its textual form.
            ///
            /// # Errors
            ///
            /// Returns `TypeError::InvalidUuid` if `s` is not a UUID.
            pub fn parse(s: &str) -> Result<Self, TypeError> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| TypeError::InvalidUuid(format!("'{s}': {e}")))
            }

            /// Get the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = TypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse(&s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }
    };
}

uuid_id!(
    /// Identity of a terminal strip.
    StripId
);

uuid_id!(
    /// Identity of a real terminal, stable across serialization.
    RealTerminalId
);

uuid_id!(
    /// Identity of a physical terminal.
    PhysicalTerminalId
);

uuid_id!(
    /// Identity of a bridge between real terminals.
    BridgeId
);

uuid_id!(
    /// Identity of a diagram element owned by the diagram layer.
    ///
    /// The strip never holds the element itself, only this identity. Whether
    /// the element still exists is asked through
    /// [`ElementRegistry`](crate::core::element::ElementRegistry).
    ElementId
);

/// An opaque RGB color, stored as `#rrggbb`.
///
/// # Example
///
/// ```
/// use terminalstrip::core::types::Color;
///
/// let c = Color::parse("#0000ff").unwrap();
/// assert_eq!(c, Color::BLUE);
/// assert_eq!(c.to_string(), "#0000ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const DARK_GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Build a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string (case insensitive).
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidColor` for anything else.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| TypeError::InvalidColor(format!("'{s}' must start with '#'")))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidColor(format!(
                "'{s}' must be 6 hexadecimal digits"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| TypeError::InvalidColor(format!("'{s}': {e}")))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::DARK_GRAY
    }
}

impl FromStr for Color {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Physical kind of a terminal block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalType {
    #[default]
    Generic,
    Fuse,
    Sectional,
    Diode,
    Ground,
}

impl TerminalType {
    /// Name used in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalType::Generic => "generic",
            TerminalType::Fuse => "fuse",
            TerminalType::Sectional => "sectional",
            TerminalType::Diode => "diode",
            TerminalType::Ground => "ground",
        }
    }
}

impl FromStr for TerminalType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(TerminalType::Generic),
            "fuse" => Ok(TerminalType::Fuse),
            "sectional" => Ok(TerminalType::Sectional),
            "diode" => Ok(TerminalType::Diode),
            "ground" => Ok(TerminalType::Ground),
            other => Err(TypeError::InvalidTerminalType(other.to_string())),
        }
    }
}

impl fmt::Display for TerminalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Electrical function of a terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalFunction {
    #[default]
    Generic,
    Phase,
    Neutral,
    /// Protective earth.
    Pe,
}

impl TerminalFunction {
    /// Name used in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalFunction::Generic => "generic",
            TerminalFunction::Phase => "phase",
            TerminalFunction::Neutral => "neutral",
            TerminalFunction::Pe => "pe",
        }
    }
}

impl FromStr for TerminalFunction {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(TerminalFunction::Generic),
            "phase" => Ok(TerminalFunction::Phase),
            "neutral" => Ok(TerminalFunction::Neutral),
            "pe" => Ok(TerminalFunction::Pe),
            other => Err(TypeError::InvalidTerminalFunction(other.to_string())),
        }
    }
}

impl fmt::Display for TerminalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
