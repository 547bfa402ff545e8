//! core
//!
//! Terminal strip domain: identifiers, entities, the strip aggregate and
//! its persistence.
//!
//! # Modules
//!
//! - [`types`] - Strong types: identifiers, colors, terminal kinds
//! - [`element`] - The diagram-side view of a terminal
//! - [`real_terminal`] - One electrical terminal (one level)
//! - [`physical_terminal`] - A physical block stacking real terminals
//! - [`bridge`] - Bridges and the bridge color palette
//! - [`events`] - Change notifications
//! - [`strip`] - The terminal strip aggregate and its operations
//! - [`verify`] - Fast verification of strip invariants
//! - [`xml`] - Reading and writing strip documents
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - The strip owns every entity; references between them are ids
//! - All verification is deterministic

pub mod bridge;
pub mod config;
pub mod element;
pub mod events;
pub mod physical_terminal;
pub mod real_terminal;
pub mod strip;
pub mod types;
pub mod verify;
pub mod xml;
