//! terminalstrip - terminal strip modelling for electrical diagrams
//!
//! A terminal strip is a rail of physical terminal blocks. Each block stacks
//! one or more real terminals (levels), real terminals may be tied together
//! by bridges, and the whole strip round-trips through an XML document.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, the strip aggregate, verification, persistence
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`ui`] - Output formatting
//!
//! # Correctness Invariants
//!
//! 1. Every real terminal sits on exactly one physical terminal
//! 2. No physical terminal is empty and levels are contiguous from zero
//! 3. A real terminal is in at most one bridge; bridges have two or more members
//! 4. A rejected operation leaves the strip unchanged and notifies nobody

pub mod cli;
pub mod core;
pub mod ui;
