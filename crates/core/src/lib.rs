//! CHIP-8 virtual machine core library.
//!
//! This crate implements the fetch-decode-execute engine for the classic
//! 8-bit CHIP-8 instruction set, with the following:
//! 1. **Machine:** The complete mutable state (4 KB memory, 16 registers,
//!    call stack, timers, 64×32 framebuffer, 16-key matrix).
//! 2. **ISA:** Field extraction and total decoding of all 35 operations.
//! 3. **Execution:** Bit-exact single-instruction stepping with typed faults.
//! 4. **Simulation:** Program loader, configuration, and the per-tick driver.
//!
//! Rendering, audio output, and keyboard mapping are external collaborators:
//! the core only exposes a framebuffer snapshot, a sound edge, and a
//! `set_key` mutator.

/// Common constants and error types.
pub mod common;
/// Driver configuration (defaults, JSON-deserializable structure).
pub mod config;
/// Instruction set (field extraction, decoding).
pub mod isa;
/// Machine state, font data, and instruction execution.
pub mod machine;
/// Program loader and per-tick driver.
pub mod sim;

/// Fault and load error types; surfaced as values, never process aborts.
pub use crate::common::{Fault, LoadError};
/// Driver configuration; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main machine state type; construct with `Machine::new`.
pub use crate::machine::Machine;
/// Per-tick driver; owns the machine and the instruction budget.
pub use crate::sim::{Driver, TickOutput};
