//! Instruction set: field extraction and decoding.
//!
//! The instruction set is fixed: 35 operations over 16-bit big-endian words.
//! This module provides:
//! 1. **Field Extraction:** The [`OpcodeBits`](opcode::OpcodeBits) trait over `u16`.
//! 2. **Decoding:** The exhaustive [`Instr`](decode::Instr) enum and [`decode`](decode::decode).

/// Instruction decoding into the `Instr` enum.
pub mod decode;

/// Instruction word field extraction.
pub mod opcode;

pub use decode::{decode, Instr};
pub use opcode::OpcodeBits;
