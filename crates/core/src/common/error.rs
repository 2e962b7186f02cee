//! Fault and Load Error Definitions.
//!
//! This module defines the error handling surface of the core. It provides:
//! 1. **Faults:** Fatal conditions raised while executing one instruction.
//! 2. **Load Errors:** Failures while reading or placing a program image.
//!
//! Both are plain values surfaced to the driver; the core never aborts the
//! process itself. Undefined instructions are deliberately *not* represented
//! here: they execute as no-ops for compatibility with programs that branch
//! into sprite or font data.

use thiserror::Error;

use crate::common::constants::STACK_DEPTH;

/// Fatal conditions raised during a single execute step.
///
/// A fault leaves the machine in the state it had reached when the condition
/// was detected; the faulting instruction has already consumed its fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// A call instruction executed with the stack already at capacity.
    ///
    /// The legacy instruction set leaves this undefined; silently wrapping
    /// would corrupt unrelated return addresses, so it is treated as fatal.
    #[error("call stack overflow at pc {pc:#05x} (depth {STACK_DEPTH})")]
    StackOverflow {
        /// Program counter of the instruction after the faulting call.
        pc: u16,
    },

    /// A return instruction executed with an empty stack.
    #[error("return with empty call stack at pc {pc:#05x}")]
    StackUnderflow {
        /// Program counter of the instruction after the faulting return.
        pc: u16,
    },
}

/// Failures while loading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program source could not be opened or read.
    #[error("could not read program image: {0}")]
    Io(#[from] std::io::Error),

    /// The image does not fit between the program entry point and the end
    /// of memory. The machine is left unmodified.
    #[error("program image is {len} bytes but capacity is {max} bytes")]
    TooLarge {
        /// Size of the rejected image in bytes.
        len: usize,
        /// Maximum loadable size in bytes.
        max: usize,
    },
}
