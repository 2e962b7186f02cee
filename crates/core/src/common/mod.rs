//! Common types and constants shared across the machine core.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Constants:** Fixed machine parameters (memory, display, stack, keys).
//! 2. **Error Handling:** Fault and load error definitions.

/// Fixed machine parameters.
pub mod constants;

/// Fault and load error types.
pub mod error;

pub use error::{Fault, LoadError};
