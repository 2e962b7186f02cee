//! Program loading and the per-tick driver.

/// Per-tick driver over the machine.
pub mod driver;

/// Program image loading.
pub mod loader;

pub use driver::{Driver, TickOutput};
