//! Program image loading.
//!
//! This module provides the file-to-machine path for program images:
//! 1. **Reading:** Pull the raw bytes of a ROM file into a buffer.
//! 2. **Placement:** Copy the buffer into machine memory at the entry point.
//!
//! Images are headerless big-endian instruction streams; nothing about them
//! is validated here beyond the size check in [`Machine::load`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::LoadError;
use crate::machine::Machine;

/// Reads a program image from disk.
///
/// An empty file yields an empty buffer, which is a valid (if useless)
/// program; only a failed read is an error.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened or read.
pub fn load_rom<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let bytes = fs::read(path.as_ref())?;
    debug!(path = %path.as_ref().display(), bytes = bytes.len(), "read program image");
    Ok(bytes)
}

/// Reads a program image and places it into a machine in one step.
///
/// # Errors
///
/// Returns [`LoadError::Io`] on a failed read and [`LoadError::TooLarge`]
/// when the image exceeds memory capacity; in the latter case the machine
/// is left unmodified.
pub fn load_rom_into<P: AsRef<Path>>(path: P, machine: &mut Machine) -> Result<(), LoadError> {
    let image = load_rom(path)?;
    machine.load(&image)
}
