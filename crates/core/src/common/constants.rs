//! Global Machine Constants.
//!
//! This module defines the fixed parameters of the CHIP-8 machine. It includes:
//! 1. **Address Space:** Memory size, reserved region, and program entry point.
//! 2. **Display Constants:** Framebuffer dimensions and sprite width.
//! 3. **Stack and Input Constants:** Call depth and key matrix size.
//! 4. **Instruction Constants:** Fetch width and address masking.

/// Total addressable memory in bytes (4 KB).
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to every memory address; the address space is 12 bits wide.
pub const ADDR_MASK: u16 = 0x0FFF;

/// Address where loaded programs begin and the program counter resets to.
///
/// Addresses below this are reserved; historically they held the
/// interpreter itself.
pub const PROGRAM_START: u16 = 0x200;

/// Maximum size of a loadable program image in bytes.
pub const PROGRAM_CAPACITY: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Address of the built-in hexadecimal font glyph set.
pub const FONT_START: u16 = 0x050;

/// Size of one font glyph in bytes (5 rows of 8 pixels).
pub const FONT_GLYPH_SIZE: u16 = 5;

/// Number of general-purpose registers (V0 through VF).
pub const REGISTER_COUNT: usize = 16;

/// Index of the flag register, clobbered by carry/borrow/collision updates.
pub const FLAG_REGISTER: usize = 0xF;

/// Maximum call stack depth in return addresses.
pub const STACK_DEPTH: usize = 16;

/// Framebuffer width in pixels.
pub const DISPLAY_WIDTH: usize = 64;

/// Framebuffer height in pixels.
pub const DISPLAY_HEIGHT: usize = 32;

/// Fixed sprite width in pixels; every sprite row is one byte.
pub const SPRITE_WIDTH: usize = 8;

/// Number of keys in the input matrix (symbols 0x0 through 0xF).
pub const KEY_COUNT: usize = 16;

/// Size of one instruction word in bytes.
pub const INSTRUCTION_SIZE: u16 = 2;
