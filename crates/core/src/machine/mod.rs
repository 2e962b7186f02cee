//! Machine State Definition and Initialization.
//!
//! This module defines the central `Machine` structure holding all mutable
//! interpreter state. It coordinates the following:
//! 1. **State Management:** Memory, registers, call stack, and timers.
//! 2. **Display State:** The monochrome framebuffer and the redraw signal.
//! 3. **Input State:** The 16-key matrix written by an external source.
//! 4. **Program Loading:** Placing a program image at the entry point.
//!
//! The machine is a plain value: constructed once, passed explicitly to every
//! entry point, and mutated by exactly one logical thread of control.

/// Built-in hexadecimal font glyphs.
pub mod font;

/// Fetch-decode-execute stepping.
pub mod execution;

use std::fmt;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use crate::common::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_START, KEY_COUNT, MEMORY_SIZE, PROGRAM_CAPACITY,
    PROGRAM_START, REGISTER_COUNT, STACK_DEPTH,
};
use crate::common::LoadError;
use crate::machine::font::FONT_SET;

/// Complete interpreter state.
///
/// Fields are public in the manner of hardware state: the driver and tests
/// read and poke them directly, and every invariant is re-established by the
/// instruction that owns it.
pub struct Machine {
    /// 4 KB byte-addressable memory. The low 0x200 bytes are reserved;
    /// the font glyphs live at 0x050–0x09F.
    pub memory: [u8; MEMORY_SIZE],
    /// General-purpose registers V0–VF. VF doubles as the
    /// carry/borrow/collision flag and is clobbered by the instructions
    /// that define it.
    pub v: [u8; REGISTER_COUNT],
    /// Address register used by the memory-indexed instructions.
    pub i: u16,
    /// Program counter; reset value is the program entry point.
    pub pc: u16,
    /// Return address stack.
    pub stack: [u16; STACK_DEPTH],
    /// Stack pointer: count of live return addresses, top at `sp - 1`.
    pub sp: usize,
    /// Delay timer; decays once per driver tick, floored at zero.
    pub delay_timer: u8,
    /// Sound timer; decays once per driver tick and signals the audio edge
    /// while nonzero.
    pub sound_timer: u8,
    /// Framebuffer, row-major, one byte per pixel, each cell 0 or 1.
    pub gfx: [u8; DISPLAY_WIDTH * DISPLAY_HEIGHT],
    /// Key matrix, one entry per key symbol 0x0–0xF.
    pub key: [bool; KEY_COUNT],
    /// Most recently fetched instruction word, kept for diagnostics.
    pub opcode: u16,
    /// Set when the just-executed instruction changed the framebuffer;
    /// cleared at the start of every step.
    pub redraw: bool,
    /// Random number generator backing the random-byte instruction.
    pub rng: SmallRng,
}

impl Machine {
    /// Creates a machine in its reset state.
    ///
    /// All arrays are zeroed, the font glyph set is written into reserved
    /// memory, and the program counter points at the entry point. The RNG
    /// is seeded from system entropy. No error paths.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Creates a machine with a deterministic RNG seed.
    ///
    /// The random-byte instruction becomes reproducible, which tests rely
    /// on; everything else matches [`Machine::new`].
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[FONT_START as usize..FONT_START as usize + FONT_SET.len()].copy_from_slice(&FONT_SET);
        Self {
            memory,
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            stack: [0; STACK_DEPTH],
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            gfx: [0; DISPLAY_WIDTH * DISPLAY_HEIGHT],
            key: [false; KEY_COUNT],
            opcode: 0,
            redraw: false,
            rng,
        }
    }

    /// Copies a program image into memory at the entry point.
    ///
    /// An image larger than the remaining address space is rejected before
    /// any byte is written, so a failed load leaves the machine unmodified.
    /// An empty image is valid and loads nothing. The bytes are not
    /// validated as instructions; malformed programs are a runtime concern.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image exceeds the capacity
    /// between the entry point and the end of memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > PROGRAM_CAPACITY {
            return Err(LoadError::TooLarge {
                len: image.len(),
                max: PROGRAM_CAPACITY,
            });
        }
        let start = PROGRAM_START as usize;
        self.memory[start..start + image.len()].copy_from_slice(image);
        debug!(bytes = image.len(), "program image loaded");
        Ok(())
    }

    /// Records a press or release of one key symbol.
    ///
    /// Symbols above 0xF are masked to the low nibble; the matrix has
    /// exactly sixteen keys.
    pub fn set_key(&mut self, symbol: u8, pressed: bool) {
        self.key[usize::from(symbol & 0xF)] = pressed;
    }

    /// Returns the framebuffer as a row-major slice of 0/1 cells.
    ///
    /// The slice is a snapshot view: it is only valid until the next step
    /// mutates the display, so an asynchronous renderer must copy it out.
    #[must_use]
    pub fn framebuffer(&self) -> &[u8] {
        &self.gfx
    }

    /// Checks and clears the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Decays both timers by one, flooring at zero.
    ///
    /// Called by the driver once per tick, independently of how many
    /// instructions ran. Returns `true` while the sound timer was nonzero:
    /// the edge an external audio sink beeps on.
    pub fn tick_timers(&mut self) -> bool {
        if self.delay_timer > 0 {
            self.delay_timer -= 1;
        }
        if self.sound_timer > 0 {
            self.sound_timer -= 1;
            return true;
        }
        false
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("pc", &format_args!("{:#05x}", self.pc))
            .field("i", &format_args!("{:#05x}", self.i))
            .field("sp", &self.sp)
            .field("opcode", &format_args!("{:#06x}", self.opcode))
            .field("v", &self.v)
            .field("delay_timer", &self.delay_timer)
            .field("sound_timer", &self.sound_timer)
            .field("redraw", &self.redraw)
            .finish_non_exhaustive()
    }
}
