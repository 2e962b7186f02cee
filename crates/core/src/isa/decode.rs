//! Instruction decoding.
//!
//! This module turns a fetched 16-bit word into a decoded instruction value.
//! It provides:
//! 1. **`Instr`:** One enum variant per defined operation of the instruction set.
//! 2. **`decode`:** A total function; words outside the defined encodings
//!    decode to [`Instr::Invalid`] rather than failing.
//!
//! Decoding once into an enum keeps execution a single exhaustive match and
//! makes each operation testable in isolation.

use super::opcode::OpcodeBits;

/// A decoded instruction.
///
/// Register indices are pre-extracted as `usize` so execute can index the
/// register file directly. Variant names follow the conventional mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    /// `00E0` — clear the framebuffer.
    Cls,
    /// `00EE` — return from the current call.
    Ret,
    /// `1nnn` — unconditional jump.
    Jp {
        /// Jump target address.
        addr: u16,
    },
    /// `2nnn` — call: push the return address, then jump.
    Call {
        /// Call target address.
        addr: u16,
    },
    /// `3xkk` — skip the next instruction if `V[x] == kk`.
    SeImm {
        /// Register index.
        x: usize,
        /// Comparison immediate.
        kk: u8,
    },
    /// `4xkk` — skip the next instruction if `V[x] != kk`.
    SneImm {
        /// Register index.
        x: usize,
        /// Comparison immediate.
        kk: u8,
    },
    /// `5xy0` — skip the next instruction if `V[x] == V[y]`.
    SeReg {
        /// First register index.
        x: usize,
        /// Second register index.
        y: usize,
    },
    /// `6xkk` — load an immediate into `V[x]`.
    LdImm {
        /// Destination register index.
        x: usize,
        /// Immediate value.
        kk: u8,
    },
    /// `7xkk` — add an immediate to `V[x]`, wrapping, flag untouched.
    AddImm {
        /// Destination register index.
        x: usize,
        /// Immediate addend.
        kk: u8,
    },
    /// `8xy0` — copy `V[y]` into `V[x]`.
    LdReg {
        /// Destination register index.
        x: usize,
        /// Source register index.
        y: usize,
    },
    /// `8xy1` — bitwise OR of `V[y]` into `V[x]`.
    Or {
        /// Destination register index.
        x: usize,
        /// Source register index.
        y: usize,
    },
    /// `8xy2` — bitwise AND of `V[y]` into `V[x]`.
    And {
        /// Destination register index.
        x: usize,
        /// Source register index.
        y: usize,
    },
    /// `8xy3` — bitwise XOR of `V[y]` into `V[x]`.
    Xor {
        /// Destination register index.
        x: usize,
        /// Source register index.
        y: usize,
    },
    /// `8xy4` — widening add; `V[0xF]` becomes the carry.
    AddReg {
        /// Destination register index.
        x: usize,
        /// Source register index.
        y: usize,
    },
    /// `8xy5` — `V[x] -= V[y]`; `V[0xF]` is 1 when no borrow occurred.
    Sub {
        /// Destination register index.
        x: usize,
        /// Subtrahend register index.
        y: usize,
    },
    /// `8xy6` — shift `V[x]` right by one; `V[0xF]` takes the shifted-out bit.
    Shr {
        /// Register index, shifted in place.
        x: usize,
    },
    /// `8xy7` — `V[x] = V[y] - V[x]`; `V[0xF]` is 1 when no borrow occurred.
    Subn {
        /// Destination register index.
        x: usize,
        /// Minuend register index.
        y: usize,
    },
    /// `8xyE` — shift `V[x]` left by one; `V[0xF]` takes the shifted-out bit.
    Shl {
        /// Register index, shifted in place.
        x: usize,
    },
    /// `9xy0` — skip the next instruction if `V[x] != V[y]`.
    SneReg {
        /// First register index.
        x: usize,
        /// Second register index.
        y: usize,
    },
    /// `Annn` — load an address into the `I` register.
    LdI {
        /// Address immediate.
        addr: u16,
    },
    /// `Bnnn` — jump to `nnn + V[0]`.
    JpV0 {
        /// Base jump address.
        addr: u16,
    },
    /// `Cxkk` — `V[x] = random byte AND kk`.
    Rnd {
        /// Destination register index.
        x: usize,
        /// Mask applied to the random byte.
        kk: u8,
    },
    /// `Dxyn` — XOR-blit an 8×n sprite at `(V[x], V[y])` with wraparound.
    Drw {
        /// Register holding the origin column.
        x: usize,
        /// Register holding the origin row.
        y: usize,
        /// Sprite height in rows.
        n: u8,
    },
    /// `Ex9E` — skip the next instruction if key `V[x]` is pressed.
    Skp {
        /// Register holding the key symbol.
        x: usize,
    },
    /// `ExA1` — skip the next instruction if key `V[x]` is not pressed.
    Sknp {
        /// Register holding the key symbol.
        x: usize,
    },
    /// `Fx07` — read the delay timer into `V[x]`.
    LdDelay {
        /// Destination register index.
        x: usize,
    },
    /// `Fx0A` — busy-wait for a key press; rewinds `pc` until one arrives.
    WaitKey {
        /// Destination register for the key symbol.
        x: usize,
    },
    /// `Fx15` — load `V[x]` into the delay timer.
    SetDelay {
        /// Source register index.
        x: usize,
    },
    /// `Fx18` — load `V[x]` into the sound timer.
    SetSound {
        /// Source register index.
        x: usize,
    },
    /// `Fx1E` — add `V[x]` to the `I` register.
    AddI {
        /// Source register index.
        x: usize,
    },
    /// `Fx29` — point `I` at the font glyph for the low nibble of `V[x]`.
    FontAddr {
        /// Register holding the glyph digit.
        x: usize,
    },
    /// `Fx33` — store the decimal digits of `V[x]` at `I`, `I+1`, `I+2`.
    Bcd {
        /// Source register index.
        x: usize,
    },
    /// `Fx55` — store `V[0]..=V[x]` to memory starting at `I`.
    StoreRegs {
        /// Highest register index stored.
        x: usize,
    },
    /// `Fx65` — load `V[0]..=V[x]` from memory starting at `I`.
    LoadRegs {
        /// Highest register index loaded.
        x: usize,
    },
    /// Any encoding outside the defined set; executes as a no-op.
    ///
    /// Legacy programs occasionally branch into sprite or font data, so
    /// tolerating these silently is the compatible choice.
    Invalid(u16),
}

/// Decodes one instruction word.
///
/// Total over all 65536 words: anything that is not a defined encoding
/// yields [`Instr::Invalid`].
#[must_use]
pub fn decode(word: u16) -> Instr {
    let (x, y) = (word.x(), word.y());
    match word.op() {
        0x0 => match word.kk() {
            0xE0 => Instr::Cls,
            0xEE => Instr::Ret,
            // 0nnn machine-code call on the original hardware; unsupported.
            _ => Instr::Invalid(word),
        },
        0x1 => Instr::Jp { addr: word.nnn() },
        0x2 => Instr::Call { addr: word.nnn() },
        0x3 => Instr::SeImm { x, kk: word.kk() },
        0x4 => Instr::SneImm { x, kk: word.kk() },
        0x5 => Instr::SeReg { x, y },
        0x6 => Instr::LdImm { x, kk: word.kk() },
        0x7 => Instr::AddImm { x, kk: word.kk() },
        0x8 => match word.n() {
            0x0 => Instr::LdReg { x, y },
            0x1 => Instr::Or { x, y },
            0x2 => Instr::And { x, y },
            0x3 => Instr::Xor { x, y },
            0x4 => Instr::AddReg { x, y },
            0x5 => Instr::Sub { x, y },
            0x6 => Instr::Shr { x },
            0x7 => Instr::Subn { x, y },
            0xE => Instr::Shl { x },
            _ => Instr::Invalid(word),
        },
        0x9 => Instr::SneReg { x, y },
        0xA => Instr::LdI { addr: word.nnn() },
        0xB => Instr::JpV0 { addr: word.nnn() },
        0xC => Instr::Rnd { x, kk: word.kk() },
        0xD => Instr::Drw { x, y, n: word.n() },
        0xE => match word.kk() {
            0x9E => Instr::Skp { x },
            0xA1 => Instr::Sknp { x },
            _ => Instr::Invalid(word),
        },
        0xF => match word.kk() {
            0x07 => Instr::LdDelay { x },
            0x0A => Instr::WaitKey { x },
            0x15 => Instr::SetDelay { x },
            0x18 => Instr::SetSound { x },
            0x1E => Instr::AddI { x },
            0x29 => Instr::FontAddr { x },
            0x33 => Instr::Bcd { x },
            0x55 => Instr::StoreRegs { x },
            0x65 => Instr::LoadRegs { x },
            _ => Instr::Invalid(word),
        },
        _ => Instr::Invalid(word),
    }
}
