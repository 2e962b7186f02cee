//! Instruction word field extraction.
//!
//! Provides bit extraction for the standard CHIP-8 instruction fields from
//! a 16-bit big-endian instruction word.

/// Bit mask for the register index fields (one nibble).
pub const REG_MASK: u16 = 0xF;
/// Bit mask for the 4-bit immediate / sprite height field.
pub const NIBBLE_MASK: u16 = 0xF;
/// Bit mask for the 8-bit immediate field.
pub const BYTE_MASK: u16 = 0xFF;
/// Bit mask for the 12-bit address field.
pub const ADDR_FIELD_MASK: u16 = 0xFFF;

/// Trait for extracting instruction fields from an encoded word.
///
/// Field names follow the conventional CHIP-8 notation: an instruction
/// `oxyn` has operation class `o`, register indices `x` and `y`, and the
/// immediates `n` (low nibble), `kk` (low byte), and `nnn` (low 12 bits).
pub trait OpcodeBits {
    /// Extracts the 4-bit operation class (top nibble).
    fn op(&self) -> u8;

    /// Extracts the first register index (second nibble).
    fn x(&self) -> usize;

    /// Extracts the second register index (third nibble).
    fn y(&self) -> usize;

    /// Extracts the 4-bit immediate (fourth nibble).
    fn n(&self) -> u8;

    /// Extracts the 8-bit immediate (low byte).
    fn kk(&self) -> u8;

    /// Extracts the 12-bit address immediate (low three nibbles).
    fn nnn(&self) -> u16;
}

impl OpcodeBits for u16 {
    #[inline(always)]
    fn op(&self) -> u8 {
        (self >> 12) as u8
    }

    #[inline(always)]
    fn x(&self) -> usize {
        ((self >> 8) & REG_MASK) as usize
    }

    #[inline(always)]
    fn y(&self) -> usize {
        ((self >> 4) & REG_MASK) as usize
    }

    #[inline(always)]
    fn n(&self) -> u8 {
        (self & NIBBLE_MASK) as u8
    }

    #[inline(always)]
    fn kk(&self) -> u8 {
        (self & BYTE_MASK) as u8
    }

    #[inline(always)]
    fn nnn(&self) -> u16 {
        self & ADDR_FIELD_MASK
    }
}
