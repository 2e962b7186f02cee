//! Memory-indexed instruction tests.
//!
//! The `I` register, font addressing, BCD conversion, the register block
//! copies, and the timer load/store instructions.

use chip8_core::common::constants::{FONT_GLYPH_SIZE, FONT_START};
use rstest::rstest;

use crate::common::{machine_with, step_n};

#[test]
fn load_and_extend_the_index_register() {
    let mut machine = machine_with(&[0xA2C5, 0xF11E]);
    machine.v[1] = 0x10;
    step_n(&mut machine, 2);
    assert_eq!(machine.i, 0x2D5);
}

#[rstest]
#[case(0x0, 0)]
#[case(0x9, 9)]
#[case(0xF, 15)]
#[case(0x2A, 10)] // only the low nibble names a glyph
fn font_address_points_at_the_glyph(#[case] value: u8, #[case] digit: u16) {
    let mut machine = machine_with(&[0xF129]);
    machine.v[1] = value;
    step_n(&mut machine, 1);
    assert_eq!(machine.i, FONT_START + digit * FONT_GLYPH_SIZE);
}

#[test]
fn font_glyphs_are_resident_and_drawable() {
    // Glyph for 0 is the 5-row box sprite.
    let mut machine = machine_with(&[0xF029]);
    machine.v[0] = 0;
    step_n(&mut machine, 1);
    let start = machine.i as usize;
    assert_eq!(&machine.memory[start..start + 5], &[0xF0, 0x90, 0x90, 0x90, 0xF0]);
}

#[rstest]
#[case(254, [2, 5, 4])]
#[case(0, [0, 0, 0])]
#[case(7, [0, 0, 7])]
#[case(42, [0, 4, 2])]
#[case(255, [2, 5, 5])]
fn bcd_stores_hundreds_tens_ones(#[case] value: u8, #[case] digits: [u8; 3]) {
    let mut machine = machine_with(&[0xF133]);
    machine.v[1] = value;
    machine.i = 0x400;
    step_n(&mut machine, 1);
    assert_eq!(machine.memory[0x400..0x403], digits);
}

#[test]
fn store_registers_is_inclusive_and_leaves_i_alone() {
    let mut machine = machine_with(&[0xF355]);
    machine.v[..4].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    machine.v[4] = 0x99; // above x: must not be stored
    machine.i = 0x400;
    step_n(&mut machine, 1);
    assert_eq!(machine.memory[0x400..0x404], [0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(machine.memory[0x404], 0);
    assert_eq!(machine.i, 0x400);
}

#[test]
fn load_registers_is_inclusive() {
    let mut machine = machine_with(&[0xF265]);
    machine.i = 0x400;
    machine.memory[0x400..0x403].copy_from_slice(&[1, 2, 3]);
    machine.v[3] = 0x77; // above x: must survive
    step_n(&mut machine, 1);
    assert_eq!(machine.v[..4], [1, 2, 3, 0x77]);
}

#[test]
fn timer_loads_and_stores() {
    // V1 -> delay, V2 -> sound, then delay -> V3.
    let mut machine = machine_with(&[0xF115, 0xF218, 0xF307]);
    machine.v[1] = 42;
    machine.v[2] = 17;
    step_n(&mut machine, 3);
    assert_eq!(machine.delay_timer, 42);
    assert_eq!(machine.sound_timer, 17);
    assert_eq!(machine.v[3], 42, "delay timer read back before any decay");
}
