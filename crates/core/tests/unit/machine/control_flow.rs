//! Control flow tests.
//!
//! Jumps, calls and returns, conditional skips, and the typed faults the
//! call stack raises instead of silently wrapping.

use chip8_core::common::constants::{PROGRAM_START, STACK_DEPTH};
use chip8_core::Fault;
use rstest::rstest;

use crate::common::{machine_with, step_n, word_addr};

#[test]
fn jump_replaces_the_default_advance() {
    let mut machine = machine_with(&[0x1A5F]);
    step_n(&mut machine, 1);
    assert_eq!(machine.pc, 0x0A5F);
}

#[test]
fn jump_indexed_adds_v0() {
    let mut machine = machine_with(&[0xB300]);
    machine.v[0] = 0x21;
    step_n(&mut machine, 1);
    assert_eq!(machine.pc, 0x0321);
}

#[test]
fn call_then_return_round_trip() {
    // 0x200: CALL 0x204; 0x202: (never reached this pass); 0x204: RET
    let mut machine = machine_with(&[0x2204, 0x0000, 0x00EE]);
    step_n(&mut machine, 1);
    assert_eq!(machine.pc, 0x204);
    assert_eq!(machine.sp, 1);
    assert_eq!(machine.stack[0], word_addr(1));

    step_n(&mut machine, 1);
    assert_eq!(machine.pc, word_addr(1), "RET lands just after the CALL");
    assert_eq!(machine.sp, 0);
}

#[test]
fn call_at_capacity_faults_instead_of_wrapping() {
    // CALL to self: every step pushes one frame.
    let mut machine = machine_with(&[0x2200]);
    step_n(&mut machine, STACK_DEPTH);
    assert_eq!(machine.sp, STACK_DEPTH);

    let fault = machine.step().unwrap_err();
    assert_eq!(fault, Fault::StackOverflow { pc: word_addr(1) });
    assert_eq!(machine.sp, STACK_DEPTH, "faulting call pushed nothing");
}

#[test]
fn return_on_empty_stack_faults() {
    let mut machine = machine_with(&[0x00EE]);
    let fault = machine.step().unwrap_err();
    assert_eq!(fault, Fault::StackUnderflow { pc: word_addr(1) });
}

#[rstest]
#[case(0x3142, 0x42, true)] // SE: equal, taken
#[case(0x3142, 0x41, false)]
#[case(0x4142, 0x41, true)] // SNE: unequal, taken
#[case(0x4142, 0x42, false)]
fn immediate_skips(#[case] word: u16, #[case] v1: u8, #[case] taken: bool) {
    let mut machine = machine_with(&[word]);
    machine.v[1] = v1;
    step_n(&mut machine, 1);
    let expected = if taken { word_addr(2) } else { word_addr(1) };
    assert_eq!(machine.pc, expected);
}

#[rstest]
#[case(0x5120, 0x42, 0x42, true)]
#[case(0x5120, 0x42, 0x43, false)]
#[case(0x9120, 0x42, 0x43, true)]
#[case(0x9120, 0x42, 0x42, false)]
fn register_skips(#[case] word: u16, #[case] v1: u8, #[case] v2: u8, #[case] taken: bool) {
    let mut machine = machine_with(&[word]);
    machine.v[1] = v1;
    machine.v[2] = v2;
    step_n(&mut machine, 1);
    let expected = if taken { word_addr(2) } else { word_addr(1) };
    assert_eq!(machine.pc, expected);
}

#[test]
fn undefined_instruction_is_a_no_op_that_advances() {
    let mut machine = machine_with(&[0xF1FF]);
    let before = machine.v;
    let redraw = machine.step().expect("no-op, not a fault");
    assert!(!redraw);
    assert_eq!(machine.pc, word_addr(1));
    assert_eq!(machine.v, before);
    assert_eq!(machine.opcode, 0xF1FF, "opcode latch still records the word");
}

#[test]
fn clear_and_jump_to_self_is_stable() {
    // CLS; JP 0x200 — the classic smallest idle loop.
    let mut machine = machine_with(&[0x00E0, 0x1200]);
    for _ in 0..50 {
        step_n(&mut machine, 2);
        assert_eq!(machine.pc, PROGRAM_START);
        assert_eq!(machine.sp, 0);
        assert!(machine.framebuffer().iter().all(|&cell| cell == 0));
    }
}
