//! Program-loading and decode-layer boundary behaviors.

mod common;

use common::Asm;
use shellvm::consts::PROGRAM_MAX;
use shellvm::io::{MemorySink, MemorySource};
use shellvm::{Interpreter, VmStatus};

type Vm = Interpreter<MemorySink, MemorySource>;

#[test]
fn program_of_exactly_max_size_loads() {
    let mut bytes = vec![0u8; PROGRAM_MAX - 4];
    bytes.extend_from_slice(&[0x01, 0, 0, 0]); // HALT, padding out to PROGRAM_MAX
    assert_eq!(bytes.len(), PROGRAM_MAX);

    let mut vm: Vm = Interpreter::new();
    assert!(vm.load_program(&bytes).is_ok());
}

#[test]
fn program_one_byte_over_max_is_rejected() {
    let bytes = vec![0u8; PROGRAM_MAX + 1];
    let mut vm: Vm = Interpreter::new();
    assert_eq!(vm.load_program(&bytes), Err(VmStatus::ProgramTooLarge));
}

#[test]
fn reserved_opcode_is_rejected_before_dispatch() {
    let mut asm = Asm::new();
    asm.raw(0xA9, 0, 0);
    let mut vm: Vm = Interpreter::new();
    vm.load_program(&asm.finish()).unwrap();
    assert_eq!(vm.step(), VmStatus::InvalidOpcode);
}

#[test]
fn payload_len_over_three_is_invalid_instruction() {
    let mut asm = Asm::new();
    asm.raw(0x30, 0, 4);
    let mut vm: Vm = Interpreter::new();
    vm.load_program(&asm.finish()).unwrap();
    assert_eq!(vm.step(), VmStatus::InvalidInstruction);
}

#[test]
fn reset_reverts_slots_flags_and_pc_but_keeps_the_program() {
    let mut asm = Asm::new();
    asm.load_i_i32(0, 1).halt();
    let bytes = asm.finish();

    let mut vm: Vm = Interpreter::new();
    vm.load_program(&bytes).unwrap();
    vm.run().unwrap();
    assert_eq!(vm.current_frame().stack_var(0).as_i32(), Some(1));

    vm.reset();
    assert_eq!(vm.pc(), 0);
    assert_eq!(vm.sp(), 0);
    assert!(vm.current_frame().stack_var(0).is_void());
    assert_eq!(vm.program_len(), bytes.len() as u32);
}
