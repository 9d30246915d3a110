//! Conditional branch, CALL/RET, and frame-stack boundary scenarios.

mod common;

use common::Asm;
use shellvm::io::{MemorySink, MemorySource};
use shellvm::{Interpreter, VmStatus};

type Vm = Interpreter<MemorySink, MemorySource>;

fn run(program: Vec<u8>) -> (VmStatus, Vm) {
    let mut vm: Vm = Interpreter::new();
    vm.load_program(&program).expect("program should load");
    let status = match vm.run() {
        Ok(()) => VmStatus::Ok,
        Err(status) => status,
    };
    (status, vm)
}

#[test]
fn conditional_branch_takes_the_lesser_value() {
    let mut asm = Asm::new();
    asm.load_i_i32(0, 5).load_i_i32(1, 3).cmp_i32(0, 1);
    // CMP sets L (5 < 3 is false; 3 < 5 is true via a, b = s0, s1 compares s0<s1)
    let jlt_site = asm.offset();
    asm.jlt(0); // patched below
    asm.print_i32(0);
    let jmp_site = asm.offset();
    asm.jmp(0); // patched below
    let l1 = asm.offset();
    asm.print_i32(1);
    let end = asm.offset();
    asm.println().halt();

    let mut bytes = asm.finish();
    patch_u32(&mut bytes, jlt_site + 4, l1);
    patch_u32(&mut bytes, jmp_site + 4, end);

    let (status, vm) = run(bytes);
    assert_eq!(status, VmStatus::Ok);
    // s0=5, s1=3: CMP_I32 s0,s1 sets L since 5<3 is false, G since 5>3 true; JLT not taken.
    assert_eq!(vm.output().as_str(), "5\n");
}

fn patch_u32(bytes: &mut [u8], at: u32, value: u32) {
    let at = at as usize;
    bytes[at..at + 4].copy_from_slice(&value.to_ne_bytes());
}

#[test]
fn function_call_adds_two_stack_vars() {
    let mut asm = Asm::new();
    // Caller, frame 0:
    asm.load_i_i32(0, 5)
        .load_i_i32(1, 3)
        .store_s(0, 1, 0)
        .store_s(1, 1, 1);
    let call_site = asm.offset();
    asm.call(0); // patched to point at callee below
    asm.load_ret(0, 1).print_i32(0).println().halt();

    let callee = asm.offset();
    asm.add_i32(2, 0, 1).store_ret(2, 1).ret();

    let mut bytes = asm.finish();
    patch_u32(&mut bytes, call_site + 4, callee);

    let mut vm: Vm = Interpreter::new();
    vm.load_program(&bytes).unwrap();
    let status = match vm.run() {
        Ok(()) => VmStatus::Ok,
        Err(status) => status,
    };
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "8\n");
}

#[test]
fn ret_at_sp_zero_is_stack_underflow() {
    let mut asm = Asm::new();
    asm.ret();
    let (status, _vm) = run(asm.finish());
    assert_eq!(status, VmStatus::StackUnderflow);
}

#[test]
fn call_stack_overflows_at_depth_31() {
    // A subroutine at offset 0 that immediately calls itself again.
    let mut asm = Asm::new();
    asm.call(0);
    let bytes = asm.finish();

    let mut vm: Vm = Interpreter::new();
    vm.load_program(&bytes).unwrap();
    let status = vm.run_bounded(64);
    assert_eq!(status, VmStatus::StackOverflow);
    assert_eq!(vm.sp(), 31);
    assert_eq!(vm.pc(), 0);
}

#[test]
fn jmp_past_program_len_is_invalid_pc() {
    let mut asm = Asm::new();
    asm.jmp(1_000_000);
    let (status, _vm) = run(asm.finish());
    assert_eq!(status, VmStatus::InvalidPc);
}
