//! Buffer round-trip scenario and index/position/type boundary behaviors.

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
fn buffer_write_read_round_trip() {
    let mut asm = Asm::new();
    asm.load_i_i32(0, 42)
        .buf_write(0, 0, 5)
        .buf_read(1, 0, 5)
        .print_i32(1)
        .println()
        .halt();
    let (status, vm) = run(asm.finish());
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "42\n");
}

#[test]
fn first_write_to_void_buffer_infers_tag_from_source() {
    let mut asm = Asm::new();
    asm.load_i_u32(0, 7).buf_write(0, 3, 0).buf_len(1, 3).print_u32(1).println().halt();
    let (status, vm) = run(asm.finish());
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "64\n"); // U32 capacity
}

#[test]
fn read_from_void_buffer_is_type_mismatch() {
    let mut asm = Asm::new();
    asm.buf_read(0, 5, 0).halt();
    let (status, _vm) = run(asm.finish());
    assert_eq!(status, VmStatus::TypeMismatch);
}

#[test]
fn pos_at_capacity_fails_capacity_minus_one_succeeds() {
    let mut asm = Asm::new();
    asm.load_i_i32(0, 1).buf_write(0, 0, 64).halt(); // I32 cap is 64
    let (status, _vm) = run(asm.finish());
    assert_eq!(status, VmStatus::InvalidBufferPos);

    let mut asm = Asm::new();
    asm.load_i_i32(0, 1).buf_write(0, 0, 63).print_i32(0).println().halt();
    let (status, _vm) = run(asm.finish());
    assert_eq!(status, VmStatus::Ok);
}

#[test]
fn buffer_index_out_of_range_is_invalid_buffer_idx() {
    let mut asm = Asm::new();
    asm.buf_len(0, 256).halt();
    let (status, _vm) = run(asm.finish());
    assert_eq!(status, VmStatus::InvalidBufferIdx);
}

#[test]
fn buf_clear_zeroes_storage_but_keeps_tag() {
    let mut asm = Asm::new();
    asm.load_i_i32(0, 99)
        .buf_write(0, 0, 0)
        .buf_clear(0)
        .buf_read(1, 0, 0)
        .print_i32(1)
        .println()
        .halt();
    let (status, vm) = run(asm.finish());
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "0\n");
}

#[test]
fn out_of_range_write_to_void_buffer_leaves_it_void() {
    let mut asm = Asm::new();
    // I32 capacity is 64; pos 64 is out of range, so the tag inference
    // that would otherwise apply on a first write must not stick either.
    asm.load_i_i32(0, 1).buf_write(0, 7, 64).halt();
    let (status, vm) = run(asm.finish());
    assert_eq!(status, VmStatus::InvalidBufferPos);
    assert_eq!(vm.buffer(7).unwrap().tag(), shellvm::BufferTag::Void);
}

#[test]
fn narrowing_write_to_u8_buffer_from_u32_source() {
    let mut asm = Asm::new();
    // STR_SET_CHR brings buffer 10 into existence as U8 (BUF_WRITE alone
    // only ever infers U8/U16/I32/U32/F32 from a stack-var's own tag, and a
    // stack-var can never itself carry a `U8` tag).
    asm.str_set_chr(10, 0, 0)
        .load_i_u32(0, 0x1FF) // narrows to 0xFF
        .buf_write(0, 10, 1)
        .buf_read(1, 10, 1)
        .print_u32(1)
        .println()
        .halt();
    let (status, vm) = run(asm.finish());
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "255\n");
}
