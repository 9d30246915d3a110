//! String concatenation scenario and round-trip/idempotence laws.

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

fn preload_str(asm: &mut Asm, bi: u8, s: &str) {
    for (i, b) in s.bytes().enumerate() {
        asm.str_set_chr(bi, i as u32, b as u32);
    }
}

#[test]
fn string_concat_and_print() {
    let mut asm = Asm::new();
    preload_str(&mut asm, 0, "Hello, ");
    preload_str(&mut asm, 1, "World!");
    asm.str_cat(2, 0, 1).print_str(2).println().halt();

    let (status, vm) = run(asm.finish());
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "Hello, World!\n");
}

#[test]
fn str_copy_then_str_cmp_sets_only_zero() {
    let mut asm = Asm::new();
    preload_str(&mut asm, 0, "shellvm");
    asm.str_copy(1, 0).str_cmp(1, 0).halt();
    let (_status, vm) = run(asm.finish());
    let flags = vm.flags();
    assert!(flags.zero());
    assert!(!flags.less());
    assert!(!flags.greater());
}

#[test]
fn concat_with_empty_string_compares_equal() {
    let mut asm = Asm::new();
    preload_str(&mut asm, 0, "abc");
    asm.str_set_chr(1, 0, 0); // buffer 1: empty string (NUL at position 0)
    asm.str_cat(2, 0, 1).str_cmp(2, 0).halt();
    let (_status, vm) = run(asm.finish());
    assert!(vm.flags().zero());
}

#[test]
fn str_cmp_orders_lexicographically() {
    let mut asm = Asm::new();
    preload_str(&mut asm, 0, "abc");
    preload_str(&mut asm, 1, "abd");
    asm.str_cmp(0, 1).halt();
    let (_status, vm) = run(asm.finish());
    assert!(vm.flags().less());
    assert!(!vm.flags().zero());
}

#[test]
fn str_cat_truncates_to_max_length() {
    let mut asm = Asm::new();
    preload_str(&mut asm, 0, &"a".repeat(200));
    preload_str(&mut asm, 1, &"b".repeat(200));
    asm.str_cat(2, 0, 1).str_len(0, 2).print_u32(0).println().halt();
    let (status, vm) = run(asm.finish());
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "255\n");
}

#[test]
fn out_of_range_set_chr_on_void_buffer_leaves_it_void() {
    let mut asm = Asm::new();
    // U8 capacity is 256; pos 256 is out of range, so the tag STR_SET_CHR
    // would otherwise assign on a first write must not stick either.
    asm.str_set_chr(9, 256, b'x' as u32).halt();
    let (status, vm) = run(asm.finish());
    assert_eq!(status, VmStatus::InvalidBufferPos);
    assert_eq!(vm.buffer(9).unwrap().tag(), shellvm::BufferTag::Void);
}

#[test]
fn str_op_on_non_u8_buffer_is_type_mismatch() {
    let mut asm = Asm::new();
    asm.load_i_u32(0, 5).buf_write(0, 0, 0); // buffer 0 becomes U32
    asm.str_len(1, 0).halt();
    let (status, _vm) = run(asm.finish());
    assert_eq!(status, VmStatus::TypeMismatch);
}
