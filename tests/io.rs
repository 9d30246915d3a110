//! Textual READ_* parsing, tokenization, and malformed-input recovery.

mod common;

use common::Asm;
use shellvm::io::{MemorySink, MemorySource};
use shellvm::{InputSource, Interpreter, VmStatus};

type Vm = Interpreter<MemorySink, MemorySource>;

fn run_with_input(program: Vec<u8>, input: &str) -> (VmStatus, Vm) {
    let mut vm: Vm = Interpreter::with_io(MemorySink::new(), MemorySource::new(input.as_bytes().to_vec()));
    vm.load_program(&program).expect("program should load");
    let status = match vm.run() {
        Ok(()) => VmStatus::Ok,
        Err(status) => status,
    };
    (status, vm)
}

#[test]
fn read_i32_parses_a_token_and_echoes_it() {
    let mut asm = Asm::new();
    asm.read_i32(0).print_i32(0).println().halt();
    let (status, vm) = run_with_input(asm.finish(), "-17\n");
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "-17\n");
}

#[test]
fn read_i32_on_garbage_writes_zero_and_resyncs_next_line() {
    let mut asm = Asm::new();
    asm.read_i32(0).read_i32(1).print_i32(0).println().print_i32(1).println().halt();
    let (status, vm) = run_with_input(asm.finish(), "not-a-number\n42\n");
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "0\n42\n");
}

#[test]
fn read_u32_and_read_f32_parse_their_tokens() {
    let mut asm = Asm::new();
    asm.read_u32(0).read_f32(1).print_u32(0).println().print_f32(1).println().halt();
    let (status, vm) = run_with_input(asm.finish(), "7 2.5\n");
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "7\n2.500000\n");
}

#[test]
fn read_i32_with_invalid_dest_does_not_consume_input() {
    let mut asm = Asm::new();
    // dest 200 is out of range (STACK_VARS is 16); the failing read must
    // reject before touching the input source, leaving the token intact.
    asm.read_i32(200).halt();
    let mut vm: Vm = Interpreter::with_io(MemorySink::new(), MemorySource::new(b"42\n".to_vec()));
    vm.load_program(&asm.finish()).expect("program should load");
    assert_eq!(vm.step(), VmStatus::InvalidStackVarIdx);
    assert_eq!(vm.input_mut().read_byte(), Some(b'4'));
}

#[test]
fn read_str_reads_up_to_line_terminator() {
    let mut asm = Asm::new();
    asm.read_str(0).print_str(0).println().halt();
    let (status, vm) = run_with_input(asm.finish(), "hello world\nsecond line\n");
    assert_eq!(status, VmStatus::Ok);
    assert_eq!(vm.output().as_str(), "hello world\n");
}
