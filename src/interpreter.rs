//! The engine: one owned state value plus its dispatch loop.
//!
//! Handlers are implemented as separate `impl Interpreter` blocks split
//! across the `interpreter/` submodules by opcode family, following the
//! teacher's split of `alu`/`flow`/`executors` into sibling files over one
//! shared type.

mod arith;
mod bitwise;
mod bufferops;
mod compare;
mod convert;
mod diagnostics;
mod dispatch;
mod flow;
mod internal;
mod loadstore;
mod stringops;
mod textio;

use crate::buffer::Buffer;
use crate::consts::{BUFFERS, GLOBALS, MAX_FRAMES, PROGRAM_MAX};
use crate::error::{VmResult, VmStatus};
use crate::flags::Flags;
use crate::frame::Frame;
use crate::io::{InputSource, OutputSink};
use crate::value::Value;

/// The bytecode interpreter.
///
/// Generic over its host I/O bindings so the same engine serves both the
/// stdio-backed driver binary and in-memory-backed tests.
pub struct Interpreter<O, I> {
    program: Box<[u8; PROGRAM_MAX]>,
    program_len: u32,
    pc: u32,
    frames: [Frame; MAX_FRAMES],
    sp: usize,
    globals: [Value; GLOBALS],
    buffers: [Buffer; BUFFERS],
    flags: Flags,
    last_error: VmStatus,
    output: O,
    input: I,
    /// One byte of lookahead for `READ_*` tokenizing, pushed back when a
    /// token boundary is found one byte past the token itself.
    pending_byte: Option<u8>,
}

impl<O: OutputSink + Default, I: InputSource + Default> Interpreter<O, I> {
    /// Builds a freshly reset engine with no program loaded.
    pub fn new() -> Self {
        Self::with_io(O::default(), I::default())
    }
}

impl<O: OutputSink + Default, I: InputSource + Default> Default for Interpreter<O, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    /// Builds a freshly reset engine bound to the given host I/O.
    pub fn with_io(output: O, input: I) -> Self {
        Self {
            program: Box::new([0u8; PROGRAM_MAX]),
            program_len: 0,
            pc: 0,
            frames: std::array::from_fn(|_| Frame::default()),
            sp: 0,
            globals: [Value::Void; GLOBALS],
            buffers: [Buffer::default(); BUFFERS],
            flags: Flags::default(),
            last_error: VmStatus::Ok,
            output,
            input,
            pending_byte: None,
        }
    }

    /// Reverts every slot to `Void`, flags and error state to zero, and
    /// `PC`/`SP` to 0. The loaded program and its length are unaffected.
    pub fn reset(&mut self) {
        self.pc = 0;
        self.sp = 0;
        self.frames = std::array::from_fn(|_| Frame::default());
        self.globals = [Value::Void; GLOBALS];
        self.buffers = [Buffer::default(); BUFFERS];
        self.flags.clear();
        self.last_error = VmStatus::Ok;
    }

    /// Loads a bytecode program, replacing any previously loaded one and
    /// resetting all engine state. Rejects programs over [`PROGRAM_MAX`]
    /// bytes with [`VmStatus::ProgramTooLarge`] without mutating state.
    pub fn load_program(&mut self, bytecode: &[u8]) -> VmResult<()> {
        if bytecode.len() > PROGRAM_MAX {
            return Err(VmStatus::ProgramTooLarge);
        }
        self.reset();
        *self.program = [0u8; PROGRAM_MAX];
        self.program[..bytecode.len()].copy_from_slice(bytecode);
        self.program_len = bytecode.len() as u32;
        Ok(())
    }

    pub const fn pc(&self) -> u32 {
        self.pc
    }

    pub const fn sp(&self) -> usize {
        self.sp
    }

    pub const fn program_len(&self) -> u32 {
        self.program_len
    }

    pub const fn flags(&self) -> Flags {
        self.flags
    }

    pub const fn last_error(&self) -> VmStatus {
        self.last_error
    }

    pub fn global(&self, idx: usize) -> Option<Value> {
        self.globals.get(idx).copied()
    }

    pub fn buffer(&self, idx: usize) -> Option<&Buffer> {
        self.buffers.get(idx)
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.sp]
    }

    pub fn frame(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }

    pub fn program_bytes(&self) -> &[u8] {
        &self.program[..self.program_len as usize]
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Decodes and dispatches exactly one instruction, returning its
    /// status. `last_error` is updated to match the returned status,
    /// including on `Halt`. A failed instruction leaves all other state
    /// unchanged; the PC does not advance.
    pub fn step(&mut self) -> VmStatus {
        let status = dispatch::dispatch(self);
        self.last_error = status;
        status
    }

    /// Runs `step` until it returns anything other than `Ok`. `Halt` is
    /// folded into `Ok(())`; any other status propagates as `Err`.
    pub fn run(&mut self) -> VmResult<()> {
        loop {
            match self.step() {
                VmStatus::Ok => continue,
                VmStatus::Halt => return Ok(()),
                other => return Err(other),
            }
        }
    }

    /// Runs `step` at most `max_steps` times, stopping early on any
    /// terminal status. Returns the last status observed (`Ok` if the
    /// budget was exhausted without reaching `Halt` or an error). This is
    /// the bounded-execution knob §5 leaves to the host.
    pub fn run_bounded(&mut self, max_steps: u32) -> VmStatus {
        for _ in 0..max_steps {
            match self.step() {
                VmStatus::Ok => continue,
                other => return other,
            }
        }
        VmStatus::Ok
    }
}
