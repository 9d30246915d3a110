//! Validated, bounds-checked accessors shared by every handler family.
//!
//! Every method here either returns the requested value or rejects with the
//! exact status the handler should surface — no handler reaches into
//! `frames`/`globals`/`buffers` directly.

use crate::buffer::Buffer;
use crate::consts::{BUFFERS, GLOBALS, LOCALS, MAX_FRAMES, STACK_VARS};
use crate::error::{VmResult, VmStatus};
use crate::instruction::Instruction;
use crate::io::{InputSource, OutputSink};
use crate::value::Value;

use super::Interpreter;

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    pub(super) fn req_stack_var(&self, idx: usize) -> VmResult<Value> {
        if idx >= STACK_VARS {
            return Err(VmStatus::InvalidStackVarIdx);
        }
        Ok(self.current_frame().stack_var(idx))
    }

    pub(super) fn req_set_stack_var(&mut self, idx: usize, v: Value) -> VmResult<()> {
        if idx >= STACK_VARS {
            return Err(VmStatus::InvalidStackVarIdx);
        }
        let sp = self.sp;
        self.frames[sp].set_stack_var(idx, v);
        Ok(())
    }

    pub(super) fn req_local(&self, idx: usize) -> VmResult<Value> {
        if idx >= LOCALS {
            return Err(VmStatus::InvalidLocalIdx);
        }
        Ok(self.current_frame().local(idx))
    }

    pub(super) fn req_set_local(&mut self, idx: usize, v: Value) -> VmResult<()> {
        if idx >= LOCALS {
            return Err(VmStatus::InvalidLocalIdx);
        }
        let sp = self.sp;
        self.frames[sp].set_local(idx, v);
        Ok(())
    }

    pub(super) fn req_stack_var_at(&self, frame: usize, var: usize) -> VmResult<Value> {
        if frame >= MAX_FRAMES || var >= STACK_VARS {
            return Err(VmStatus::InvalidStackVarIdx);
        }
        Ok(self.frames[frame].stack_var(var))
    }

    pub(super) fn req_set_stack_var_at(&mut self, frame: usize, var: usize, v: Value) -> VmResult<()> {
        if frame >= MAX_FRAMES || var >= STACK_VARS {
            return Err(VmStatus::InvalidStackVarIdx);
        }
        self.frames[frame].set_stack_var(var, v);
        Ok(())
    }

    pub(super) fn req_global(&self, idx: usize) -> VmResult<Value> {
        if idx >= GLOBALS {
            return Err(VmStatus::InvalidGlobalIdx);
        }
        Ok(self.globals[idx])
    }

    pub(super) fn req_set_global(&mut self, idx: usize, v: Value) -> VmResult<()> {
        if idx >= GLOBALS {
            return Err(VmStatus::InvalidGlobalIdx);
        }
        self.globals[idx] = v;
        Ok(())
    }

    pub(super) fn req_ret_val_at(&self, frame: usize) -> VmResult<Value> {
        if frame >= MAX_FRAMES {
            return Err(VmStatus::InvalidStackVarIdx);
        }
        Ok(self.frames[frame].ret_val())
    }

    pub(super) fn req_set_ret_val_at(&mut self, frame: usize, v: Value) -> VmResult<()> {
        if frame >= MAX_FRAMES {
            return Err(VmStatus::InvalidStackVarIdx);
        }
        self.frames[frame].set_ret_val(v);
        Ok(())
    }

    pub(super) fn req_buffer(&self, idx: usize) -> VmResult<&Buffer> {
        if idx >= BUFFERS {
            return Err(VmStatus::InvalidBufferIdx);
        }
        Ok(&self.buffers[idx])
    }

    pub(super) fn req_buffer_mut(&mut self, idx: usize) -> VmResult<&mut Buffer> {
        if idx >= BUFFERS {
            return Err(VmStatus::InvalidBufferIdx);
        }
        Ok(&mut self.buffers[idx])
    }

    /// Advances `pc` past `instr`. Opcodes that write `pc` themselves
    /// (jumps, `CALL`, `RET`) must not call this.
    pub(super) fn advance(&mut self, instr: &Instruction) {
        self.pc += instr.size();
    }

    pub(super) fn req_i32(&self, idx: usize) -> VmResult<i32> {
        self.req_stack_var(idx)?.as_i32().ok_or(VmStatus::TypeMismatch)
    }

    pub(super) fn req_u32(&self, idx: usize) -> VmResult<u32> {
        self.req_stack_var(idx)?.as_u32().ok_or(VmStatus::TypeMismatch)
    }

    pub(super) fn req_f32(&self, idx: usize) -> VmResult<f32> {
        self.req_stack_var(idx)?.as_f32().ok_or(VmStatus::TypeMismatch)
    }
}

/// Slot indices for a binary-op instruction: `(dest, src1, src2)`, read from
/// `operand`, payload word 1's low byte, and payload word 2's low byte.
pub(super) fn binary_slots(instr: &Instruction) -> (usize, usize, usize) {
    (
        instr.operand() as usize,
        instr.payload(0).low_byte() as usize,
        instr.payload(1).low_byte() as usize,
    )
}

/// Slot indices for a unary-op instruction: `(dest, src)`.
pub(super) fn unary_slots(instr: &Instruction) -> (usize, usize) {
    (instr.operand() as usize, instr.payload(0).low_byte() as usize)
}
