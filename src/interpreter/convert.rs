//! Type conversion handlers.
//!
//! Float-to-integer conversions truncate toward zero and saturate on
//! out-of-range input (`NaN` maps to zero) rather than wrapping — the
//! policy this core picks for the deliberately open conversion question
//! (see `DESIGN.md`). This matches Rust's defined `as` cast semantics for
//! float-to-int, so no manual clamping is needed.

use crate::error::VmResult;
use crate::instruction::Instruction;
use crate::io::{InputSource, OutputSink};
use crate::value::Value;

use super::internal::unary_slots;
use super::Interpreter;

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    pub(super) fn exec_i32_to_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = self.req_i32(a)? as u32;
        self.req_set_stack_var(d, Value::U32(v))
    }

    pub(super) fn exec_u32_to_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = self.req_u32(a)? as i32;
        self.req_set_stack_var(d, Value::I32(v))
    }

    pub(super) fn exec_i32_to_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = self.req_i32(a)? as f32;
        self.req_set_stack_var(d, Value::F32(v))
    }

    pub(super) fn exec_f32_to_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = self.req_f32(a)? as i32;
        self.req_set_stack_var(d, Value::I32(v))
    }

    pub(super) fn exec_u32_to_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = self.req_u32(a)? as f32;
        self.req_set_stack_var(d, Value::F32(v))
    }

    pub(super) fn exec_f32_to_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = self.req_f32(a)? as u32;
        self.req_set_stack_var(d, Value::U32(v))
    }
}
