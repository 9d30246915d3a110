//! Bitwise handlers. All operands must carry tag `U32`; `SHL`/`SHR`
//! additionally require a shift count strictly less than 32.

use crate::error::{VmResult, VmStatus};
use crate::instruction::Instruction;
use crate::io::{InputSource, OutputSink};
use crate::value::Value;

use super::internal::{binary_slots, unary_slots};
use super::Interpreter;

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    pub(super) fn exec_and_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_u32(a)? & self.req_u32(b)?;
        self.req_set_stack_var(d, Value::U32(v))
    }

    pub(super) fn exec_or_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_u32(a)? | self.req_u32(b)?;
        self.req_set_stack_var(d, Value::U32(v))
    }

    pub(super) fn exec_xor_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_u32(a)? ^ self.req_u32(b)?;
        self.req_set_stack_var(d, Value::U32(v))
    }

    pub(super) fn exec_not_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = !self.req_u32(a)?;
        self.req_set_stack_var(d, Value::U32(v))
    }

    pub(super) fn exec_shl_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let lhs = self.req_u32(a)?;
        let k = self.req_u32(b)?;
        if k >= 32 {
            return Err(VmStatus::Bounds);
        }
        self.req_set_stack_var(d, Value::U32(lhs << k))
    }

    /// Logical (zero-fill) right shift.
    pub(super) fn exec_shr_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let lhs = self.req_u32(a)?;
        let k = self.req_u32(b)?;
        if k >= 32 {
            return Err(VmStatus::Bounds);
        }
        self.req_set_stack_var(d, Value::U32(lhs >> k))
    }
}
