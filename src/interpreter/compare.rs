//! Comparison handlers: `CMP_I32`/`CMP_U32`/`CMP_F32`.
//!
//! Operand convention: `operand` names `src1`, payload word 1's low byte
//! names `src2`. No destination slot; the result is the flag bits.

use crate::consts::F32_EPSILON;
use crate::error::VmResult;
use crate::instruction::Instruction;
use crate::io::{InputSource, OutputSink};

use super::Interpreter;

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    fn compare_slots(instr: &Instruction) -> (usize, usize) {
        (instr.operand() as usize, instr.payload(0).low_byte() as usize)
    }

    pub(super) fn exec_cmp_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (a, b) = Self::compare_slots(instr);
        let lhs = self.req_i32(a)?;
        let rhs = self.req_i32(b)?;
        self.flags.set_cmp(lhs == rhs, lhs < rhs, lhs > rhs);
        Ok(())
    }

    pub(super) fn exec_cmp_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (a, b) = Self::compare_slots(instr);
        let lhs = self.req_u32(a)?;
        let rhs = self.req_u32(b)?;
        self.flags.set_cmp(lhs == rhs, lhs < rhs, lhs > rhs);
        Ok(())
    }

    /// Equality within [`F32_EPSILON`]; `L`/`G` use strict ordering.
    pub(super) fn exec_cmp_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (a, b) = Self::compare_slots(instr);
        let lhs = self.req_f32(a)?;
        let rhs = self.req_f32(b)?;
        let zero = (lhs - rhs).abs() < F32_EPSILON;
        self.flags.set_cmp(zero, !zero && lhs < rhs, !zero && lhs > rhs);
        Ok(())
    }
}
