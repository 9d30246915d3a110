//! Integer and floating-point arithmetic handlers.
//!
//! Binary opcodes read three stack-var indices: `dest` from the header's
//! `operand` byte, `src1`/`src2` from the low byte of payload words 1 and
//! 2. Unary opcodes read `dest` from `operand` and `src` from payload word
//! 1's low byte.
//!
//! Signed integer arithmetic wraps on overflow (two's-complement, the one
//! host-dependency the core tolerates); unsigned arithmetic wraps modulo
//! 2^32; float arithmetic is plain IEEE-754 with no trapped NaN/Inf.

use crate::error::{VmResult, VmStatus};
use crate::instruction::Instruction;
use crate::io::{InputSource, OutputSink};
use crate::value::Value;

use super::internal::{binary_slots, unary_slots};
use super::Interpreter;

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    pub(super) fn exec_add_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_i32(a)?.wrapping_add(self.req_i32(b)?);
        self.req_set_stack_var(d, Value::I32(v))
    }

    pub(super) fn exec_sub_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_i32(a)?.wrapping_sub(self.req_i32(b)?);
        self.req_set_stack_var(d, Value::I32(v))
    }

    pub(super) fn exec_mul_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_i32(a)?.wrapping_mul(self.req_i32(b)?);
        self.req_set_stack_var(d, Value::I32(v))
    }

    pub(super) fn exec_div_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let lhs = self.req_i32(a)?;
        let rhs = self.req_i32(b)?;
        if rhs == 0 {
            return Err(VmStatus::DivByZero);
        }
        self.req_set_stack_var(d, Value::I32(lhs.wrapping_div(rhs)))
    }

    pub(super) fn exec_mod_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let lhs = self.req_i32(a)?;
        let rhs = self.req_i32(b)?;
        if rhs == 0 {
            return Err(VmStatus::DivByZero);
        }
        self.req_set_stack_var(d, Value::I32(lhs.wrapping_rem(rhs)))
    }

    pub(super) fn exec_neg_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = self.req_i32(a)?.wrapping_neg();
        self.req_set_stack_var(d, Value::I32(v))
    }

    pub(super) fn exec_add_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_u32(a)?.wrapping_add(self.req_u32(b)?);
        self.req_set_stack_var(d, Value::U32(v))
    }

    pub(super) fn exec_sub_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_u32(a)?.wrapping_sub(self.req_u32(b)?);
        self.req_set_stack_var(d, Value::U32(v))
    }

    pub(super) fn exec_mul_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_u32(a)?.wrapping_mul(self.req_u32(b)?);
        self.req_set_stack_var(d, Value::U32(v))
    }

    pub(super) fn exec_div_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let lhs = self.req_u32(a)?;
        let rhs = self.req_u32(b)?;
        if rhs == 0 {
            return Err(VmStatus::DivByZero);
        }
        self.req_set_stack_var(d, Value::U32(lhs / rhs))
    }

    pub(super) fn exec_mod_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let lhs = self.req_u32(a)?;
        let rhs = self.req_u32(b)?;
        if rhs == 0 {
            return Err(VmStatus::DivByZero);
        }
        self.req_set_stack_var(d, Value::U32(lhs % rhs))
    }

    pub(super) fn exec_add_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_f32(a)? + self.req_f32(b)?;
        self.req_set_stack_var(d, Value::F32(v))
    }

    pub(super) fn exec_sub_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_f32(a)? - self.req_f32(b)?;
        self.req_set_stack_var(d, Value::F32(v))
    }

    pub(super) fn exec_mul_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_f32(a)? * self.req_f32(b)?;
        self.req_set_stack_var(d, Value::F32(v))
    }

    pub(super) fn exec_div_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a, b) = binary_slots(instr);
        let v = self.req_f32(a)? / self.req_f32(b)?;
        self.req_set_stack_var(d, Value::F32(v))
    }

    pub(super) fn exec_neg_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = -self.req_f32(a)?;
        self.req_set_stack_var(d, Value::F32(v))
    }

    pub(super) fn exec_abs_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = self.req_f32(a)?.abs();
        self.req_set_stack_var(d, Value::F32(v))
    }

    pub(super) fn exec_sqrt_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let (d, a) = unary_slots(instr);
        let v = self.req_f32(a)?.sqrt();
        self.req_set_stack_var(d, Value::F32(v))
    }
}
