//! `LOAD_*`/`STORE_*` handlers.
//!
//! Operand convention: the header `operand` byte always names the
//! stack-var slot that is the primary end of the transfer (destination for
//! loads, source for stores); payload word 1 carries the other end's index
//! (global/local/frame index, a packed `StackRef`, or an immediate
//! literal).

use crate::error::VmResult;
use crate::instruction::Instruction;
use crate::io::{InputSource, OutputSink};
use crate::value::Value;

use super::Interpreter;

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    pub(super) fn exec_load_g(&mut self, instr: &Instruction) -> VmResult<()> {
        let s = instr.operand() as usize;
        let gi = instr.payload(0).as_u32() as usize;
        let v = self.req_global(gi)?;
        self.req_set_stack_var(s, v)
    }

    pub(super) fn exec_load_l(&mut self, instr: &Instruction) -> VmResult<()> {
        let s = instr.operand() as usize;
        let li = instr.payload(0).as_u32() as usize;
        let v = self.req_local(li)?;
        self.req_set_stack_var(s, v)
    }

    pub(super) fn exec_load_s(&mut self, instr: &Instruction) -> VmResult<()> {
        let s = instr.operand() as usize;
        let (frame, var) = instr.payload(0).as_stack_ref();
        let v = self.req_stack_var_at(frame as usize, var as usize)?;
        self.req_set_stack_var(s, v)
    }

    pub(super) fn exec_load_i_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let s = instr.operand() as usize;
        let v = Value::I32(instr.payload(0).as_i32());
        self.req_set_stack_var(s, v)
    }

    pub(super) fn exec_load_i_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let s = instr.operand() as usize;
        let v = Value::U32(instr.payload(0).as_u32());
        self.req_set_stack_var(s, v)
    }

    pub(super) fn exec_load_i_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let s = instr.operand() as usize;
        let v = Value::F32(instr.payload(0).as_f32());
        self.req_set_stack_var(s, v)
    }

    pub(super) fn exec_load_ret(&mut self, instr: &Instruction) -> VmResult<()> {
        let s = instr.operand() as usize;
        let f = instr.payload(0).as_u32() as usize;
        let v = self.req_ret_val_at(f)?;
        self.req_set_stack_var(s, v)
    }

    pub(super) fn exec_store_g(&mut self, instr: &Instruction) -> VmResult<()> {
        let src = instr.operand() as usize;
        let gi = instr.payload(0).as_u32() as usize;
        let v = self.req_stack_var(src)?;
        self.req_set_global(gi, v)
    }

    pub(super) fn exec_store_l(&mut self, instr: &Instruction) -> VmResult<()> {
        let src = instr.operand() as usize;
        let li = instr.payload(0).as_u32() as usize;
        let v = self.req_stack_var(src)?;
        self.req_set_local(li, v)
    }

    pub(super) fn exec_store_s(&mut self, instr: &Instruction) -> VmResult<()> {
        let src = instr.operand() as usize;
        let (frame, var) = instr.payload(0).as_stack_ref();
        let v = self.req_stack_var(src)?;
        self.req_set_stack_var_at(frame as usize, var as usize, v)
    }

    pub(super) fn exec_store_ret(&mut self, instr: &Instruction) -> VmResult<()> {
        let src = instr.operand() as usize;
        let f = instr.payload(0).as_u32() as usize;
        let v = self.req_stack_var(src)?;
        self.req_set_ret_val_at(f, v)
    }
}
