//! Control-flow handlers: jumps, `CALL`, `RET`.
//!
//! These are the only handlers allowed to write `pc` directly; every other
//! family reports [`Effect::Advance`] and lets `dispatch` move `pc` by the
//! instruction's encoded size.

use crate::consts::MAX_FRAMES;
use crate::error::{VmResult, VmStatus};
use crate::instruction::Instruction;
use crate::io::{InputSource, OutputSink};

use super::dispatch::Effect;
use super::Interpreter;

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    fn jump_target(instr: &Instruction) -> u32 {
        instr.payload(0).as_u32()
    }

    fn do_jump(&mut self, target: u32) -> VmResult<Effect> {
        if target >= self.program_len {
            return Err(VmStatus::InvalidPc);
        }
        self.pc = target;
        Ok(Effect::Jumped)
    }

    pub(super) fn exec_jmp(&mut self, instr: &Instruction) -> VmResult<Effect> {
        self.do_jump(Self::jump_target(instr))
    }

    pub(super) fn exec_jz(&mut self, instr: &Instruction) -> VmResult<Effect> {
        if self.flags.zero() {
            self.do_jump(Self::jump_target(instr))
        } else {
            Ok(Effect::Advance)
        }
    }

    pub(super) fn exec_jnz(&mut self, instr: &Instruction) -> VmResult<Effect> {
        if !self.flags.zero() {
            self.do_jump(Self::jump_target(instr))
        } else {
            Ok(Effect::Advance)
        }
    }

    pub(super) fn exec_jlt(&mut self, instr: &Instruction) -> VmResult<Effect> {
        if self.flags.less() {
            self.do_jump(Self::jump_target(instr))
        } else {
            Ok(Effect::Advance)
        }
    }

    pub(super) fn exec_jgt(&mut self, instr: &Instruction) -> VmResult<Effect> {
        if self.flags.greater() {
            self.do_jump(Self::jump_target(instr))
        } else {
            Ok(Effect::Advance)
        }
    }

    pub(super) fn exec_jle(&mut self, instr: &Instruction) -> VmResult<Effect> {
        if self.flags.le() {
            self.do_jump(Self::jump_target(instr))
        } else {
            Ok(Effect::Advance)
        }
    }

    pub(super) fn exec_jge(&mut self, instr: &Instruction) -> VmResult<Effect> {
        if self.flags.ge() {
            self.do_jump(Self::jump_target(instr))
        } else {
            Ok(Effect::Advance)
        }
    }

    /// `CALL target`: requires `sp < 31`. Writes `return_addr = pc + size`
    /// into the next frame, resets its locals, and leaves its `stack_vars`
    /// exactly as the caller pre-staged them.
    pub(super) fn exec_call(&mut self, instr: &Instruction) -> VmResult<Effect> {
        let target = Self::jump_target(instr);
        if target >= self.program_len {
            return Err(VmStatus::InvalidPc);
        }
        if self.sp >= MAX_FRAMES - 1 {
            return Err(VmStatus::StackOverflow);
        }

        let return_addr = self.pc + instr.size();
        let next = self.sp + 1;
        self.frames[next].set_return_addr(return_addr);
        self.frames[next].reset_locals();
        self.sp = next;
        self.pc = target;
        Ok(Effect::Jumped)
    }

    /// `RET`: requires `sp > 0`. The callee's `ret_val` persists in the
    /// now-inactive frame for the caller's `LOAD_RET` to read back.
    pub(super) fn exec_ret(&mut self, _instr: &Instruction) -> VmResult<Effect> {
        if self.sp == 0 {
            return Err(VmStatus::StackUnderflow);
        }
        self.pc = self.frames[self.sp].return_addr();
        self.sp -= 1;
        Ok(Effect::Jumped)
    }
}
