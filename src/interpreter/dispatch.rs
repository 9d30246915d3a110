//! Instruction fetch/decode/dispatch.
//!
//! This is the one place that turns an [`Opcode`] into a handler call and
//! turns the handler's [`Effect`] back into PC movement. Handlers never
//! touch `pc` directly except the control-flow family, which reports
//! [`Effect::Jumped`] so `dispatch` knows not to also auto-advance.

use crate::error::{VmResult, VmStatus};
use crate::instruction::{self, Instruction};
use crate::io::{InputSource, OutputSink};
use crate::opcode::Opcode;

use super::Interpreter;

/// What a handler did to the program counter.
pub(super) enum Effect {
    /// The handler performed its effect only; `pc` should advance by the
    /// instruction's encoded size.
    Advance,
    /// The handler already wrote `pc` itself (jump, `CALL`, `RET`).
    Jumped,
    /// `HALT` was executed.
    Halted,
}

pub(super) fn dispatch<O: OutputSink, I: InputSource>(vm: &mut Interpreter<O, I>) -> VmStatus {
    let instr = match instruction::decode(vm.program.as_slice(), vm.pc, vm.program_len) {
        Ok(instr) => instr,
        Err(status) => return status,
    };

    let opcode = match Opcode::try_from(instr.opcode()) {
        Ok(op) => op,
        Err(status) => return status,
    };

    tracing::trace!(pc = vm.pc, opcode = opcode.mnemonic(), "instruction");

    let result = run_handler(vm, opcode, &instr);

    match result {
        Ok(Effect::Advance) => {
            vm.advance(&instr);
            VmStatus::Ok
        }
        Ok(Effect::Jumped) => VmStatus::Ok,
        Ok(Effect::Halted) => VmStatus::Halt,
        Err(status) => {
            tracing::debug!(pc = vm.pc, opcode = opcode.mnemonic(), %status, "instruction failed");
            status
        }
    }
}

fn run_handler<O: OutputSink, I: InputSource>(
    vm: &mut Interpreter<O, I>,
    opcode: Opcode,
    instr: &Instruction,
) -> VmResult<Effect> {
    use Opcode::*;
    match opcode {
        Nop => Ok(Effect::Advance),
        Halt => Ok(Effect::Halted),
        Jmp => vm.exec_jmp(instr),
        Jz => vm.exec_jz(instr),
        Jnz => vm.exec_jnz(instr),
        Jlt => vm.exec_jlt(instr),
        Jgt => vm.exec_jgt(instr),
        Jle => vm.exec_jle(instr),
        Jge => vm.exec_jge(instr),
        Call => vm.exec_call(instr),
        Ret => vm.exec_ret(instr),

        LoadG => vm.exec_load_g(instr).map(|_| Effect::Advance),
        LoadL => vm.exec_load_l(instr).map(|_| Effect::Advance),
        LoadS => vm.exec_load_s(instr).map(|_| Effect::Advance),
        LoadII32 => vm.exec_load_i_i32(instr).map(|_| Effect::Advance),
        LoadIU32 => vm.exec_load_i_u32(instr).map(|_| Effect::Advance),
        LoadIF32 => vm.exec_load_i_f32(instr).map(|_| Effect::Advance),
        LoadRet => vm.exec_load_ret(instr).map(|_| Effect::Advance),
        StoreG => vm.exec_store_g(instr).map(|_| Effect::Advance),
        StoreL => vm.exec_store_l(instr).map(|_| Effect::Advance),
        StoreS => vm.exec_store_s(instr).map(|_| Effect::Advance),
        StoreRet => vm.exec_store_ret(instr).map(|_| Effect::Advance),

        AddI32 => vm.exec_add_i32(instr).map(|_| Effect::Advance),
        SubI32 => vm.exec_sub_i32(instr).map(|_| Effect::Advance),
        MulI32 => vm.exec_mul_i32(instr).map(|_| Effect::Advance),
        DivI32 => vm.exec_div_i32(instr).map(|_| Effect::Advance),
        ModI32 => vm.exec_mod_i32(instr).map(|_| Effect::Advance),
        NegI32 => vm.exec_neg_i32(instr).map(|_| Effect::Advance),
        AddU32 => vm.exec_add_u32(instr).map(|_| Effect::Advance),
        SubU32 => vm.exec_sub_u32(instr).map(|_| Effect::Advance),
        MulU32 => vm.exec_mul_u32(instr).map(|_| Effect::Advance),
        DivU32 => vm.exec_div_u32(instr).map(|_| Effect::Advance),
        ModU32 => vm.exec_mod_u32(instr).map(|_| Effect::Advance),

        AddF32 => vm.exec_add_f32(instr).map(|_| Effect::Advance),
        SubF32 => vm.exec_sub_f32(instr).map(|_| Effect::Advance),
        MulF32 => vm.exec_mul_f32(instr).map(|_| Effect::Advance),
        DivF32 => vm.exec_div_f32(instr).map(|_| Effect::Advance),
        NegF32 => vm.exec_neg_f32(instr).map(|_| Effect::Advance),
        AbsF32 => vm.exec_abs_f32(instr).map(|_| Effect::Advance),
        SqrtF32 => vm.exec_sqrt_f32(instr).map(|_| Effect::Advance),

        AndU32 => vm.exec_and_u32(instr).map(|_| Effect::Advance),
        OrU32 => vm.exec_or_u32(instr).map(|_| Effect::Advance),
        XorU32 => vm.exec_xor_u32(instr).map(|_| Effect::Advance),
        NotU32 => vm.exec_not_u32(instr).map(|_| Effect::Advance),
        ShlU32 => vm.exec_shl_u32(instr).map(|_| Effect::Advance),
        ShrU32 => vm.exec_shr_u32(instr).map(|_| Effect::Advance),

        CmpI32 => vm.exec_cmp_i32(instr).map(|_| Effect::Advance),
        CmpU32 => vm.exec_cmp_u32(instr).map(|_| Effect::Advance),
        CmpF32 => vm.exec_cmp_f32(instr).map(|_| Effect::Advance),

        I32ToU32 => vm.exec_i32_to_u32(instr).map(|_| Effect::Advance),
        U32ToI32 => vm.exec_u32_to_i32(instr).map(|_| Effect::Advance),
        I32ToF32 => vm.exec_i32_to_f32(instr).map(|_| Effect::Advance),
        F32ToI32 => vm.exec_f32_to_i32(instr).map(|_| Effect::Advance),
        U32ToF32 => vm.exec_u32_to_f32(instr).map(|_| Effect::Advance),
        F32ToU32 => vm.exec_f32_to_u32(instr).map(|_| Effect::Advance),

        BufRead => vm.exec_buf_read(instr).map(|_| Effect::Advance),
        BufWrite => vm.exec_buf_write(instr).map(|_| Effect::Advance),
        BufLen => vm.exec_buf_len(instr).map(|_| Effect::Advance),
        BufClear => vm.exec_buf_clear(instr).map(|_| Effect::Advance),

        StrCat => vm.exec_str_cat(instr).map(|_| Effect::Advance),
        StrCopy => vm.exec_str_copy(instr).map(|_| Effect::Advance),
        StrLen => vm.exec_str_len(instr).map(|_| Effect::Advance),
        StrCmp => vm.exec_str_cmp(instr).map(|_| Effect::Advance),
        StrChr => vm.exec_str_chr(instr).map(|_| Effect::Advance),
        StrSetChr => vm.exec_str_set_chr(instr).map(|_| Effect::Advance),

        PrintI32 => vm.exec_print_i32(instr).map(|_| Effect::Advance),
        PrintU32 => vm.exec_print_u32(instr).map(|_| Effect::Advance),
        PrintF32 => vm.exec_print_f32(instr).map(|_| Effect::Advance),
        PrintStr => vm.exec_print_str(instr).map(|_| Effect::Advance),
        Println => vm.exec_println(instr).map(|_| Effect::Advance),
        ReadI32 => vm.exec_read_i32(instr).map(|_| Effect::Advance),
        ReadU32 => vm.exec_read_u32(instr).map(|_| Effect::Advance),
        ReadF32 => vm.exec_read_f32(instr).map(|_| Effect::Advance),
        ReadStr => vm.exec_read_str(instr).map(|_| Effect::Advance),
    }
}
