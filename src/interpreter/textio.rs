//! Textual `PRINT_*`/`READ_*`/`PRINTLN` handlers on the host-provided
//! [`OutputSink`]/[`InputSource`].
//!
//! `READ_*` tokenizes by skipping leading whitespace, then reading bytes up
//! to the next whitespace or line terminator. A token that fails to parse as
//! the target type writes zero and discards the rest of the line so a
//! malformed line can't desynchronize subsequent reads.

use crate::buffer::BufferTag;
use crate::consts::{MAX_STRING_LEN, STACK_VARS};
use crate::error::{VmResult, VmStatus};
use crate::instruction::Instruction;
use crate::io::{InputSource, OutputSink};
use crate::value::Value;

use super::Interpreter;

const LINE_TERMINATOR: u8 = b'\n';

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    pub(super) fn exec_print_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let src = instr.operand() as usize;
        let v = self.req_i32(src)?;
        self.output.write_bytes(v.to_string().as_bytes());
        Ok(())
    }

    pub(super) fn exec_print_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let src = instr.operand() as usize;
        let v = self.req_u32(src)?;
        self.output.write_bytes(v.to_string().as_bytes());
        Ok(())
    }

    /// Float format: optional `-`, integer part, `.`, six decimal digits.
    pub(super) fn exec_print_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let src = instr.operand() as usize;
        let v = self.req_f32(src)?;
        self.output.write_bytes(format!("{v:.6}").as_bytes());
        Ok(())
    }

    pub(super) fn exec_print_str(&mut self, instr: &Instruction) -> VmResult<()> {
        let bi = instr.operand() as usize;
        let buf = self.req_buffer(bi)?;
        let len = buf.str_len();
        let bytes: Vec<u8> = (0..len).map(|i| buf.read_u8(i)).collect();
        self.output.write_bytes(&bytes);
        Ok(())
    }

    pub(super) fn exec_println(&mut self, _instr: &Instruction) -> VmResult<()> {
        self.output.write_line_terminator();
        Ok(())
    }

    /// Reads bytes up to the next whitespace/line-terminator byte, without
    /// consuming it. Skips any leading whitespace first.
    fn read_token(&mut self) -> Vec<u8> {
        let mut token = Vec::new();
        loop {
            match self.pending_byte.take().or_else(|| self.input.read_byte()) {
                Some(b) if token.is_empty() && is_whitespace(b) => continue,
                Some(b) if is_whitespace(b) => {
                    self.pending_byte = Some(b);
                    break;
                }
                Some(b) => token.push(b),
                None => break,
            }
        }
        token
    }

    /// Discards input through (and including) the next line terminator.
    fn discard_line(&mut self) {
        loop {
            match self.pending_byte.take().or_else(|| self.input.read_byte()) {
                Some(LINE_TERMINATOR) | None => break,
                Some(_) => continue,
            }
        }
    }

    pub(super) fn exec_read_i32(&mut self, instr: &Instruction) -> VmResult<()> {
        let dest = instr.operand() as usize;
        if dest >= STACK_VARS {
            return Err(VmStatus::InvalidStackVarIdx);
        }
        let token = self.read_token();
        let value = std::str::from_utf8(&token).ok().and_then(|s| s.parse::<i32>().ok());
        let v = match value {
            Some(v) => v,
            None => {
                self.discard_line();
                0
            }
        };
        self.req_set_stack_var(dest, Value::I32(v))
    }

    pub(super) fn exec_read_u32(&mut self, instr: &Instruction) -> VmResult<()> {
        let dest = instr.operand() as usize;
        if dest >= STACK_VARS {
            return Err(VmStatus::InvalidStackVarIdx);
        }
        let token = self.read_token();
        let value = std::str::from_utf8(&token).ok().and_then(|s| s.parse::<u32>().ok());
        let v = match value {
            Some(v) => v,
            None => {
                self.discard_line();
                0
            }
        };
        self.req_set_stack_var(dest, Value::U32(v))
    }

    pub(super) fn exec_read_f32(&mut self, instr: &Instruction) -> VmResult<()> {
        let dest = instr.operand() as usize;
        if dest >= STACK_VARS {
            return Err(VmStatus::InvalidStackVarIdx);
        }
        let token = self.read_token();
        let value = std::str::from_utf8(&token).ok().and_then(|s| s.parse::<f32>().ok());
        let v = match value {
            Some(v) => v,
            None => {
                self.discard_line();
                0.0
            }
        };
        self.req_set_stack_var(dest, Value::F32(v))
    }

    /// Reads bytes until a line terminator or `MAX_STRING_LEN` bytes
    /// consumed, NUL-terminating the destination buffer. The terminator
    /// itself is consumed but not stored.
    pub(super) fn exec_read_str(&mut self, instr: &Instruction) -> VmResult<()> {
        let bi = instr.operand() as usize;
        let mut bytes = Vec::new();
        loop {
            if bytes.len() >= MAX_STRING_LEN {
                break;
            }
            match self.pending_byte.take().or_else(|| self.input.read_byte()) {
                Some(LINE_TERMINATOR) | None => break,
                Some(b) => bytes.push(b),
            }
        }

        let buf = self.req_buffer_mut(bi)?;
        buf.set_tag(BufferTag::U8);
        for (i, byte) in bytes.iter().enumerate() {
            buf.write_u8(i, *byte);
        }
        buf.write_u8(bytes.len(), 0);
        Ok(())
    }
}
