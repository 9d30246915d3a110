//! Buffer handlers: `BUF_READ`/`BUF_WRITE`/`BUF_LEN`/`BUF_CLEAR`.
//!
//! `BUF_READ`/`BUF_WRITE` take their buffer index and element position as
//! full payload words (not the low-byte slot convention arithmetic uses,
//! since these are indices, not stack-var references). `BUF_CLEAR` only
//! has one operand, so it rides directly in the header's `operand` byte.

use crate::buffer::BufferTag;
use crate::error::{VmResult, VmStatus};
use crate::instruction::Instruction;
use crate::io::{InputSource, OutputSink};
use crate::value::Value;

use super::Interpreter;

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    pub(super) fn exec_buf_read(&mut self, instr: &Instruction) -> VmResult<()> {
        let dest = instr.operand() as usize;
        let bi = instr.payload(0).as_u32() as usize;
        let pos = instr.payload(1).as_u32() as usize;

        let buf = self.req_buffer(bi)?;
        let tag = buf.tag();
        if tag == BufferTag::Void {
            return Err(VmStatus::TypeMismatch);
        }
        if pos >= buf.capacity() {
            return Err(VmStatus::InvalidBufferPos);
        }

        let value = match tag {
            BufferTag::Void => unreachable!("checked above"),
            BufferTag::U8 => Value::U32(buf.read_u8(pos) as u32),
            BufferTag::U16 => Value::U32(buf.read_u16(pos) as u32),
            BufferTag::U32 => Value::U32(buf.read_u32(pos)),
            BufferTag::I32 => Value::I32(buf.read_i32(pos)),
            BufferTag::F32 => Value::F32(buf.read_f32(pos)),
        };
        self.req_set_stack_var(dest, value)
    }

    /// `U8`/`U16` destinations accept a `U32` or `I32` source, narrowing to
    /// the buffer's element width; `I32`/`U32`/`F32` destinations require an
    /// exact tag match.
    ///
    /// A `Void` buffer has its tag set implicitly from the source value's
    /// own tag (`U32`/`I32`/`F32`) on first write — the policy this core
    /// picks for the open "first write to a `Void` buffer" question (see
    /// `DESIGN.md`). `U8`/`U16` buffers are instead brought into existence
    /// by the string opcodes, which set `U8` explicitly.
    pub(super) fn exec_buf_write(&mut self, instr: &Instruction) -> VmResult<()> {
        let src = instr.operand() as usize;
        let bi = instr.payload(0).as_u32() as usize;
        let pos = instr.payload(1).as_u32() as usize;
        let value = self.req_stack_var(src)?;

        let buf = self.req_buffer_mut(bi)?;
        let was_void = buf.tag() == BufferTag::Void;
        let tag = if was_void {
            match value {
                Value::U32(_) => BufferTag::U32,
                Value::I32(_) => BufferTag::I32,
                Value::F32(_) => BufferTag::F32,
                _ => return Err(VmStatus::TypeMismatch),
            }
        } else {
            buf.tag()
        };
        if pos >= tag.capacity() {
            return Err(VmStatus::InvalidBufferPos);
        }
        if was_void {
            buf.set_tag(tag);
        }

        match (tag, value) {
            (BufferTag::U8, Value::U32(v)) => buf.write_u8(pos, v as u8),
            (BufferTag::U8, Value::I32(v)) => buf.write_u8(pos, v as u8),
            (BufferTag::U16, Value::U32(v)) => buf.write_u16(pos, v as u16),
            (BufferTag::U16, Value::I32(v)) => buf.write_u16(pos, v as u16),
            (BufferTag::I32, Value::I32(v)) => buf.write_i32(pos, v),
            (BufferTag::U32, Value::U32(v)) => buf.write_u32(pos, v),
            (BufferTag::F32, Value::F32(v)) => buf.write_f32(pos, v),
            _ => return Err(VmStatus::TypeMismatch),
        }
        Ok(())
    }

    pub(super) fn exec_buf_len(&mut self, instr: &Instruction) -> VmResult<()> {
        let dest = instr.operand() as usize;
        let bi = instr.payload(0).as_u32() as usize;
        let cap = self.req_buffer(bi)?.capacity() as u32;
        self.req_set_stack_var(dest, Value::U32(cap))
    }

    /// Zeroes the buffer's storage; the tag is retained.
    pub(super) fn exec_buf_clear(&mut self, instr: &Instruction) -> VmResult<()> {
        let bi = instr.operand() as usize;
        self.req_buffer_mut(bi)?.clear();
        Ok(())
    }
}
