//! String handlers: `STR_CAT`/`STR_COPY`/`STR_LEN`/`STR_CMP`/`STR_CHR`/`STR_SET_CHR`.
//!
//! Strings are just `U8` buffers, NUL-terminated, capped at
//! [`crate::consts::MAX_STRING_LEN`] characters. Every opcode here requires
//! its source buffer(s) to carry tag `U8`; anything else is a type error.

use crate::buffer::BufferTag;
use crate::consts::MAX_STRING_LEN;
use crate::error::{VmResult, VmStatus};
use crate::instruction::Instruction;
use crate::io::{InputSource, OutputSink};
use crate::value::Value;

use super::Interpreter;

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    fn req_u8_buffer(&self, bi: usize) -> VmResult<&crate::buffer::Buffer> {
        let buf = self.req_buffer(bi)?;
        if buf.tag() != BufferTag::U8 {
            return Err(VmStatus::TypeMismatch);
        }
        Ok(buf)
    }

    /// `STR_CAT dest, a, b`: both sources must be `U8` buffers. Truncates the
    /// concatenation to `MAX_STRING_LEN` bytes plus terminator.
    pub(super) fn exec_str_cat(&mut self, instr: &Instruction) -> VmResult<()> {
        let dest = instr.operand() as usize;
        let a = instr.payload(0).as_u32() as usize;
        let b = instr.payload(1).as_u32() as usize;

        let a_buf = self.req_u8_buffer(a)?;
        let a_len = a_buf.str_len();
        let mut bytes = Vec::with_capacity(a_len);
        for i in 0..a_len {
            bytes.push(a_buf.read_u8(i));
        }

        let b_buf = self.req_u8_buffer(b)?;
        let b_len = b_buf.str_len();
        for i in 0..b_len {
            bytes.push(b_buf.read_u8(i));
        }
        bytes.truncate(MAX_STRING_LEN);

        let dest_buf = self.req_buffer_mut(dest)?;
        dest_buf.set_tag(BufferTag::U8);
        for (i, byte) in bytes.iter().enumerate() {
            dest_buf.write_u8(i, *byte);
        }
        Ok(())
    }

    /// `STR_COPY dest, src`: copies bytes up to and including the NUL
    /// terminator. Guarantees a terminator at position `MAX_STRING_LEN` if
    /// `src` was unterminated within its storage.
    pub(super) fn exec_str_copy(&mut self, instr: &Instruction) -> VmResult<()> {
        let dest = instr.operand() as usize;
        let src = instr.payload(0).as_u32() as usize;

        let src_buf = self.req_u8_buffer(src)?;
        let len = src_buf.str_len();
        let mut bytes = Vec::with_capacity(len);
        for i in 0..len {
            bytes.push(src_buf.read_u8(i));
        }

        let dest_buf = self.req_buffer_mut(dest)?;
        dest_buf.set_tag(BufferTag::U8);
        for (i, byte) in bytes.iter().enumerate() {
            dest_buf.write_u8(i, *byte);
        }
        dest_buf.write_u8(MAX_STRING_LEN, 0);
        Ok(())
    }

    pub(super) fn exec_str_len(&mut self, instr: &Instruction) -> VmResult<()> {
        let dest = instr.operand() as usize;
        let bi = instr.payload(0).as_u32() as usize;
        let len = self.req_u8_buffer(bi)?.str_len() as u32;
        self.req_set_stack_var(dest, Value::U32(len))
    }

    /// Lexicographic unsigned byte compare up to the first differing byte or
    /// shared NUL.
    pub(super) fn exec_str_cmp(&mut self, instr: &Instruction) -> VmResult<()> {
        let a = instr.operand() as usize;
        let b = instr.payload(0).as_u32() as usize;

        let a_buf = self.req_u8_buffer(a)?;
        let a_len = a_buf.str_len();
        let a_bytes: Vec<u8> = (0..a_len).map(|i| a_buf.read_u8(i)).collect();

        let b_buf = self.req_u8_buffer(b)?;
        let b_len = b_buf.str_len();
        let b_bytes: Vec<u8> = (0..b_len).map(|i| b_buf.read_u8(i)).collect();

        let ordering = a_bytes.cmp(&b_bytes);
        self.flags.set_cmp(
            ordering == std::cmp::Ordering::Equal,
            ordering == std::cmp::Ordering::Less,
            ordering == std::cmp::Ordering::Greater,
        );
        Ok(())
    }

    pub(super) fn exec_str_chr(&mut self, instr: &Instruction) -> VmResult<()> {
        let dest = instr.operand() as usize;
        let bi = instr.payload(0).as_u32() as usize;
        let pos = instr.payload(1).as_u32() as usize;

        let buf = self.req_u8_buffer(bi)?;
        if pos >= buf.capacity() {
            return Err(VmStatus::InvalidBufferPos);
        }
        let byte = buf.read_u8(pos) as u32;
        self.req_set_stack_var(dest, Value::U32(byte))
    }

    pub(super) fn exec_str_set_chr(&mut self, instr: &Instruction) -> VmResult<()> {
        let bi = instr.operand() as usize;
        let pos = instr.payload(0).as_u32() as usize;
        let c = instr.payload(1).as_u32();

        let buf = self.req_buffer_mut(bi)?;
        let was_void = buf.tag() == BufferTag::Void;
        if !was_void && buf.tag() != BufferTag::U8 {
            return Err(VmStatus::TypeMismatch);
        }
        if pos >= BufferTag::U8.capacity() {
            return Err(VmStatus::InvalidBufferPos);
        }
        if was_void {
            buf.set_tag(BufferTag::U8);
        }
        buf.write_u8(pos, (c & 0xFF) as u8);
        Ok(())
    }
}
