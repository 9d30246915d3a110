//! Instruction header decoding.
//!
//! The header nibbles are extracted with explicit shift-and-mask
//! accessors rather than a `#[repr(packed)]` bitfield, so the layout is
//! guaranteed stable across toolchains (see `DESIGN.md`).

use crate::consts::{HEADER_LEN, MAX_PAYLOAD_WORDS, WORD_LEN};
use crate::error::{VmResult, VmStatus};

/// A single payload word: four raw bytes, reinterpreted per the consuming
/// opcode handler's needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PayloadWord(pub [u8; 4]);

impl PayloadWord {
    pub fn as_u8x4(self) -> [u8; 4] {
        self.0
    }

    pub fn as_u16x2(self) -> [u16; 2] {
        [
            u16::from_ne_bytes([self.0[0], self.0[1]]),
            u16::from_ne_bytes([self.0[2], self.0[3]]),
        ]
    }

    pub fn as_u32(self) -> u32 {
        u32::from_ne_bytes(self.0)
    }

    pub fn as_i32(self) -> i32 {
        i32::from_ne_bytes(self.0)
    }

    pub fn as_f32(self) -> f32 {
        f32::from_ne_bytes(self.0)
    }

    /// Low byte of the word, used where a payload word carries a small slot
    /// index in its low byte.
    pub fn low_byte(self) -> u8 {
        self.0[0]
    }

    /// Interprets the word as a `{frame: u16, var: u16}` stack-var reference.
    pub fn as_stack_ref(self) -> (u16, u16) {
        let [frame, var] = self.as_u16x2();
        (frame, var)
    }
}

/// A fully decoded instruction: the 4-byte header plus its payload words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    opcode: u8,
    operand: u8,
    flags: u8,
    types: u8,
    payload: [PayloadWord; MAX_PAYLOAD_WORDS],
    payload_len: usize,
}

impl Instruction {
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    pub const fn operand(&self) -> u8 {
        self.operand
    }

    /// Number of valid payload words (0..=3).
    pub const fn payload_len(&self) -> usize {
        self.payload_len
    }

    /// Informational immediate-type tag for payload word 1.
    pub const fn imm_type1(&self) -> u8 {
        (self.flags >> 4) & 0x0F
    }

    /// Informational immediate-type tag for payload word 2.
    pub const fn imm_type2(&self) -> u8 {
        self.types & 0x0F
    }

    /// Informational immediate-type tag for payload word 3.
    pub const fn imm_type3(&self) -> u8 {
        (self.types >> 4) & 0x0F
    }

    /// Payload word at `idx` (0-based). Panics if `idx >= payload_len()`;
    /// handlers only ever index words their opcode table entry declares.
    pub fn payload(&self, idx: usize) -> PayloadWord {
        self.payload[idx]
    }

    /// Total encoded size of this instruction, in bytes.
    pub const fn size(&self) -> u32 {
        (HEADER_LEN + self.payload_len * WORD_LEN) as u32
    }
}

/// Decodes one instruction from `mem` at byte offset `pc`.
///
/// `program_len` bounds the valid instruction region; fetching past it is
/// always rejected, even if `mem` itself is longer (unused program memory
/// past `program_len` is not addressable by fetch).
pub fn decode(mem: &[u8], pc: u32, program_len: u32) -> VmResult<Instruction> {
    if pc >= program_len {
        return Err(VmStatus::InvalidPc);
    }

    let pc_usize = pc as usize;
    if pc_usize + HEADER_LEN > mem.len() {
        return Err(VmStatus::InvalidPc);
    }

    let opcode = mem[pc_usize];
    let operand = mem[pc_usize + 1];
    let flags = mem[pc_usize + 2];
    let types = mem[pc_usize + 3];

    let payload_len = (flags & 0x0F) as usize;
    if payload_len > MAX_PAYLOAD_WORDS {
        return Err(VmStatus::InvalidInstruction);
    }

    let size = (HEADER_LEN + payload_len * WORD_LEN) as u32;
    if pc.checked_add(size).is_none_or(|end| end > program_len) {
        return Err(VmStatus::InvalidPc);
    }

    let mut payload = [PayloadWord::default(); MAX_PAYLOAD_WORDS];
    for (i, word) in payload.iter_mut().enumerate().take(payload_len) {
        let off = pc_usize + HEADER_LEN + i * WORD_LEN;
        let bytes: [u8; 4] = mem[off..off + WORD_LEN].try_into().expect("word is 4 bytes");
        *word = PayloadWord(bytes);
    }

    Ok(Instruction {
        opcode,
        operand,
        flags,
        types,
        payload,
        payload_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(opcode: u8, operand: u8, payload_len: u8) -> [u8; 4] {
        [opcode, operand, payload_len, 0]
    }

    #[test]
    fn decodes_zero_payload_instruction() {
        let mem = header(0x01, 0, 0);
        let instr = decode(&mem, 0, mem.len() as u32).unwrap();
        assert_eq!(instr.opcode(), 0x01);
        assert_eq!(instr.payload_len(), 0);
        assert_eq!(instr.size(), 4);
    }

    #[test]
    fn decodes_payload_words() {
        let mut mem = header(0x30, 2, 2).to_vec();
        mem.extend_from_slice(&0u32.to_ne_bytes());
        mem.extend_from_slice(&1u32.to_ne_bytes());
        let instr = decode(&mem, 0, mem.len() as u32).unwrap();
        assert_eq!(instr.payload_len(), 2);
        assert_eq!(instr.payload(0).as_u32(), 0);
        assert_eq!(instr.payload(1).as_u32(), 1);
        assert_eq!(instr.size(), 12);
    }

    #[test]
    fn rejects_payload_len_over_three() {
        let mem = header(0x01, 0, 4);
        assert_eq!(decode(&mem, 0, mem.len() as u32), Err(VmStatus::InvalidInstruction));
    }

    #[test]
    fn rejects_pc_past_program_len() {
        let mem = header(0x01, 0, 0);
        assert_eq!(decode(&mem, 4, mem.len() as u32), Err(VmStatus::InvalidPc));
    }

    #[test]
    fn rejects_truncated_payload() {
        let mem = header(0x30, 0, 1);
        assert_eq!(decode(&mem, 0, mem.len() as u32), Err(VmStatus::InvalidPc));
    }
}
