//! A read-only disassembler layered on top of the decoder.
//!
//! This renders a loaded program as mnemonic text for `dump_state`/debugging
//! use; it is not the assembler/disassembler *product* surface named out of
//! scope in `SPEC_FULL.md` §1 — just diagnostic tooling over the same
//! [`crate::instruction::decode`] the dispatch loop uses.

use crate::instruction::{self, PayloadWord};
use crate::opcode::Opcode;

/// Decodes every instruction in `program` and renders one mnemonic line per
/// instruction, each prefixed with its byte offset (e.g. `"0004: JZ 0010"`).
/// Decoding stops at the first malformed instruction; the offset it failed
/// at is rendered as a trailing `"<offset>: <error>"` line.
pub fn disassemble(program: &[u8]) -> Vec<String> {
    let program_len = program.len() as u32;
    let mut lines = Vec::new();
    let mut pc = 0u32;

    while pc < program_len {
        match instruction::decode(program, pc, program_len) {
            Ok(instr) => {
                let opcode = match Opcode::try_from(instr.opcode()) {
                    Ok(op) => op,
                    Err(status) => {
                        lines.push(format!("{pc:04}: {status}"));
                        break;
                    }
                };
                lines.push(format!("{pc:04}: {}", render(opcode, &instr)));
                pc += instr.size();
            }
            Err(status) => {
                lines.push(format!("{pc:04}: {status}"));
                break;
            }
        }
    }
    lines
}

fn render(opcode: Opcode, instr: &instruction::Instruction) -> String {
    let words: Vec<PayloadWord> = (0..instr.payload_len()).map(|i| instr.payload(i)).collect();
    let operand = instr.operand();
    match words.len() {
        0 => format!("{} s{operand}", opcode.mnemonic()),
        1 => format!("{} s{operand}, {}", opcode.mnemonic(), words[0].as_u32()),
        2 => format!(
            "{} s{operand}, {}, {}",
            opcode.mnemonic(),
            words[0].as_u32(),
            words[1].as_u32()
        ),
        _ => format!(
            "{} s{operand}, {}, {}, {}",
            opcode.mnemonic(),
            words[0].as_u32(),
            words[1].as_u32(),
            words[2].as_u32()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_operand_instruction() {
        let program = [0x01, 0, 0, 0]; // HALT
        let lines = disassemble(&program);
        assert_eq!(lines, vec!["0000: HALT s0"]);
    }

    #[test]
    fn renders_one_word_instruction_and_advances() {
        let mut program = vec![0x02, 0, 1, 0]; // JMP
        program.extend_from_slice(&8u32.to_ne_bytes());
        program.extend_from_slice(&[0x01, 0, 0, 0]); // HALT at offset 8
        let lines = disassemble(&program);
        assert_eq!(lines, vec!["0000: JMP s0, 8", "0008: HALT s0"]);
    }

    #[test]
    fn stops_at_invalid_opcode() {
        let program = [0xA9, 0, 0, 0];
        let lines = disassemble(&program);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("invalid opcode"));
    }
}
