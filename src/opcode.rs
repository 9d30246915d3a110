//! The opcode enumeration and its wire-value mapping.
//!
//! Gaps in the numeric ranges are intentionally reserved; any opcode byte
//! that doesn't match a declared variant is rejected by [`Opcode::try_from`]
//! before dispatch ever sees it.

use crate::consts::MAX_OPCODE;
use crate::error::VmStatus;

/// One opcode, named per its mnemonic.
///
/// | Operation   | Encoding |
/// |-------------|----------|
/// Control flow, loads/stores, arithmetic, bitwise, comparison, conversion,
/// buffer, string, and I/O opcodes each occupy their own numeric range; see
/// the module-level doc and `SPEC_FULL.md` §6 for the full map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Nop = 0x00,
    Halt = 0x01,
    Jmp = 0x02,
    Jz = 0x03,
    Jnz = 0x04,
    Jlt = 0x05,
    Jgt = 0x06,
    Jle = 0x07,
    Jge = 0x08,
    Call = 0x09,
    Ret = 0x0A,

    LoadG = 0x10,
    LoadL = 0x11,
    LoadS = 0x12,
    LoadII32 = 0x13,
    LoadIU32 = 0x14,
    LoadIF32 = 0x15,
    LoadRet = 0x16,

    StoreG = 0x20,
    StoreL = 0x21,
    StoreS = 0x22,
    StoreRet = 0x23,

    AddI32 = 0x30,
    SubI32 = 0x31,
    MulI32 = 0x32,
    DivI32 = 0x33,
    ModI32 = 0x34,
    NegI32 = 0x35,
    AddU32 = 0x36,
    SubU32 = 0x37,
    MulU32 = 0x38,
    DivU32 = 0x39,
    ModU32 = 0x3A,

    AddF32 = 0x40,
    SubF32 = 0x41,
    MulF32 = 0x42,
    DivF32 = 0x43,
    NegF32 = 0x44,
    AbsF32 = 0x45,
    SqrtF32 = 0x46,

    AndU32 = 0x50,
    OrU32 = 0x51,
    XorU32 = 0x52,
    NotU32 = 0x53,
    ShlU32 = 0x54,
    ShrU32 = 0x55,

    CmpI32 = 0x60,
    CmpU32 = 0x61,
    CmpF32 = 0x62,

    I32ToU32 = 0x70,
    U32ToI32 = 0x71,
    I32ToF32 = 0x72,
    F32ToI32 = 0x73,
    U32ToF32 = 0x74,
    F32ToU32 = 0x75,

    BufRead = 0x80,
    BufWrite = 0x81,
    BufLen = 0x82,
    BufClear = 0x83,

    StrCat = 0x90,
    StrCopy = 0x91,
    StrLen = 0x92,
    StrCmp = 0x93,
    StrChr = 0x94,
    StrSetChr = 0x95,

    PrintI32 = 0xA0,
    PrintU32 = 0xA1,
    PrintF32 = 0xA2,
    PrintStr = 0xA3,
    Println = 0xA4,
    ReadI32 = 0xA5,
    ReadU32 = 0xA6,
    ReadF32 = 0xA7,
    ReadStr = 0xA8,
}

impl Opcode {
    /// Stable mnemonic, used by the disassembler and error diagnostics.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::Halt => "HALT",
            Opcode::Jmp => "JMP",
            Opcode::Jz => "JZ",
            Opcode::Jnz => "JNZ",
            Opcode::Jlt => "JLT",
            Opcode::Jgt => "JGT",
            Opcode::Jle => "JLE",
            Opcode::Jge => "JGE",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::LoadG => "LOAD_G",
            Opcode::LoadL => "LOAD_L",
            Opcode::LoadS => "LOAD_S",
            Opcode::LoadII32 => "LOAD_I_I32",
            Opcode::LoadIU32 => "LOAD_I_U32",
            Opcode::LoadIF32 => "LOAD_I_F32",
            Opcode::LoadRet => "LOAD_RET",
            Opcode::StoreG => "STORE_G",
            Opcode::StoreL => "STORE_L",
            Opcode::StoreS => "STORE_S",
            Opcode::StoreRet => "STORE_RET",
            Opcode::AddI32 => "ADD_I32",
            Opcode::SubI32 => "SUB_I32",
            Opcode::MulI32 => "MUL_I32",
            Opcode::DivI32 => "DIV_I32",
            Opcode::ModI32 => "MOD_I32",
            Opcode::NegI32 => "NEG_I32",
            Opcode::AddU32 => "ADD_U32",
            Opcode::SubU32 => "SUB_U32",
            Opcode::MulU32 => "MUL_U32",
            Opcode::DivU32 => "DIV_U32",
            Opcode::ModU32 => "MOD_U32",
            Opcode::AddF32 => "ADD_F32",
            Opcode::SubF32 => "SUB_F32",
            Opcode::MulF32 => "MUL_F32",
            Opcode::DivF32 => "DIV_F32",
            Opcode::NegF32 => "NEG_F32",
            Opcode::AbsF32 => "ABS_F32",
            Opcode::SqrtF32 => "SQRT_F32",
            Opcode::AndU32 => "AND_U32",
            Opcode::OrU32 => "OR_U32",
            Opcode::XorU32 => "XOR_U32",
            Opcode::NotU32 => "NOT_U32",
            Opcode::ShlU32 => "SHL_U32",
            Opcode::ShrU32 => "SHR_U32",
            Opcode::CmpI32 => "CMP_I32",
            Opcode::CmpU32 => "CMP_U32",
            Opcode::CmpF32 => "CMP_F32",
            Opcode::I32ToU32 => "I32_TO_U32",
            Opcode::U32ToI32 => "U32_TO_I32",
            Opcode::I32ToF32 => "I32_TO_F32",
            Opcode::F32ToI32 => "F32_TO_I32",
            Opcode::U32ToF32 => "U32_TO_F32",
            Opcode::F32ToU32 => "F32_TO_U32",
            Opcode::BufRead => "BUF_READ",
            Opcode::BufWrite => "BUF_WRITE",
            Opcode::BufLen => "BUF_LEN",
            Opcode::BufClear => "BUF_CLEAR",
            Opcode::StrCat => "STR_CAT",
            Opcode::StrCopy => "STR_COPY",
            Opcode::StrLen => "STR_LEN",
            Opcode::StrCmp => "STR_CMP",
            Opcode::StrChr => "STR_CHR",
            Opcode::StrSetChr => "STR_SET_CHR",
            Opcode::PrintI32 => "PRINT_I32",
            Opcode::PrintU32 => "PRINT_U32",
            Opcode::PrintF32 => "PRINT_F32",
            Opcode::PrintStr => "PRINT_STR",
            Opcode::Println => "PRINTLN",
            Opcode::ReadI32 => "READ_I32",
            Opcode::ReadU32 => "READ_U32",
            Opcode::ReadF32 => "READ_F32",
            Opcode::ReadStr => "READ_STR",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = VmStatus;

    fn try_from(b: u8) -> Result<Self, VmStatus> {
        use Opcode::*;
        if b > MAX_OPCODE {
            return Err(VmStatus::InvalidOpcode);
        }
        Ok(match b {
            0x00 => Nop,
            0x01 => Halt,
            0x02 => Jmp,
            0x03 => Jz,
            0x04 => Jnz,
            0x05 => Jlt,
            0x06 => Jgt,
            0x07 => Jle,
            0x08 => Jge,
            0x09 => Call,
            0x0A => Ret,
            0x10 => LoadG,
            0x11 => LoadL,
            0x12 => LoadS,
            0x13 => LoadII32,
            0x14 => LoadIU32,
            0x15 => LoadIF32,
            0x16 => LoadRet,
            0x20 => StoreG,
            0x21 => StoreL,
            0x22 => StoreS,
            0x23 => StoreRet,
            0x30 => AddI32,
            0x31 => SubI32,
            0x32 => MulI32,
            0x33 => DivI32,
            0x34 => ModI32,
            0x35 => NegI32,
            0x36 => AddU32,
            0x37 => SubU32,
            0x38 => MulU32,
            0x39 => DivU32,
            0x3A => ModU32,
            0x40 => AddF32,
            0x41 => SubF32,
            0x42 => MulF32,
            0x43 => DivF32,
            0x44 => NegF32,
            0x45 => AbsF32,
            0x46 => SqrtF32,
            0x50 => AndU32,
            0x51 => OrU32,
            0x52 => XorU32,
            0x53 => NotU32,
            0x54 => ShlU32,
            0x55 => ShrU32,
            0x60 => CmpI32,
            0x61 => CmpU32,
            0x62 => CmpF32,
            0x70 => I32ToU32,
            0x71 => U32ToI32,
            0x72 => I32ToF32,
            0x73 => F32ToI32,
            0x74 => U32ToF32,
            0x75 => F32ToU32,
            0x80 => BufRead,
            0x81 => BufWrite,
            0x82 => BufLen,
            0x83 => BufClear,
            0x90 => StrCat,
            0x91 => StrCopy,
            0x92 => StrLen,
            0x93 => StrCmp,
            0x94 => StrChr,
            0x95 => StrSetChr,
            0xA0 => PrintI32,
            0xA1 => PrintU32,
            0xA2 => PrintF32,
            0xA3 => PrintStr,
            0xA4 => Println,
            0xA5 => ReadI32,
            0xA6 => ReadU32,
            0xA7 => ReadF32,
            0xA8 => ReadStr,
            _ => return Err(VmStatus::InvalidOpcode),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reserved_opcode() {
        assert_eq!(Opcode::try_from(0xA9), Err(VmStatus::InvalidOpcode));
        assert_eq!(Opcode::try_from(0xFF), Err(VmStatus::InvalidOpcode));
    }

    #[test]
    fn rejects_gap_within_range() {
        // 0x0B is in the 0x00-0x0A range's neighborhood but not assigned.
        assert_eq!(Opcode::try_from(0x0B), Err(VmStatus::InvalidOpcode));
    }

    #[test]
    fn round_trips_every_declared_opcode() {
        let bytes = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15,
            0x16, 0x20, 0x21, 0x22, 0x23, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x3A, 0x40,
            0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x60, 0x61, 0x62, 0x70, 0x71,
            0x72, 0x73, 0x74, 0x75, 0x80, 0x81, 0x82, 0x83, 0x90, 0x91, 0x92, 0x93, 0x94, 0x95, 0xA0, 0xA1, 0xA2,
            0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8,
        ];
        for b in bytes {
            let op = Opcode::try_from(b).unwrap_or_else(|_| panic!("byte {b:#04x} should decode"));
            assert_eq!(op as u8, b);
        }
    }
}
