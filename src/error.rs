//! The exhaustive status/error taxonomy returned by `step`.

use thiserror::Error;

/// Status of the most recently executed instruction.
///
/// `Halt` is the only variant that represents normal termination; `run`
/// folds it into `Ok(())` at its boundary. Every other non-`Ok` variant is a
/// well-formed, recoverable description of why an instruction was rejected
/// before any state (other than `last_error`) was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VmStatus {
    /// Execution may proceed; the instruction completed normally.
    #[error("ok")]
    Ok,

    /// `HALT` was executed. Normal termination, folded to `Ok` by `run`.
    #[error("halt")]
    Halt,

    /// The program counter does not point inside `[0, program_len)`.
    #[error("invalid program counter")]
    InvalidPc,

    /// The decoded instruction is malformed (e.g. `payload_len > 3`).
    #[error("invalid instruction encoding")]
    InvalidInstruction,

    /// The opcode byte does not name a known opcode.
    #[error("invalid opcode")]
    InvalidOpcode,

    /// A loaded program exceeds `PROGRAM_MAX` bytes.
    #[error("program exceeds maximum size")]
    ProgramTooLarge,

    /// `CALL` attempted while the frame stack was already full.
    #[error("call stack overflow")]
    StackOverflow,

    /// `RET` attempted with no active call (`sp == 0`).
    #[error("call stack underflow")]
    StackUnderflow,

    /// A global-table index was out of range.
    #[error("invalid global index")]
    InvalidGlobalIdx,

    /// A locals index was out of range.
    #[error("invalid local index")]
    InvalidLocalIdx,

    /// A stack-var (or frame) index was out of range.
    #[error("invalid stack-var index")]
    InvalidStackVarIdx,

    /// A buffer-pool index was out of range.
    #[error("invalid buffer index")]
    InvalidBufferIdx,

    /// A buffer element position was out of range for its capacity.
    #[error("invalid buffer position")]
    InvalidBufferPos,

    /// Division or modulo by zero.
    #[error("division by zero")]
    DivByZero,

    /// A generic bounds violation (e.g. shift count `>= 32`).
    #[error("operand out of bounds")]
    Bounds,

    /// An operand's tag did not match what the opcode required.
    #[error("operand type mismatch")]
    TypeMismatch,
}

impl VmStatus {
    /// Stable, human-readable diagnostic string. Distinct from the
    /// `thiserror`-derived `Display` impl only in that it is guaranteed
    /// `&'static str` for embedding in low-allocation diagnostics.
    pub const fn message(self) -> &'static str {
        match self {
            VmStatus::Ok => "ok",
            VmStatus::Halt => "halt",
            VmStatus::InvalidPc => "invalid program counter",
            VmStatus::InvalidInstruction => "invalid instruction encoding",
            VmStatus::InvalidOpcode => "invalid opcode",
            VmStatus::ProgramTooLarge => "program exceeds maximum size",
            VmStatus::StackOverflow => "call stack overflow",
            VmStatus::StackUnderflow => "call stack underflow",
            VmStatus::InvalidGlobalIdx => "invalid global index",
            VmStatus::InvalidLocalIdx => "invalid local index",
            VmStatus::InvalidStackVarIdx => "invalid stack-var index",
            VmStatus::InvalidBufferIdx => "invalid buffer index",
            VmStatus::InvalidBufferPos => "invalid buffer position",
            VmStatus::DivByZero => "division by zero",
            VmStatus::Bounds => "operand out of bounds",
            VmStatus::TypeMismatch => "operand type mismatch",
        }
    }

    /// `true` for every status other than `Ok`/`Halt`.
    pub const fn is_error(self) -> bool {
        !matches!(self, VmStatus::Ok | VmStatus::Halt)
    }
}

/// Result alias used throughout the interpreter's opcode handlers.
pub type VmResult<T> = Result<T, VmStatus>;
