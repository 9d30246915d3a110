//! Deterministic bytecode interpreter for a safety-critical shell-like
//! scripting language.
//!
//! The engine consumes a flat byte array of bytecode and exposes
//! step/run/state-inspection operations. It performs no dynamic allocation
//! beyond its own fixed-size tables, recurses nowhere, and runs strictly
//! single-threaded: every opcode validates its operands exhaustively before
//! touching any state.
//!
//! The source-language frontend, assembler/disassembler tooling, and
//! command-line driver are external collaborators; this crate is the
//! execution core they build on. A minimal driver binary ships under
//! `src/bin` as the ambient example of that surface.

pub mod buffer;
pub mod consts;
pub mod disassemble;
pub mod error;
pub mod flags;
pub mod frame;
pub mod instruction;
pub mod interpreter;
pub mod io;
pub mod opcode;
pub mod value;

pub use buffer::{Buffer, BufferTag};
pub use disassemble::disassemble;
pub use error::{VmResult, VmStatus};
pub use flags::Flags;
pub use frame::Frame;
pub use interpreter::Interpreter;
pub use io::{InputSource, MemorySink, MemorySource, OutputSink, Stdin, Stdout};
pub use opcode::Opcode;
pub use value::Value;
