//! Engine sizing constants
//!
//! Every fixed-capacity table in the interpreter is sized from one of these
//! constants. Keeping them centralized means a single place pins the engine's
//! resource ceilings.

/// Number of parameter/temporary slots in a single [`crate::frame::Frame`].
pub const STACK_VARS: usize = 16;

/// Number of persistent local slots in a single [`crate::frame::Frame`].
pub const LOCALS: usize = 64;

/// Maximum call depth; also the size of the fixed frame stack.
pub const MAX_FRAMES: usize = 32;

/// Number of globally indexed [`crate::value::Value`] slots.
pub const GLOBALS: usize = 256;

/// Number of typed memory buffers in the buffer pool.
pub const BUFFERS: usize = 256;

/// Maximum loadable program size, in bytes.
pub const PROGRAM_MAX: usize = 65_536;

/// Size of an instruction header, in bytes.
pub const HEADER_LEN: usize = 4;

/// Size of a single payload word, in bytes.
pub const WORD_LEN: usize = 4;

/// Maximum number of payload words an instruction may carry.
pub const MAX_PAYLOAD_WORDS: usize = 3;

/// Element capacities per [`crate::buffer::Buffer`] tag, in element units.
pub const CAP_U8: usize = 256;
pub const CAP_U16: usize = 128;
pub const CAP_I32: usize = 64;
pub const CAP_U32: usize = 64;
pub const CAP_F32: usize = 64;

/// Byte size of the backing storage for any buffer slot (`U8` is the widest).
pub const BUFFER_STORAGE_BYTES: usize = CAP_U8;

/// Epsilon used by `CMP_F32` for equality.
pub const F32_EPSILON: f32 = 1e-6;

/// Maximum string length, not counting the NUL terminator.
pub const MAX_STRING_LEN: usize = 255;

/// Highest valid opcode; values above this are rejected at decode time.
pub const MAX_OPCODE: u8 = 0xA8;
