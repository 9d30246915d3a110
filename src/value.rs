//! The tagged value sum type.
//!
//! A [`Value`] is a discriminated union: the active Rust enum arm *is* the
//! tag, so there is no way to read a payload that doesn't match it. This
//! replaces the C-style "tag byte + untagged union" representation the
//! original design used, where a caller could forge a read of the wrong
//! variant.

use core::fmt;

/// A single tagged value slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// Unused slot.
    #[default]
    Void,
    I32(i32),
    U32(u32),
    F32(f32),
    U8x4([u8; 4]),
    U16x2([u16; 2]),
    /// Unicode codepoint, signed by convention.
    UChar(i32),
    /// Index into the global table.
    GlobalRef(u32),
    /// Index into a frame's stack-var array.
    StackRef { frame: u16, var: u16 },
    /// Index into the buffer pool.
    BufRef(u32),
    /// Element position within a buffer.
    BufPos(u32),
}

impl Value {
    /// Short, stable name of the active variant; used by diagnostics.
    pub const fn tag_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::I32(_) => "i32",
            Value::U32(_) => "u32",
            Value::F32(_) => "f32",
            Value::U8x4(_) => "u8x4",
            Value::U16x2(_) => "u16x2",
            Value::UChar(_) => "uchar",
            Value::GlobalRef(_) => "global_ref",
            Value::StackRef { .. } => "stack_ref",
            Value::BufRef(_) => "buf_ref",
            Value::BufPos(_) => "buf_pos",
        }
    }

    /// Narrow accessor for the `I32` arm.
    pub const fn as_i32(&self) -> Option<i32> {
        match self {
            Value::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Narrow accessor for the `U32` arm.
    pub const fn as_u32(&self) -> Option<u32> {
        match self {
            Value::U32(v) => Some(*v),
            _ => None,
        }
    }

    /// Narrow accessor for the `F32` arm.
    pub const fn as_f32(&self) -> Option<f32> {
        match self {
            Value::F32(v) => Some(*v),
            _ => None,
        }
    }

    /// `true` if the slot is unused.
    pub const fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "void"),
            Value::I32(v) => write!(f, "i32({v})"),
            Value::U32(v) => write!(f, "u32({v})"),
            Value::F32(v) => write!(f, "f32({v})"),
            Value::U8x4(v) => write!(f, "u8x4({v:?})"),
            Value::U16x2(v) => write!(f, "u16x2({v:?})"),
            Value::UChar(v) => write!(f, "uchar({v})"),
            Value::GlobalRef(v) => write!(f, "global_ref({v})"),
            Value::StackRef { frame, var } => write!(f, "stack_ref({frame}:{var})"),
            Value::BufRef(v) => write!(f, "buf_ref({v})"),
            Value::BufPos(v) => write!(f, "buf_pos({v})"),
        }
    }
}
