//! Host text I/O contracts.
//!
//! The engine never touches a real file descriptor directly; it calls out
//! to whatever [`OutputSink`]/[`InputSource`] the host binds in. Production
//! code binds these to stdio (see `src/bin/shellvm.rs`); tests bind them to
//! in-memory buffers so `PRINT_*`/`READ_*` opcodes are fully unit-testable.

/// A byte-oriented sink the engine writes formatted output to.
pub trait OutputSink {
    fn write_bytes(&mut self, buf: &[u8]);

    /// The line terminator byte written by `PRINTLN`.
    fn write_line_terminator(&mut self) {
        self.write_bytes(b"\n");
    }
}

/// A byte-oriented source the engine reads tokens and lines from.
pub trait InputSource {
    /// Reads one byte, or `None` at end of input.
    fn read_byte(&mut self) -> Option<u8>;
}

/// Binds [`OutputSink`] to `stdout`.
#[derive(Debug, Default)]
pub struct Stdout;

impl OutputSink for Stdout {
    fn write_bytes(&mut self, buf: &[u8]) {
        use std::io::Write;
        let _ = std::io::stdout().write_all(buf);
    }
}

/// Binds [`InputSource`] to `stdin`, one byte at a time.
#[derive(Debug, Default)]
pub struct Stdin;

impl InputSource for Stdin {
    fn read_byte(&mut self) -> Option<u8> {
        use std::io::Read;
        let mut b = [0u8; 1];
        match std::io::stdin().read(&mut b) {
            Ok(1) => Some(b[0]),
            _ => None,
        }
    }
}

/// An in-memory output sink, used by tests and embedders that want to
/// capture output rather than print it.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    buf: Vec<u8>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf).unwrap_or("")
    }
}

impl OutputSink for MemorySink {
    fn write_bytes(&mut self, buf: &[u8]) {
        self.buf.extend_from_slice(buf);
    }
}

/// An in-memory input source that replays bytes fed to it in order.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    buf: Vec<u8>,
    pos: usize,
}

impl MemorySource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { buf: data.into(), pos: 0 }
    }
}

impl InputSource for MemorySource {
    fn read_byte(&mut self) -> Option<u8> {
        let b = self.buf.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }
}
