//! `dump_state`: a `Debug`-flavored snapshot of engine state for humans.

use std::fmt::Write as _;

use crate::io::{InputSource, OutputSink};

use super::Interpreter;

impl<O: OutputSink, I: InputSource> Interpreter<O, I> {
    /// Renders PC, SP, flags, `last_error`, and the non-`Void` slots of the
    /// current frame as a multi-line human-readable snapshot.
    pub fn dump_state(&self) -> String {
        let mut out = String::new();
        let flags = self.flags();
        let _ = writeln!(out, "pc:     {:#06x}", self.pc());
        let _ = writeln!(out, "sp:     {}", self.sp());
        let _ = writeln!(
            out,
            "flags:  z={} l={} g={}",
            flags.zero() as u8,
            flags.less() as u8,
            flags.greater() as u8
        );
        let _ = writeln!(out, "error:  {}", self.last_error());

        let frame = self.current_frame();
        let _ = writeln!(out, "stack_vars:");
        for (idx, v) in frame.non_void_stack_vars() {
            let _ = writeln!(out, "  s{idx} = {v}");
        }
        let _ = writeln!(out, "locals:");
        for (idx, v) in frame.non_void_locals() {
            let _ = writeln!(out, "  l{idx} = {v}");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::Interpreter;
    use crate::io::{MemorySink, MemorySource};

    #[test]
    fn dump_state_reports_pc_sp_and_error() {
        let vm: Interpreter<MemorySink, MemorySource> = Interpreter::new();
        let dump = vm.dump_state();
        assert!(dump.contains("pc:"));
        assert!(dump.contains("sp:     0"));
        assert!(dump.contains("error:  ok"));
    }
}
