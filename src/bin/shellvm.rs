//! Minimal driver binary: loads a bytecode file, runs it to completion, and
//! maps the terminal status to a process exit code.
//!
//! This is illustrative scaffolding around the engine (§6's "Driver
//! surface"), not the frontend/assembler tooling the engine treats as an
//! external collaborator.

use std::process::ExitCode;

use anyhow::{Context, Result};
use shellvm::{Interpreter, Stdin, Stdout, VmStatus};

fn main() -> ExitCode {
    match run() {
        Ok(VmStatus::Ok) => ExitCode::SUCCESS,
        Ok(status) => {
            eprintln!("shellvm: {}", status.message());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("shellvm: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<VmStatus> {
    let path = std::env::args()
        .nth(1)
        .context("usage: shellvm <bytecode-file>")?;
    let bytecode = std::fs::read(&path).with_context(|| format!("reading {path}"))?;

    let mut vm: Interpreter<Stdout, Stdin> = Interpreter::new();
    vm.load_program(&bytecode)
        .map_err(|status| anyhow::anyhow!("{}", status.message()))
        .context("loading bytecode")?;

    match vm.run() {
        Ok(()) => Ok(VmStatus::Ok),
        Err(status) => Ok(status),
    }
}
