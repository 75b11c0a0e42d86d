//! Tree-walking interpreter for rill.
//!
//! Executes an analyzed program against a call stack of activation records.
//! Control flow (`give`, `skip`, `stop`) travels as an explicit [`Flow`]
//! result from block execution to the construct that consumes it, never as
//! host-level unwinding.
//!
//! Frames do not chain: a call seeds its frame with a copy of the caller's
//! members and binds parameters over them, so identifier lookup is always a
//! single-frame read.

mod error;
mod flow;
mod frame;
mod interp;
mod ops;
mod output;
mod value;

pub use error::RuntimeError;
pub use flow::Flow;
pub use frame::{ActivationRecord, CallStack, FrameKind};
pub use interp::{interpret_with, Interpreter};
pub use output::{OutputSink, StdoutSink};
pub use value::Value;

use rill_ir::Program;

/// Run `program` with `show` printing to stdout.
pub fn interpret(program: &Program) -> Result<(), RuntimeError> {
    let mut out = StdoutSink;
    interpret_with(program, &mut out)
}

#[cfg(test)]
mod tests;
