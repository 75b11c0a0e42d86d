//! The four-stage pipeline, as diagnostics-producing entry points.

use rill_diagnostic::Diagnostic;
use rill_eval::{interpret_with, OutputSink, StdoutSink};
use rill_ir::Program;
use tracing::debug;

/// Scan and parse, without analysis.
pub fn parse_source(source: &str) -> Result<Program, Diagnostic> {
    let tokens = rill_lexer::tokenize(source).map_err(|err| err.to_diagnostic())?;
    debug!(tokens = tokens.len(), "scanned");
    rill_parse::parse(&tokens).map_err(|err| err.to_diagnostic())
}

/// Scan, parse, and analyze. The returned tree has passed every semantic
/// rule and is safe to interpret.
pub fn check_source(source: &str) -> Result<Program, Diagnostic> {
    let program = parse_source(source)?;
    rill_sem::analyze(&program).map_err(|err| err.to_diagnostic())?;
    Ok(program)
}

/// The whole pipeline, with `show` output going to `out`.
pub fn run_source_with(source: &str, out: &mut dyn OutputSink) -> Result<(), Diagnostic> {
    let program = check_source(source)?;
    interpret_with(&program, out).map_err(|err| err.to_diagnostic())
}

/// The whole pipeline, printing to stdout.
pub fn run_source(source: &str) -> Result<(), Diagnostic> {
    let mut out = StdoutSink;
    run_source_with(source, &mut out)
}
