//! rill driver library.
//!
//! Glues the pipeline crates together behind three entry points (scan+parse,
//! check, run) and hosts the CLI command implementations. The pipeline is
//! fail-fast: the first diagnostic from any stage stops the run.

pub mod commands;
mod pipeline;

pub use pipeline::{check_source, parse_source, run_source, run_source_with};

#[cfg(test)]
mod tests;
