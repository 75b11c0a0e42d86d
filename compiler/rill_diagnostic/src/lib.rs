//! Diagnostics for the rill pipeline.
//!
//! Every stage error carries an [`ErrorCode`] identifying what went wrong and
//! converts into a [`Diagnostic`] for rendering. The pipeline is strictly
//! fail-fast: each stage reports the first problem it finds and stops, so a
//! diagnostic is always a single error, never a batch.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Stage};
pub use error_code::ErrorCode;
