//! Scope-aware semantic analysis for rill.
//!
//! A single tree walk over the parsed program that validates every
//! declaration and reference against a chain of nested scopes. The walk is
//! side-effect free with respect to the tree: it either accepts the program
//! unchanged or fails with the first violation found.
//!
//! Scopes live in an index-addressed arena used as a stack: entering a
//! block pushes a scope whose parent is the current index, leaving pops it.
//! A scope therefore lives exactly as long as the traversal is inside it.

mod analyzer;
mod error;
mod scope;

pub use analyzer::Analyzer;
pub use error::SemError;
pub use scope::{Scope, ScopeArena, ScopeId, ScopeKind, Symbol};

use rill_ir::Program;
use tracing::debug;

/// Validate a whole program.
///
/// Fails on the first semantic violation; the tree is never modified.
pub fn analyze(program: &Program) -> Result<(), SemError> {
    Analyzer::new().analyze(program)?;
    debug!("semantic analysis passed");
    Ok(())
}

#[cfg(test)]
mod tests;
