//! The `run` command: the whole pipeline, executing on success.

use super::read_file;
use crate::run_source;

/// Check a file and, when it passes, interpret it.
pub fn run_file(path: &str) {
    let source = read_file(path);
    if let Err(diagnostic) = run_source(&source) {
        eprintln!("{diagnostic}");
        std::process::exit(1);
    }
}
