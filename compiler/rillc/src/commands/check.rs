//! The `check` command: run the front half of the pipeline, don't execute.

use super::read_file;
use crate::check_source;

/// Scan, parse, and analyze a file, reporting success or the first
/// diagnostic.
pub fn check_file(path: &str) {
    let source = read_file(path);
    match check_source(&source) {
        Ok(_) => println!("{path}: ok"),
        Err(diagnostic) => {
            eprintln!("{diagnostic}");
            std::process::exit(1);
        }
    }
}
