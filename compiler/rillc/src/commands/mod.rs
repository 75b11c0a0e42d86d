//! CLI command implementations.

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use run::run_file;

/// Read a source file, or report the failure and exit.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            std::process::exit(1);
        }
    }
}
