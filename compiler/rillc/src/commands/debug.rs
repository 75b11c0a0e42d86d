//! Debug dumps: `lex` prints the token stream, `parse` the tree.

use super::read_file;
use crate::parse_source;

/// Print one token per line.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    match rill_lexer::tokenize(&source) {
        Ok(tokens) => {
            for token in tokens {
                println!("{token:?}");
            }
        }
        Err(err) => {
            eprintln!("{}", err.to_diagnostic());
            std::process::exit(1);
        }
    }
}

/// Print the parsed tree.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    match parse_source(&source) {
        Ok(program) => println!("{program:#?}"),
        Err(diagnostic) => {
            eprintln!("{diagnostic}");
            std::process::exit(1);
        }
    }
}
