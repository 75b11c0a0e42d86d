//! rill CLI.

use rillc::commands::{check_file, lex_file, parse_file, run_file};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RILL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    eprintln!("Usage: rill <command> <file.rl>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  check    scan, parse, and analyze a file");
    eprintln!("  run      check a file, then execute it");
    eprintln!("  lex      print the token stream");
    eprintln!("  parse    print the syntax tree");
    eprintln!();
    eprintln!("Set RILL_LOG (e.g. RILL_LOG=debug) for pipeline tracing.");
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        print_usage();
        std::process::exit(2);
    }

    let command = args[1].as_str();
    let path = args[2].as_str();

    match command {
        "check" => check_file(path),
        "run" => run_file(path),
        "lex" => lex_file(path),
        "parse" => parse_file(path),
        _ => {
            eprintln!("error: unknown command '{command}'");
            print_usage();
            std::process::exit(2);
        }
    }
}
