//! Deq CLI — run and inspect Deq programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage or input error
//! - 2: Duplicate label
//! - 3: Runtime error

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "tokens" => commands::tokens(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other if other.starts_with('-') => {
            eprintln!("error: expected a program path before '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
        _ => commands::run(&args[1..]),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: deq <program> [options]");
    eprintln!("       deq tokens <program> [--symmetric]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --trace          Print each step (ip, token, deque) to stderr");
    eprintln!("  --symmetric      Strip only '!' and a trailing ':' from tokens");
    eprintln!("  --max-steps N    Abort after N executed instructions");
}
