//! CLI command implementations.

use std::fs;
use std::io;

use deq_common::{decode, Program, Side, StripRule};
use deq_vm::{Config, LabelTable, LineOutput, RuntimeError};

/// Execute a program file, printing its events.
pub fn run(args: &[String]) -> Result<(), i32> {
    let (input, config) = parse_options(args)?;
    let source = read_source(&input)?;

    let result = {
        let stdout = io::stdout();
        let stderr = io::stderr();
        let mut sink = LineOutput::new(stdout.lock(), stderr.lock());
        deq_vm::run_with(&source, config, &mut sink)
    };

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("error: {e}");
            Err(exit_code(&e))
        }
    }
}

/// Print the token listing and label table of a program file.
pub fn tokens(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: tokens requires an input file");
        eprintln!("Usage: deq tokens <program> [--symmetric]");
        return Err(1);
    }

    let (input, config) = parse_options(args)?;
    let source = read_source(&input)?;
    let program = Program::parse(&source);

    for (i, token) in program.tokens.iter().enumerate() {
        let d = decode(token, config.strip);
        let side = match d.side {
            Side::Left => "left",
            Side::Right => "right",
        };
        let marker = if d.is_label { "\tlabel" } else { "" };
        println!("{i}\t{side}\t{token:?}\t{:?}{marker}", d.operand);
    }

    let labels = LabelTable::build(&program).map_err(|e| {
        eprintln!("error: {e}");
        exit_code(&e)
    })?;
    if !labels.is_empty() {
        println!();
        println!("labels:");
        for (name, at) in labels.sorted() {
            println!("  {name} = {at}");
        }
    }
    Ok(())
}

/// Split `<program> [--trace] [--symmetric] [--max-steps N]`.
fn parse_options(args: &[String]) -> Result<(String, Config), i32> {
    let mut input = None;
    let mut config = Config::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--trace" => config.trace = true,
            "--symmetric" => config.strip = StripRule::LabelOnly,
            "--max-steps" => {
                let value = iter.next().ok_or_else(|| {
                    eprintln!("error: --max-steps requires a value");
                    1
                })?;
                let limit = value.parse::<u64>().map_err(|_| {
                    eprintln!("error: invalid step limit '{value}'");
                    1
                })?;
                config.max_steps = Some(limit);
            }
            other if other.starts_with("--") => {
                eprintln!("error: unknown option '{other}'");
                return Err(1);
            }
            path => {
                if input.is_some() {
                    eprintln!("error: unexpected argument '{path}'");
                    return Err(1);
                }
                input = Some(path.to_string());
            }
        }
    }

    let input = input.ok_or_else(|| {
        eprintln!("error: missing program file");
        1
    })?;
    Ok((input, config))
}

fn read_source(input: &str) -> Result<String, i32> {
    fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })
}

fn exit_code(e: &RuntimeError) -> i32 {
    match e {
        RuntimeError::DuplicateLabel { .. } => 2,
        _ => 3,
    }
}
