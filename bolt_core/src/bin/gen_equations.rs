//! Generate EQUATIONS.md from the bolt equation registry.
//!
//! Usage:
//!   cargo run --bin gen-equations -- [options]
//!
//! Options:
//!   --output <path>    Where to write the reference (default: bolt_core/src/equations/EQUATIONS.md)
//!   --check            Compare instead of writing; exit 1 if the file is missing or stale
//!
//! Examples:
//!   cargo run --bin gen-equations
//!   cargo run --bin gen-equations -- --check

use std::env;
use std::fs;
use std::path::PathBuf;

use bolt_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "bolt_core/src/equations/EQUATIONS.md";

#[derive(Debug, PartialEq)]
struct Options {
    output: PathBuf,
    check: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Options),
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options {
        output: PathBuf::from(DEFAULT_OUTPUT),
        check: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--check" => options.check = true,
            "--output" => {
                let path = args.get(i + 1).ok_or("--output needs a path")?;
                options.output = PathBuf::from(path);
                i += 1;
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Command::Run(options))
}

/// True when `existing` matches the freshly generated text
fn is_current(existing: Option<&str>, generated: &str) -> bool {
    existing == Some(generated)
}

fn print_usage() {
    println!("Usage: gen-equations [--output <path>] [--check]");
    println!();
    println!("  --output <path>   default: {}", DEFAULT_OUTPUT);
    println!("  --check           exit 1 if the file differs from the registry");
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(2);
        }
    };

    let markdown = generate_equations_markdown();

    if options.check {
        let existing = fs::read_to_string(&options.output).ok();
        if is_current(existing.as_deref(), &markdown) {
            println!("{} is up to date ({} equations)", options.output.display(), ALL_EQUATIONS.len());
            return;
        }
        eprintln!(
            "{} is out of date; run `cargo run --bin gen-equations` to regenerate",
            options.output.display()
        );
        std::process::exit(1);
    }

    match fs::write(&options.output, &markdown) {
        Ok(()) => {
            println!(
                "Wrote {} equations ({} bytes) to {}",
                ALL_EQUATIONS.len(),
                markdown.len(),
                options.output.display()
            );
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", options.output.display(), e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let cmd = parse_args(&[]).unwrap();
        assert_eq!(
            cmd,
            Command::Run(Options {
                output: PathBuf::from(DEFAULT_OUTPUT),
                check: false,
            })
        );
    }

    #[test]
    fn test_output_and_check() {
        let cmd = parse_args(&args(&["--check", "--output", "docs/EQ.md"])).unwrap();
        assert_eq!(
            cmd,
            Command::Run(Options {
                output: PathBuf::from("docs/EQ.md"),
                check: true,
            })
        );
    }

    #[test]
    fn test_output_without_path() {
        assert!(parse_args(&args(&["--output"])).is_err());
    }

    #[test]
    fn test_unknown_option() {
        let err = parse_args(&args(&["--pages", "1-3"])).unwrap_err();
        assert_eq!(err, "Unknown option: --pages");
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_staleness() {
        let generated = generate_equations_markdown();
        assert!(is_current(Some(&generated), &generated));
        assert!(!is_current(Some("# Old"), &generated));
        assert!(!is_current(None, &generated));
    }
}
