//! # Bolted Connection CLI
//!
//! Terminal front end for `bolt_core`. Asks for the connection data (or
//! reads it from a JSON file), then prints the design strengths, the bolt
//! value, the required number of bolts and a sketch of the bolt layout.
//!
//! ```text
//! bolt_cli                          # interactive prompts
//! bolt_cli --input splice.json      # batch
//! bolt_cli -i splice.json --format json
//! ```

mod cli;
mod logger;
mod prompts;
mod report;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;

use bolt_core::{calculate, CalcError, CalcResult, ConnectionInput};
use cli::{CliArgs, OutputFormat};
use prompts::Prompter;

fn load_input(path: &Path) -> CalcResult<ConnectionInput> {
    let text = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn write_err(e: io::Error) -> CalcError {
    CalcError::file_error("write", "<stdout>", e.to_string())
}

/// One calculation. Prompts go to `err` when the result is JSON so that
/// `out` carries nothing but the document.
fn run<R, W, E>(args: &CliArgs, input: R, out: &mut W, err: &mut E) -> CalcResult<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let connection = match &args.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading connection input");
            load_input(path)?
        }
        None => match args.format {
            OutputFormat::Text => {
                writeln!(out, "{}", report::render_banner()).map_err(write_err)?;
                Prompter::new(input, &mut *out).read_connection_input()?
            }
            OutputFormat::Json => Prompter::new(input, &mut *err).read_connection_input()?,
        },
    };

    let result = calculate(&connection)?;
    tracing::info!(
        bolt_value_kn = result.bolt_value_kn,
        required_bolts = result.required_bolts,
        "connection designed"
    );

    match args.format {
        OutputFormat::Json => {
            writeln!(out, "{}", report::render_json(&connection, &result)?).map_err(write_err)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", report::render_report(&result)).map_err(write_err)?;
            if args.references {
                writeln!(out).map_err(write_err)?;
                write!(out, "{}", report::render_references()).map_err(write_err)?;
            }
            if !args.no_diagram {
                writeln!(out, "\n").map_err(write_err)?;
                report::write_diagram(out, result.required_bolts).map_err(write_err)?;
            }
        }
    }

    out.flush().map_err(write_err)
}

fn main() {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    let stdin = io::stdin();
    let mut stdout = io::BufWriter::new(io::stdout().lock());
    let mut stderr = io::stderr();

    if let Err(e) = run(&args, stdin.lock(), &mut stdout, &mut stderr) {
        let _ = stdout.flush();
        tracing::debug!(code = e.error_code(), "calculation aborted");
        eprintln!("Error: {}", e);
        if e.is_input_error() {
            eprintln!("Check the input values and run again.");
        }
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
