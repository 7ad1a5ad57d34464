use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the calculation result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with plate diagram
    Text,
    /// Pretty-printed JSON of input and result
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "bolt_cli")]
#[command(about = "Design of steel structures: bolted connections (IS 800)")]
pub struct CliArgs {
    /// Read a JSON connection input instead of prompting
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Do not draw the plate diagram")]
    pub no_diagram: bool,

    #[arg(long, help = "List the code clauses behind each formula")]
    pub references: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["bolt_cli"]).unwrap();
        assert!(args.input.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.no_diagram);
        assert!(!args.references);
    }

    #[test]
    fn test_batch_json() {
        let args =
            CliArgs::try_parse_from(["bolt_cli", "--input", "splice.json", "--format", "json", "-v"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("splice.json")));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.verbose);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliArgs::try_parse_from(["bolt_cli", "--format", "xml"]).is_err());
    }
}
