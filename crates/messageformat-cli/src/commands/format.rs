//! Implementation of the `mf format` command.

use messageformat::FormatError;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::{FormatterArgs, bindings, parse_key_val};
use crate::output::PatternDiagnostic;

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Pattern to format
    pub pattern: String,

    #[command(flatten)]
    pub formatter: FormatterArgs,

    /// Named arguments in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Positional arguments, bound to {0}, {1}, ... in order (repeatable)
    #[arg(short = 'a', long = "arg")]
    pub args: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for format results.
#[derive(Serialize)]
pub struct FormatResult {
    pub result: String,
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> miette::Result<i32> {
    let mf = args.formatter.build()?;
    let bindings = bindings(args.params, &args.args);

    match mf.format_named(&args.pattern, &bindings) {
        Ok(result) => {
            if args.json {
                let output = FormatResult { result };
                let text = serde_json::to_string_pretty(&output)
                    .map_err(|e| miette::miette!("Cannot serialize result: {}", e))?;
                println!("{text}");
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(FormatError::Parse(e)) => {
            Err(PatternDiagnostic::from_parse_error(&args.pattern, &e).into())
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!("{output:#}");
            } else {
                eprintln!(
                    "{} {}",
                    "Formatting error:".if_supports_color(Stream::Stderr, |t| t.red()),
                    e
                );
            }
            Ok(exitcode::DATAERR)
        }
    }
}
