//! Implementation of the `mf parse` command.

use miette::miette;

use super::FormatterArgs;
use crate::output::PatternDiagnostic;

/// Arguments for the parse command.
#[derive(Debug, clap::Args)]
pub struct ParseArgs {
    /// Pattern to parse
    pub pattern: String,

    #[command(flatten)]
    pub formatter: FormatterArgs,

    /// Print compact JSON on one line
    #[arg(long)]
    pub compact: bool,
}

/// Run the parse command.
pub fn run_parse(args: ParseArgs) -> miette::Result<i32> {
    let mf = args.formatter.build()?;
    let message = mf
        .parse(&args.pattern)
        .map_err(|e| PatternDiagnostic::from_parse_error(&args.pattern, &e))?;

    let json = if args.compact {
        serde_json::to_string(&message)
    } else {
        serde_json::to_string_pretty(&message)
    }
    .map_err(|e| miette!("Cannot serialize syntax tree: {}", e))?;
    println!("{json}");
    Ok(exitcode::OK)
}
