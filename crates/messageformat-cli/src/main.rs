//! MessageFormat CLI entry point.
//!
//! Provides command-line tools for working with MessageFormat patterns:
//! - `mf format` - Format a pattern with arguments
//! - `mf parse` - Print the syntax tree of a pattern
//! - `mf compile` - Print or render the compiled program of a pattern
//! - `mf operands` - Show plural operands and categories of numbers

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CompileArgs, FormatArgs, OperandsArgs, ParseArgs, run_compile, run_format, run_operands,
    run_parse,
};
use tracing_subscriber::EnvFilter;

/// MessageFormat pattern tools.
#[derive(Debug, Parser)]
#[command(name = "mf")]
#[command(about = "ICU MessageFormat pattern tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format a pattern with named or positional arguments
    Format(FormatArgs),
    /// Print the syntax tree of a pattern as JSON
    Parse(ParseArgs),
    /// Print the compiled program of a pattern, or render it
    Compile(CompileArgs),
    /// Show plural operands and categories of numbers
    Operands(OperandsArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Format(args) => run_format(args),
        Commands::Parse(args) => run_parse(args),
        Commands::Compile(args) => run_compile(args),
        Commands::Operands(args) => run_operands(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
