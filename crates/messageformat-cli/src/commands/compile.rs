//! Implementation of the `mf compile` command.

use messageformat::CompileError;
use messageformat::compiler::escape_html;
use owo_colors::{OwoColorize, Stream};

use super::{FormatterArgs, bindings, parse_key_val};
use crate::output::PatternDiagnostic;

/// Arguments for the compile command.
#[derive(Debug, clap::Args)]
pub struct CompileArgs {
    /// Pattern to compile
    pub pattern: String,

    #[command(flatten)]
    pub formatter: FormatterArgs,

    /// Execute the program instead of printing it
    #[arg(long)]
    pub render: bool,

    /// Escape substituted values for HTML when rendering
    #[arg(long, requires = "render")]
    pub html: bool,

    /// Named arguments in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Positional arguments, bound to {0}, {1}, ... in order (repeatable)
    #[arg(short = 'a', long = "arg")]
    pub args: Vec<String>,
}

/// Run the compile command.
pub fn run_compile(args: CompileArgs) -> miette::Result<i32> {
    let mf = args.formatter.build()?;
    let program = match mf.compile(&args.pattern) {
        Ok(program) => program,
        Err(CompileError::Parse(e)) => {
            return Err(PatternDiagnostic::from_parse_error(&args.pattern, &e).into());
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                "Compile error:".if_supports_color(Stream::Stderr, |t| t.red()),
                e
            );
            return Ok(exitcode::DATAERR);
        }
    };

    if !args.render {
        println!("{program}");
        return Ok(exitcode::OK);
    }

    let bindings = bindings(args.params, &args.args);
    let escape: &dyn Fn(&str) -> String = if args.html {
        &escape_html
    } else {
        &str::to_string
    };
    match program.execute(&bindings, &mf.runtime(), escape) {
        Ok(text) => {
            println!("{text}");
            Ok(exitcode::OK)
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                "Rendering error:".if_supports_color(Stream::Stderr, |t| t.red()),
                e
            );
            Ok(exitcode::DATAERR)
        }
    }
}
