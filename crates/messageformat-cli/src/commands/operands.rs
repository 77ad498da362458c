//! Implementation of the `mf operands` command.

use messageformat::Value;
use messageformat::plural::{PluralKind, derive_operands, plural_category};
use miette::miette;
use serde::Serialize;

use super::FormatterArgs;
use crate::output::table::{OperandRow, format_operands_table};

/// Arguments for the operands command.
#[derive(Debug, clap::Args)]
pub struct OperandsArgs {
    /// Decimal numbers to inspect (e.g., 1, 1.0, -2.50)
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub formatter: FormatterArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one number.
#[derive(Debug, Serialize)]
struct OperandsJson {
    value: String,
    i: u64,
    v: usize,
    w: usize,
    f: u64,
    t: u64,
    cardinal: String,
    ordinal: String,
}

/// Run the operands command.
pub fn run_operands(args: OperandsArgs) -> miette::Result<i32> {
    let locale = args.formatter.locale()?;

    let mut rows = Vec::with_capacity(args.values.len());
    for input in args.values {
        let value = Value::from(input.as_str());
        let operands = derive_operands(&value).map_err(|e| miette!("{}: {}", input, e))?;
        let category = |kind| {
            plural_category(&locale, &value, kind)
                .map(ToString::to_string)
                .map_err(|e| miette!("{}: {}", input, e))
        };
        let cardinal = category(PluralKind::Cardinal)?;
        let ordinal = category(PluralKind::Ordinal)?;
        rows.push(OperandRow {
            input,
            operands,
            cardinal,
            ordinal,
        });
    }

    if args.json {
        let output: Vec<OperandsJson> = rows
            .into_iter()
            .map(|row| OperandsJson {
                value: row.input,
                i: row.operands.i,
                v: row.operands.v,
                w: row.operands.w,
                f: row.operands.f,
                t: row.operands.t,
                cardinal: row.cardinal,
                ordinal: row.ordinal,
            })
            .collect();
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| miette!("Cannot serialize operands: {}", e))?;
        println!("{text}");
    } else {
        println!("{}", format_operands_table(&rows));
    }
    Ok(exitcode::OK)
}
