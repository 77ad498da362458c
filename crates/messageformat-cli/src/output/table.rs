//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};
use messageformat::Operands;

/// Operands and categories of one input number.
pub struct OperandRow {
    /// The number as given on the command line.
    pub input: String,
    pub operands: Operands,
    /// Cardinal category keyword.
    pub cardinal: String,
    /// Ordinal category keyword.
    pub ordinal: String,
}

/// Format operand rows as a table.
pub fn format_operands_table(rows: &[OperandRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Value", "i", "v", "w", "f", "t", "Cardinal", "Ordinal"]);

    for row in rows {
        let ops = row.operands;
        table.add_row(vec![
            row.input.clone(),
            ops.i.to_string(),
            ops.v.to_string(),
            ops.w.to_string(),
            ops.f.to_string(),
            ops.t.to_string(),
            row.cardinal.clone(),
            row.ordinal.clone(),
        ]);
    }

    table
}
