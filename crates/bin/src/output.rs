//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    print!("{}", format_table(headers, rows));
}

/// Render `rows` under `headers` with left-aligned columns two spaces apart.
///
/// Returns an empty string when there are no rows. Cells past the header
/// count are ignored.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    // Calculate column widths (max of header and all row values)
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let render = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    // Header first, then one line per row
    let mut out = render(headers.to_vec());
    for row in rows {
        out.push_str(&render(row.iter().map(String::as_str).collect()));
    }
    out
}

/// Print a JSON value: pretty for humans, compact for machines
pub fn print_json(
    value: &serde_json::Value,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}
