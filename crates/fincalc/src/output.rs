//! Output helpers for the `fincalc` CLI: pretty JSON and aligned tables.

use serde::Serialize;
use std::io::{self, Write};

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a simple table with headers and rows.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write!(handle, "{}", render_table(headers, rows));
}

/// Lays out `rows` under `headers` with a dashed rule. Column widths come
/// from the widest cell; columns are separated by two spaces.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_cells(headers.iter().copied(), &widths));
    lines.push(join_cells(widths.iter().map(|w| "-".repeat(*w)), &widths));
    for row in rows {
        lines.push(join_cells(row.iter().map(String::as_str), &widths));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn join_cells<S: AsRef<str>>(cells: impl Iterator<Item = S>, widths: &[usize]) -> String {
    let line = cells
        .enumerate()
        .map(|(i, cell)| match widths.get(i) {
            Some(&width) => format!("{:<width$}", cell.as_ref()),
            None => cell.as_ref().to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_layout() {
        let rows = vec![
            vec!["precision".to_string(), "2".to_string()],
            vec!["percent-suffix".to_string(), "true".to_string()],
        ];
        assert_eq!(
            render_table(&["KEY", "VALUE"], &rows),
            "KEY             VALUE\n\
             --------------  -----\n\
             precision       2\n\
             percent-suffix  true\n"
        );
    }

    #[test]
    fn empty_table_prints_nothing() {
        assert_eq!(render_table(&["KEY"], &[]), "");
    }
}
