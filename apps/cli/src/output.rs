//! Table and JSON rendering of command records.

use pimctl_application::display_records::TableView;
use pimctl_core::{AppError, AppResult};
use serde::Serialize;

use crate::commands::OutputFormat;

const COLUMN_GAP: &str = "  ";

/// Renders a record collection. An empty table renders as an empty string.
pub fn render_records<T>(records: &[T], format: OutputFormat) -> AppResult<String>
where
    T: Serialize + TableView,
{
    match format {
        OutputFormat::Json => to_json(records),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = records.iter().flat_map(|record| record.rows()).collect();
            Ok(render_table(T::HEADERS, &rows))
        }
    }
}

/// Renders a single record.
pub fn render_record<T>(record: &T, format: OutputFormat) -> AppResult<String>
where
    T: Serialize + TableView,
{
    match format {
        OutputFormat::Json => to_json(record),
        OutputFormat::Table => Ok(render_table(T::HEADERS, &record.rows())),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|error| AppError::Internal(format!("failed to serialize output: {error}")))
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers, &widths));
    lines.push(format_row(&rule, &widths));
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_owned()
}
