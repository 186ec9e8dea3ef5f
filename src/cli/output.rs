//! Row rendering for the CLI.

use crate::query::Row;
use serde_json::Value;

const MAX_CELL_WIDTH: usize = 48;

/// Render one row as a JSON object line.
pub fn render_json(row: &Row) -> String {
    serde_json::to_string(row).unwrap_or_else(|_| "{}".to_string())
}

/// Render a tab-separated header line for a table.
pub fn render_header(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| c.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t")
}

/// Render one row as a tab-separated text line.
pub fn render_text(row: &Row) -> String {
    row.iter()
        .map(|(_, value)| render_cell(value))
        .collect::<Vec<_>>()
        .join("\t")
}

fn render_cell(value: &Value) -> String {
    let text = match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| "-".to_string()),
    };
    if text.len() > MAX_CELL_WIDTH {
        let mut end = MAX_CELL_WIDTH;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &text[..end])
    } else {
        text
    }
}
