//! Terminal tables for task records.
//!
//! Columns follow a fixed task-first order. Cells are rendered per column:
//! empty due dates read "no date", subtask titles are marked, and status and
//! priority carry their own colours.

use serde_json::{Map, Value};

/// Leading columns, in order. Other visible columns follow alphabetically.
pub const PREFERRED_COLUMNS: &[&str] = &[
    "index",
    "id",
    "title",
    "status",
    "priority",
    "due_date",
    "parent_task_id",
];

/// Columns too noisy for a terminal table.
pub const HIDDEN_COLUMNS: &[&str] = &[
    "user_id",
    "description",
    "is_subtask",
    "created_at",
    "updated_at",
];

/// Narrowest a column may shrink to when fitting the terminal.
const MIN_WIDTH: usize = 6;

const SUBTASK_MARKER: &str = "↳ ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Visible columns across `records`, preferred ones first.
#[must_use]
pub fn column_order(records: &[&Map<String, Value>]) -> Vec<String> {
    let mut rest = Vec::<String>::new();
    for record in records {
        for key in record.keys() {
            if !HIDDEN_COLUMNS.contains(&key.as_str()) && !rest.contains(key) {
                rest.push(key.clone());
            }
        }
    }

    let mut columns: Vec<String> = PREFERRED_COLUMNS
        .iter()
        .filter(|col| rest.iter().any(|key| key == *col))
        .map(|col| (*col).to_string())
        .collect();
    rest.retain(|key| !PREFERRED_COLUMNS.contains(&key.as_str()));
    rest.sort();
    columns.extend(rest);
    columns
}

/// One row per record (tasks or suggestions).
#[must_use]
pub fn render_records(records: &[&Map<String, Value>], options: TableOptions) -> String {
    if records.is_empty() {
        return String::from("(no rows)");
    }
    let columns = column_order(records);
    if columns.is_empty() {
        return String::from("(no columns)");
    }

    let rows: Vec<Vec<Cell>> = records
        .iter()
        .map(|record| {
            let subtask = record.get("is_subtask").and_then(Value::as_bool) == Some(true);
            columns
                .iter()
                .map(|column| Cell::for_column(column, record.get(column), subtask))
                .collect()
        })
        .collect();

    layout(&columns, &rows, options)
}

/// A two-column key/value table.
#[must_use]
pub fn render_pairs(pairs: &[(String, Value)], options: TableOptions) -> String {
    let columns = ["key".to_string(), "value".to_string()];
    let rows: Vec<Vec<Cell>> = pairs
        .iter()
        .map(|(key, value)| {
            vec![
                Cell::plain(key.clone()),
                Cell::for_column(key, Some(value), false),
            ]
        })
        .collect();
    layout(&columns, &rows, options)
}

/// Display text plus an optional ANSI colour code.
#[derive(Debug, PartialEq, Eq)]
struct Cell {
    text: String,
    color: Option<&'static str>,
}

impl Cell {
    const fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    fn for_column(column: &str, value: Option<&Value>, subtask: bool) -> Self {
        let Some(value) = value else {
            return Self::plain(String::from("-"));
        };
        match (column, value) {
            ("due_date", Value::Null) => Self::plain(String::from("no date")),
            ("title", Value::String(title)) if subtask => {
                Self::plain(format!("{SUBTASK_MARKER}{title}"))
            }
            ("status", Value::String(status)) => Self {
                color: status_color(status),
                text: status.clone(),
            },
            ("priority", Value::String(priority)) => Self {
                color: priority_color(priority),
                text: priority.clone(),
            },
            (_, other) => Self::plain(value_text(other)),
        }
    }
}

const fn status_color(status: &str) -> Option<&'static str> {
    match status.as_bytes() {
        b"completed" => Some("32"),
        b"in-progress" => Some("36"),
        b"pending" => Some("33"),
        _ => None,
    }
}

const fn priority_color(priority: &str) -> Option<&'static str> {
    match priority.as_bytes() {
        b"high" => Some("31"),
        b"low" => Some("2"),
        _ => None,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn layout(columns: &[String], rows: &[Vec<Cell>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| width_of(&cell.text))
                .chain([width_of(column), MIN_WIDTH])
                .max()
                .unwrap_or(MIN_WIDTH)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        let title = columns.iter().position(|c| c == "title");
        fit_widths(&mut widths, title, max_width);
    }

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad(&truncate(column, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1));

    let mut lines = vec![header.trim_end().to_string(), divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                row.get(index).map_or_else(
                    || pad("-", *width),
                    |cell| paint(cell, *width, options.color),
                )
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Shrink to `max_width`: the title column gives way first, then the widest
/// remaining column, never below `MIN_WIDTH`.
fn fit_widths(widths: &mut [usize], title: Option<usize>, max_width: usize) {
    let separators = 2 * widths.len().saturating_sub(1);
    let mut excess = (widths.iter().sum::<usize>() + separators).saturating_sub(max_width);

    if let Some(title) = title {
        let give = excess.min(widths[title].saturating_sub(MIN_WIDTH));
        widths[title] -= give;
        excess -= give;
    }

    while excess > 0 {
        let Some(widest) = (0..widths.len())
            .filter(|&i| widths[i] > MIN_WIDTH)
            .max_by_key(|&i| widths[i])
        else {
            break;
        };
        widths[widest] -= 1;
        excess -= 1;
    }
}

fn truncate(text: &str, width: usize) -> String {
    if width_of(text) <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn pad(text: &str, width: usize) -> String {
    format!("{text}{}", " ".repeat(width.saturating_sub(width_of(text))))
}

/// Colour only the text; padding stays outside the escape codes.
fn paint(cell: &Cell, width: usize, color: bool) -> String {
    let text = truncate(&cell.text, width);
    let padding = " ".repeat(width.saturating_sub(width_of(&text)));
    match cell.color {
        Some(code) if color => format!("\u{1b}[{code}m{text}\u{1b}[0m{padding}"),
        _ => format!("{text}{padding}"),
    }
}
