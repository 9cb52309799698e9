use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(match serde_json::to_value(value)? {
        Value::Array(items) => render_array_table(&items),
        Value::Object(map) => render_object(map),
        scalar => render_array_table(&[scalar]),
    })
}

/// Scalars as a key/value table; nested objects and arrays as titled sections.
fn render_object(map: Map<String, Value>) -> String {
    let mut scalars = Vec::new();
    let mut sections = Vec::new();

    for (key, value) in map {
        match value {
            Value::Array(items) => {
                sections.push(format!("{key}:\n{}", render_array_table(&items)));
            }
            Value::Object(inner) => {
                let rendered = render_array_table(&[Value::Object(inner)]);
                sections.push(format!("{key}:\n{rendered}"));
            }
            scalar => scalars.push((key, scalar)),
        }
    }

    let mut parts = Vec::new();
    if !scalars.is_empty() {
        scalars.sort_by(|a, b| a.0.cmp(&b.0));
        parts.push(table::render_pairs(&scalars, options()));
    }
    parts.extend(sections);
    parts.join("\n\n")
}

/// Records one per row; bare values land in a single `value` column.
fn render_array_table(items: &[Value]) -> String {
    let wrapped: Vec<Cow<'_, Map<String, Value>>> = items
        .iter()
        .map(|item| match item {
            Value::Object(map) => Cow::Borrowed(map),
            other => Cow::Owned(Map::from_iter([(String::from("value"), other.clone())])),
        })
        .collect();
    let records: Vec<&Map<String, Value>> = wrapped.iter().map(AsRef::as_ref).collect();
    table::render_records(&records, options())
}
