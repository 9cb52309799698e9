use chrono::Local;
use quill_intake::TextIntakeParser;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_date;
use crate::output::output;

/// Handle `quill task parse`. Needs no database.
pub fn run(text: &str, today: Option<&str>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let today = match today {
        Some(raw) => parse_date(raw, "today")?,
        None => Local::now().date_naive(),
    };
    let parsed = TextIntakeParser::new().parse_on(text, today);
    output(&parsed, flags.format)
}
