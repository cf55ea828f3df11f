use chrono::{NaiveDate, NaiveDateTime};

/// Leading glyph of the timestamp line.
pub const MARKER: &str = "🗓️";
/// Line written after every block.
pub const SEPARATOR: &str = "--------------------------------------------------";
/// Display format of an entry timestamp, e.g. `2024-05-01 — 09:30 AM`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d — %I:%M %p";
/// Format used for backup file names.
pub const BACKUP_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Returns an output like this: `2024-05-01 — 09:30 AM`
pub fn format_timestamp(datetime: NaiveDateTime) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Render an entry block:
///
/// ```text
/// 🗓️ 2024-05-01 — 09:30 AM
/// Body...
/// Productivity Rating: 4/5
/// --------------------------------------------------
/// ```
///
/// The rating line is only written when `rating` is present.
pub fn format_entry_block(timestamp: &str, text: &str, rating: Option<u8>) -> String {
    let text = text.trim_end();
    let mut block = format!("{MARKER} {timestamp}\n{text}\n");
    if let Some(rating) = rating {
        block.push_str(&format!("Productivity Rating: {rating}/5\n"));
    }
    block.push_str(SEPARATOR);
    block.push('\n');
    block
}

/// The block as it appears between two separators once the file is split,
/// i.e. without the trailing separator line.
pub fn strip_separator(block: &str) -> &str {
    let block = block.trim();
    block.strip_suffix(SEPARATOR).unwrap_or(block).trim_end()
}

/// Reads the `YYYY-MM-DD` prefix of a display timestamp.
pub fn timestamp_date(timestamp: &str) -> Option<NaiveDate> {
    let prefix = timestamp.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}
