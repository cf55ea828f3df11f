//! Recovers structured entries from the content of the journal file.
//!
//! Parsing is best-effort: a block that doesn't follow the current format still
//! yields an entry, with whatever fields could be read.
use super::format_utils::{MARKER, SEPARATOR};
use super::journal_entry::ParsedEntry;
use once_cell::sync::Lazy;
use regex::Regex;

/// Start of a rating line such as `Productivity Rating: 4/5`, any case.
static RATING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^productivity rating").expect("valid rating regex")
});

/// Splits file content on the separator, trimming each piece and dropping empty ones.
pub fn split_blocks(content: &str) -> Vec<String> {
    content
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a single block into its fields.
///
/// - A line starting with the marker glyph is the timestamp.
/// - A line starting with `productivity rating` (any case) is the rating. If the
///   value can't be read the rating is `None`.
/// - Everything else is text.
pub fn parse_entry_block(block: &str) -> ParsedEntry {
    let mut timestamp = None;
    let mut rating = None;
    let mut text_lines = Vec::new();

    for line in block
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::trim_end)
    {
        if let Some(rest) = line.strip_prefix(MARKER) {
            timestamp = Some(rest.trim().to_string());
        } else if RATING_LINE.is_match(line) {
            rating = parse_rating_value(line);
        } else {
            text_lines.push(line);
        }
    }

    ParsedEntry {
        timestamp,
        text: text_lines.join("\n").trim().to_string(),
        rating,
    }
}

/// Reads `N` out of `Productivity Rating: N/5`. Hand-edited values outside 1-5 are kept.
fn parse_rating_value(line: &str) -> Option<i64> {
    let (_, value) = line.split_once(':')?;
    let numerator = value.trim().split('/').next()?.trim();
    numerator.parse().ok()
}
