pub mod date_utils;
pub mod format_utils;
mod journal;
mod journal_entry;
pub mod journal_paths;
pub mod parse_entries;

pub use journal::Journal;
pub use journal_entry::{JournalEntry, JournalStats, ParsedEntry};
