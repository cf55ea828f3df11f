/// A single journal record recovered from one block of the journal file.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    /// Position in the parsed sequence, oldest first. Not persisted.
    pub index: usize,
    /// Display timestamp (`YYYY-MM-DD — hh:mm AM/PM`), `None` if the block had no marker line.
    pub timestamp: Option<String>,
    pub text: String,
    pub rating: Option<i64>,
    /// The block exactly as found between separators. Used to locate the entry on edit/delete.
    pub raw: String,
}

/// Fields recovered from a block by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    pub timestamp: Option<String>,
    pub text: String,
    pub rating: Option<i64>,
}

/// Aggregates over the whole journal.
#[derive(Debug, Clone)]
pub struct JournalStats {
    pub total: usize,
    /// Mean of all present ratings, rounded to 2 decimals.
    pub avg_rating: Option<f64>,
    /// Up to the last three entries, newest first.
    pub recent: Vec<JournalEntry>,
}
