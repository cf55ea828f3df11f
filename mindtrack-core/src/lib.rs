pub mod config;
pub mod error;
pub mod journal;

pub use config::{Config, Theme};
pub use error::{JournalError, JournalResult};
pub use journal::{Journal, JournalEntry, JournalStats};
