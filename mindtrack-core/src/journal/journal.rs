//! The core `Journal` struct, the only gateway to the journal file and its backups.
use super::date_utils::month_bounds;
use super::format_utils::{
    SEPARATOR, format_entry_block, format_timestamp, strip_separator, timestamp_date,
};
use super::journal_entry::{JournalEntry, JournalStats};
use super::journal_paths::{backup_file, scan_dir_for_backups};
use super::parse_entries::{parse_entry_block, split_blocks};
use crate::config::Config;
use crate::error::{JournalError, JournalResult};
use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// The central struct for all journal operations.
///
/// An instance of `Journal` holds the configuration (journal file and backup
/// directory) and provides every read and write on them. Every operation that
/// changes the file first writes a snapshot of it into the backup directory.
///
/// Entries have no ids: an entry is addressed by its raw block, and when the
/// same block appears more than once, the first occurrence in the file is the
/// one edited or deleted.
#[derive(Debug)]
pub struct Journal {
    pub config: Config,
}

impl Journal {
    /// Creates a new `Journal` instance, loading configuration from standard paths.
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Journal` instance with a specific `Config`.
    ///
    /// This also ensures that the directory holding the journal file exists. The
    /// file itself is only created by the first entry.
    pub fn with_config(config: Config) -> anyhow::Result<Self> {
        if let Some(parent) = non_empty_parent(&config.journal_file) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        Ok(Self { config })
    }

    /// Reads and parses every entry, oldest first.
    ///
    /// A missing or empty file yields no entries. Blocks that don't follow the
    /// format still produce an entry with the fields that could be read.
    pub fn read_all(&self) -> JournalResult<Vec<JournalEntry>> {
        let Some(content) = self.read_content()? else {
            log::debug!("{} does not exist yet", self.config.journal_file.display());
            return Ok(Vec::new());
        };

        Ok(split_blocks(&content)
            .into_iter()
            .enumerate()
            .map(|(index, raw)| to_entry(index, raw))
            .collect())
    }

    /// Appends a new entry stamped with the current time.
    ///
    /// # Arguments
    ///
    /// * `text` - the entry's content, must not be blank.
    /// * `rating` - optional productivity rating, 1 to 5.
    pub fn create_entry(&self, text: &str, rating: Option<u8>) -> JournalResult<JournalEntry> {
        validate_text(text)?;
        validate_rating(rating)?;

        let content = self.read_content()?.unwrap_or_default();
        self.backup()?;

        let timestamp = format_timestamp(now());
        let block = format_entry_block(&timestamp, text, rating);

        let path = &self.config.journal_file;
        if let Some(parent) = non_empty_parent(path) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        let tail = content.trim_end();
        if !tail.is_empty() && !tail.ends_with(SEPARATOR) {
            // Close a dangling block so the new entry doesn't merge into it.
            write!(file, "\n{SEPARATOR}\n")?;
        } else if !content.is_empty() && !content.ends_with('\n') {
            writeln!(file)?;
        }
        write!(file, "{block}")?;

        log::info!("appended entry to {}", path.display());
        let index = split_blocks(&content).len();
        Ok(to_entry(index, strip_separator(&block).to_string()))
    }

    /// Replaces the first occurrence of `old_block` with a new entry carrying the
    /// same timestamp.
    ///
    /// Fails with [`JournalError::NotFound`] if `old_block` is not in the file.
    pub fn replace_entry(
        &self,
        old_block: &str,
        new_text: &str,
        new_rating: Option<u8>,
    ) -> JournalResult<JournalEntry> {
        validate_text(new_text)?;
        validate_rating(new_rating)?;

        let target = old_block.trim();
        let content = self.read_content()?.ok_or(JournalError::NotFound)?;
        let position = match content.find(target) {
            Some(position) if !target.is_empty() => position,
            _ => return Err(JournalError::NotFound),
        };
        self.backup()?;

        let timestamp = parse_entry_block(target).timestamp.unwrap_or_else(|| {
            log::warn!("replaced entry had no timestamp, using the current time");
            format_timestamp(now())
        });
        let block = format_entry_block(&timestamp, new_text, new_rating);
        let replacement = strip_separator(&block);

        let new_content = content.replacen(target, replacement, 1);
        fs::write(
            &self.config.journal_file,
            format!("{}\n", new_content.trim()),
        )?;

        log::info!("replaced entry in {}", self.config.journal_file.display());
        let index = split_blocks(&content[..position]).len();
        Ok(to_entry(index, replacement.to_string()))
    }

    /// Removes the first occurrence of `old_block` and rewrites the file with
    /// one separator after each remaining block.
    ///
    /// Nothing happens if the journal file doesn't exist. If no entries are left
    /// the file is truncated, not removed.
    pub fn delete_entry(&self, old_block: &str) -> JournalResult<()> {
        let Some(content) = self.read_content()? else {
            log::debug!("nothing to delete, journal file does not exist");
            return Ok(());
        };
        self.backup()?;

        let target = old_block.trim();
        let remaining = if target.is_empty() {
            content
        } else {
            content.replacen(target, "", 1)
        };

        let new_content: String = split_blocks(&remaining)
            .iter()
            .map(|block| format!("{block}\n{SEPARATOR}\n"))
            .collect();
        fs::write(&self.config.journal_file, new_content)?;

        log::info!("deleted entry from {}", self.config.journal_file.display());
        Ok(())
    }

    /// Backs the journal up and removes the file. Nothing happens if the file doesn't exist.
    pub fn clear_all(&self) -> JournalResult<()> {
        if !self.config.journal_file.exists() {
            log::debug!("nothing to clear, journal file does not exist");
            return Ok(());
        }
        self.backup()?;
        fs::remove_file(&self.config.journal_file)?;
        log::info!("cleared {}", self.config.journal_file.display());
        Ok(())
    }

    /// Copies the journal file into the backup directory as `backup_<YYYYMMDD_HHMMSS>.txt`.
    ///
    /// Returns the path of the new backup, or `None` when there is no journal
    /// file to back up. Two backups taken within the same second share a name;
    /// the later one wins.
    pub fn backup(&self) -> JournalResult<Option<PathBuf>> {
        if !self.config.journal_file.exists() {
            return Ok(None);
        }
        fs::create_dir_all(&self.config.backup_dir)?;
        let destination = backup_file(&self.config.backup_dir, now());
        fs::copy(&self.config.journal_file, &destination)?;
        log::info!("wrote backup {}", destination.display());
        Ok(Some(destination))
    }

    /// Existing backups, oldest first.
    pub fn list_backups(&self) -> JournalResult<Vec<PathBuf>> {
        Ok(scan_dir_for_backups(&self.config.backup_dir)?)
    }

    pub fn statistics(&self) -> JournalResult<JournalStats> {
        let entries = self.read_all()?;
        let ratings: Vec<i64> = entries.iter().filter_map(|e| e.rating).collect();
        let avg_rating = if ratings.is_empty() {
            None
        } else {
            let sum: i64 = ratings.iter().sum();
            let mean = sum as f64 / ratings.len() as f64;
            // Exact halves go to the even cent: 1.125 -> 1.12, 1.625 -> 1.62.
            Some((mean * 100.0).round_ties_even() / 100.0)
        };
        let recent = entries.iter().rev().take(3).cloned().collect();

        Ok(JournalStats {
            total: entries.len(),
            avg_rating,
            recent,
        })
    }

    /// Raw blocks containing `query`, ignoring case, in file order.
    ///
    /// The whole block is searched, so a date such as `2024-05-01` matches the
    /// entries written that day.
    pub fn search(&self, query: &str) -> JournalResult<Vec<String>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(JournalError::Validation(
                "enter a keyword or date to search".to_string(),
            ));
        }
        let content = self.read_content()?.unwrap_or_default();
        let matches: Vec<String> = split_blocks(&content)
            .into_iter()
            .filter(|block| block.to_lowercase().contains(&query))
            .collect();
        log::debug!("search for {query:?} matched {} entries", matches.len());
        Ok(matches)
    }

    /// Writes every entry to a CSV file with a `Timestamp,Entry,Rating` header.
    pub fn export_csv(&self, destination: &Path) -> JournalResult<()> {
        let entries = self.read_all()?;
        if entries.is_empty() {
            return Err(JournalError::EmptyStore);
        }

        let mut writer = csv::Writer::from_path(destination)?;
        writer.write_record(["Timestamp", "Entry", "Rating"])?;
        for entry in &entries {
            let rating = entry.rating.map(|r| r.to_string()).unwrap_or_default();
            writer.write_record([
                entry.timestamp.as_deref().unwrap_or(""),
                entry.text.as_str(),
                rating.as_str(),
            ])?;
        }
        writer.flush()?;

        log::info!(
            "exported {} entries to {}",
            entries.len(),
            destination.display()
        );
        Ok(())
    }

    /// Entries written on `date`, oldest first.
    pub fn entries_on(&self, date: NaiveDate) -> JournalResult<Vec<JournalEntry>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|e| e.timestamp.as_deref().and_then(timestamp_date) == Some(date))
            .collect())
    }

    /// Days of the given month with at least one entry.
    pub fn days_with_entries(&self, year: i32, month: u32) -> JournalResult<BTreeSet<u32>> {
        let Some((first, last)) = month_bounds(year, month) else {
            return Ok(BTreeSet::new());
        };
        Ok(self
            .read_all()?
            .iter()
            .filter_map(|e| e.timestamp.as_deref().and_then(timestamp_date))
            .filter(|date| *date >= first && *date <= last)
            .map(|date| date.day())
            .collect())
    }

    /// The file content, or `None` if the journal file doesn't exist.
    fn read_content(&self) -> JournalResult<Option<String>> {
        match fs::read_to_string(&self.config.journal_file) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn to_entry(index: usize, raw: String) -> JournalEntry {
    let parsed = parse_entry_block(&raw);
    JournalEntry {
        index,
        timestamp: parsed.timestamp,
        text: parsed.text,
        rating: parsed.rating,
        raw,
    }
}

fn validate_text(text: &str) -> JournalResult<()> {
    if text.trim().is_empty() {
        return Err(JournalError::Validation("entry text is empty".to_string()));
    }
    Ok(())
}

fn validate_rating(rating: Option<u8>) -> JournalResult<()> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(JournalError::Validation(format!(
            "rating must be between 1 and 5, got {r}"
        ))),
        _ => Ok(()),
    }
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
