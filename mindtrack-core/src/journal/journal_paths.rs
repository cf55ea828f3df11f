use super::format_utils::BACKUP_STAMP_FORMAT;
use chrono::NaiveDateTime;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

pub const JOURNAL_FILE_NAME: &str = "learning_journal.txt";
pub const BACKUP_DIR_NAME: &str = "journal_backups";

/// `backup_20240501_093000.txt`
pub fn backup_file_name(stamp: NaiveDateTime) -> String {
    format!("backup_{}.txt", stamp.format(BACKUP_STAMP_FORMAT))
}

/// `learning_journal_export_20240501_093000.csv`
pub fn export_file_name(stamp: NaiveDateTime) -> String {
    format!(
        "learning_journal_export_{}.csv",
        stamp.format(BACKUP_STAMP_FORMAT)
    )
}

pub fn backup_file(backup_dir: &Path, stamp: NaiveDateTime) -> PathBuf {
    backup_dir.join(backup_file_name(stamp))
}

/// Default backup directory: `journal_backups` beside the journal file.
pub fn default_backup_dir(journal_file: &Path) -> PathBuf {
    journal_file
        .parent()
        .map(|parent| parent.join(BACKUP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(BACKUP_DIR_NAME))
}

/// Lists backup files in `backup_dir`, sorted by name (which is also oldest first).
pub fn scan_dir_for_backups(backup_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut file_paths = Vec::new();
    if !backup_dir.exists() {
        return Ok(file_paths);
    }

    for entry in fs::read_dir(backup_dir)? {
        let p = entry?.path();
        if p.is_file() && is_backup(&p) {
            file_paths.push(p);
        }
    }

    file_paths.sort();
    Ok(file_paths)
}

fn is_backup(p: &Path) -> bool {
    p.file_name()
        .and_then(OsStr::to_str)
        .map(|name| name.starts_with("backup_") && name.ends_with(".txt"))
        .unwrap_or(false)
}
