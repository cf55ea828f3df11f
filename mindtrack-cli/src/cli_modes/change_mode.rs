use super::{
    CliModeResult,
    editor_utils::{create_editor_buffer, resolve_editor},
};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use chrono::Local;
use mindtrack_core::{
    Journal, JournalEntry, JournalError, journal::journal_paths::export_file_name,
};
use std::path::PathBuf;

/// Rewrites entry `--edit N`, keeping its timestamp.
pub fn edit_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    let Some(number) = cli.edit else {
        return Ok(CliModeResult::NothingToDo);
    };
    let Some(entry) = find_entry(journal, number)? else {
        renderer.print_info(&format!("No entry #{number}."));
        return Ok(CliModeResult::Finish);
    };

    let new_text = if cli.text.is_empty() {
        let editor = resolve_editor(&journal.config.editor);
        create_editor_buffer(&editor, &entry.text)?
    } else {
        cli.text.join(" ")
    };
    if new_text.trim().is_empty() {
        renderer.print_info("Entry left unchanged, because no text was received.");
        return Ok(CliModeResult::Finish);
    }
    let rating = if cli.unrated {
        None
    } else {
        cli.rating.or_else(|| writable_rating(entry.rating))
    };

    let updated = journal.replace_entry(&entry.raw, &new_text, rating)?;
    renderer.print_info("Entry updated successfully.");
    renderer.print_entry_line(&updated);
    Ok(CliModeResult::Finish)
}

pub fn delete_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    let Some(number) = cli.delete else {
        return Ok(CliModeResult::NothingToDo);
    };
    let Some(entry) = find_entry(journal, number)? else {
        renderer.print_info(&format!("No entry #{number}."));
        return Ok(CliModeResult::Finish);
    };

    journal.delete_entry(&entry.raw)?;
    renderer.print_info(&format!("Entry #{number} removed. A backup was created."));
    Ok(CliModeResult::Finish)
}

pub fn clear_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if !cli.clear {
        return Ok(CliModeResult::NothingToDo);
    }
    if !cli.yes {
        renderer.print_info("This deletes ALL entries. Run again with `--clear --yes` to confirm.");
        return Ok(CliModeResult::Finish);
    }

    journal.clear_all()?;
    renderer.print_info("All entries removed. A backup was created before deletion.");
    Ok(CliModeResult::Finish)
}

pub fn export_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    let Some(path) = &cli.export else {
        return Ok(CliModeResult::NothingToDo);
    };
    let path = path
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_file_name(Local::now().naive_local())));

    match journal.export_csv(&path) {
        Ok(()) => renderer.print_info(&format!("Exported entries to {}", path.display())),
        Err(JournalError::EmptyStore) => renderer.print_info("No entries to export."),
        Err(e) => return Err(e.into()),
    }
    Ok(CliModeResult::Finish)
}

/// Entry by its 1-based number as shown by `--list`.
fn find_entry(journal: &Journal, number: usize) -> Result<Option<JournalEntry>> {
    if number == 0 {
        return Ok(None);
    }
    Ok(journal.read_all()?.into_iter().nth(number - 1))
}

/// The kept rating of an edited entry. Hand-edited values outside 1-5 are dropped.
fn writable_rating(rating: Option<i64>) -> Option<u8> {
    rating
        .filter(|r| (1..=5).contains(r))
        .and_then(|r| u8::try_from(r).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_valid_ratings_survive_an_edit() {
        assert_eq!(writable_rating(Some(4)), Some(4));
        assert_eq!(writable_rating(Some(-1)), None);
        assert_eq!(writable_rating(Some(9)), None);
        assert_eq!(writable_rating(None), None);
    }
}
