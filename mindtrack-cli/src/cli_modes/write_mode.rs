use super::{
    CliModeResult,
    editor_utils::{create_editor_buffer, resolve_editor},
};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use mindtrack_core::Journal;

/// Saves the free text given on the command line as a new entry.
pub fn write_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if cli.text.is_empty() {
        return Ok(CliModeResult::NothingToDo);
    }
    let inline = cli.text.join(" ");
    save_entry(&inline, cli.rating, renderer, journal)
}

/// Opens the editor on an empty buffer and saves what was written as a new entry.
pub fn editor_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if !cli.text.is_empty() {
        return write_mode(cli, renderer, journal);
    }

    let editor = resolve_editor(&journal.config.editor);
    let input = create_editor_buffer(&editor, "")?;
    if input.trim().is_empty() {
        renderer.print_info("No entry to save, because no text was received.");
        return Ok(CliModeResult::Finish);
    }
    save_entry(&input, cli.rating, renderer, journal)
}

fn save_entry(
    text: &str,
    rating: Option<u8>,
    renderer: &Renderer,
    journal: &Journal,
) -> Result<CliModeResult> {
    let new_entry = journal.create_entry(text, rating)?;
    renderer.print_info(&format!(
        "Added new entry to {}",
        journal.config.journal_file.display()
    ));
    renderer.print_entry_line(&new_entry);
    Ok(CliModeResult::Finish)
}
