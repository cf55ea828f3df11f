use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::{Result, bail};
use chrono::{Days, Local, NaiveDate};
use mindtrack_core::{Journal, JournalEntry};

pub fn read_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if cli.list {
        let entries = journal.read_all()?;
        print_newest_first(renderer, entries);
        return Ok(CliModeResult::Finish);
    }

    if let Some(query) = &cli.search {
        let matches = journal.search(query)?;
        let entries: Vec<JournalEntry> = journal
            .read_all()?
            .into_iter()
            .filter(|e| matches.contains(&e.raw))
            .collect();
        if entries.is_empty() {
            renderer.print_info("No matches found.");
        } else {
            print_newest_first(renderer, entries);
        }
        return Ok(CliModeResult::Finish);
    }

    if cli.stats {
        let stats = journal.statistics()?;
        renderer.print_stats(&stats);
        return Ok(CliModeResult::Finish);
    }

    if let Some(day) = &cli.on {
        let date = parse_day(day, Local::now().date_naive())?;
        let entries = journal.entries_on(date)?;
        if entries.is_empty() {
            renderer.print_info("No entries for this date.");
        } else {
            renderer.print_entries(&entries);
        }
        return Ok(CliModeResult::Finish);
    }

    if cli.backups {
        let backups = journal.list_backups()?;
        renderer.print_backups(&backups);
        return Ok(CliModeResult::Finish);
    }

    Ok(CliModeResult::NothingToDo)
}

fn print_newest_first(renderer: &Renderer, mut entries: Vec<JournalEntry>) {
    if entries.is_empty() {
        renderer.print_info("No entries yet.");
        return;
    }
    renderer.print_info(&format!("{} entries found.", entries.len()));
    entries.reverse();
    renderer.print_entries(&entries);
}

/// `today`, `yesterday` or `YYYY-MM-DD`.
fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => {
            if let Some(date) = today.checked_sub_days(Days::new(1)) {
                return Ok(date);
            }
        }
        _ => {}
    }
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!("`{input}` is not a valid day, use today, yesterday or YYYY-MM-DD"),
    }
}
