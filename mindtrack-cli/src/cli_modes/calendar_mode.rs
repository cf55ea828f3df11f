use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::{Result, bail};
use chrono::{Datelike, Local, NaiveDate};
use mindtrack_core::journal::date_utils::{month_grid, next_month, previous_month};
use mindtrack_core::Journal;
use regex::Regex;

pub fn calendar_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    let Some(input) = &cli.calendar else {
        return Ok(CliModeResult::NothingToDo);
    };
    let (year, month) = parse_month(input, Local::now().date_naive())?;

    let grid = month_grid(year, month);
    let marked = journal.days_with_entries(year, month)?;
    renderer.print_calendar(year, month, &grid, &marked);
    if marked.is_empty() {
        renderer.print_info("No entries this month.");
    } else {
        renderer.print_info("Use `--on YYYY-MM-DD` to read the entries of a marked day.");
    }
    Ok(CliModeResult::Finish)
}

/// `this month`, `last month`, `next month` or `YYYY-MM`.
fn parse_month(input: &str, today: NaiveDate) -> Result<(i32, u32)> {
    let current = (today.year(), today.month());
    match input.trim().to_ascii_lowercase().as_str() {
        "this month" | "today" => return Ok(current),
        "last month" => return Ok(previous_month(current.0, current.1)),
        "next month" => return Ok(next_month(current.0, current.1)),
        _ => {}
    }

    let re = Regex::new(r"^(\d{4})-(\d{1,2})$")?;
    if let Some(caps) = re.captures(input.trim()) {
        let year: i32 = caps[1].parse()?;
        let month: u32 = caps[2].parse()?;
        if (1..=12).contains(&month) {
            return Ok((year, month));
        }
    }
    bail!("`{input}` is not a valid month, use YYYY-MM (e.g. 2024-05)")
}
