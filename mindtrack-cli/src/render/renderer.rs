use super::theme::{Palette, palette, skin};
use chrono::Month;
use mindtrack_core::{JournalEntry, JournalStats, Theme};
use std::{collections::BTreeSet, path::PathBuf};
use termimad::{MadSkin, crossterm::style::Stylize};

const RULE: &str = "--------------------------------------------------";

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub theme: Theme,
}

pub struct Renderer {
    skin: MadSkin,
    palette: Palette,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        let palette = palette(opts.theme);
        Self {
            skin: skin(&palette),
            palette,
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// One line summary: `#3 2024-05-01 — 09:30 AM Learned recursion (4/5)`
    pub fn print_entry_line(&self, entry: &JournalEntry) {
        let mut number = format!("#{}", entry.index + 1);
        let mut timestamp = entry.timestamp.clone().unwrap_or_default();
        let mut title = entry.text.lines().next().unwrap_or_default().to_string();
        let mut rating = entry
            .rating
            .map(|r| format!("({r}/5)"))
            .unwrap_or_default();
        if self.opts.use_color {
            number = number.with(self.palette.muted).to_string();
            timestamp = timestamp.with(self.palette.date).to_string();
            title = title.with(self.palette.fg).to_string();
            rating = rating.with(self.palette.rating).to_string();
        }
        println!("{number} {timestamp} {title} {rating}");
    }

    /// Prints entries in the given order, separated by a rule.
    pub fn print_entries(&self, entries: &[JournalEntry]) {
        if entries.is_empty() {
            self.print_info("No entries found.");
            return;
        }

        for entry in entries {
            let timestamp = entry.timestamp.as_deref().unwrap_or("(no date)");
            let mut md = format!("## #{} · {}\n{}\n", entry.index + 1, timestamp, entry.text);
            if let Some(rating) = entry.rating {
                md.push_str(&format!("### Rating: {rating}/5\n"));
            }
            self.print_md(&md);
            self.print_rule();
        }
    }

    pub fn print_stats(&self, stats: &JournalStats) {
        let average = stats
            .avg_rating
            .map(|avg| format!("{avg}"))
            .unwrap_or_else(|| "-".to_string());
        self.print_md(&format!(
            "# Dashboard\n**Total entries:** {}\n**Average rating:** {}\n",
            stats.total, average
        ));
        if stats.recent.is_empty() {
            self.print_info("No entries yet. Add your first learning note!");
        } else {
            self.print_md("# Recent entries");
            self.print_entries(&stats.recent);
        }
    }

    /// Month grid, Monday first. Days in `marked` get a `*`.
    pub fn print_calendar(
        &self,
        year: i32,
        month: u32,
        grid: &[[Option<u32>; 7]],
        marked: &BTreeSet<u32>,
    ) {
        let month_name = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("?");
        self.print_md(&format!("# {month_name} {year}"));

        println!(" Mo  Tu  We  Th  Fr  Sa  Su");
        for week in grid {
            let mut line = String::new();
            for day in week {
                let cell = match day {
                    Some(d) if marked.contains(d) => {
                        let cell = format!("{d:>3}*");
                        if self.opts.use_color {
                            cell.with(self.palette.marked).to_string()
                        } else {
                            cell
                        }
                    }
                    Some(d) => format!("{d:>3} "),
                    None => "    ".to_string(),
                };
                line.push_str(&cell);
            }
            println!("{}", line.trim_end());
        }
    }

    pub fn print_backups(&self, backups: &[PathBuf]) {
        if backups.is_empty() {
            self.print_info("No backups yet.");
            return;
        }
        self.print_info(&format!("{} backups found.", backups.len()));
        for backup in backups {
            println!("{}", backup.display());
        }
    }

    fn print_rule(&self) {
        if self.opts.use_color {
            println!("{}", RULE.with(self.palette.muted));
        } else {
            println!("{RULE}");
        }
    }
}
