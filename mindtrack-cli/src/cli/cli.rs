use clap::{ArgGroup, Parser};
use mindtrack_core::Theme;
use std::{path::PathBuf, str::FromStr};

use crate::render::ColorMode;

/// mindtrack — Capture. Reflect. Grow.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("read_mode").args(["list", "search", "stats", "on", "calendar", "backups"])),
    group(ArgGroup::new("change_mode").args(["edit", "delete", "clear", "export"]).conflicts_with("read_mode")),
)]
pub struct Cli {
    /// Prints the journal file and the backup directory.
    #[arg(long, short, exclusive = true)]
    pub path: bool,
    /// Use this journal file instead of the configured one.
    #[arg(long, env = "MINDTRACK_FILE")]
    pub file: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Color theme, "dark" or "light". Overrides the `theme` set in the config file.
    #[arg(long, env = "MINDTRACK_THEME", value_parser = parse_theme)]
    pub theme: Option<Theme>,

    /// Productivity rating (1-5) for a new or edited entry.
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,
    /// Removes the rating of the edited entry.
    #[arg(long, requires = "edit", conflicts_with = "rating")]
    pub unrated: bool,

    /// Shows every entry, newest first.
    #[arg(long, short)]
    pub list: bool,
    /// Shows entries containing a keyword or date, ignoring case (e.g. `--search 2024-05-01`).
    #[arg(long, short)]
    pub search: Option<String>,
    /// Shows the number of entries, the average rating and the latest entries.
    #[arg(long)]
    pub stats: bool,
    /// Shows entries written on a day: `today`, `yesterday` or `YYYY-MM-DD`.
    #[arg(long)]
    pub on: Option<String>,
    /// Shows a month calendar, days with entries are marked with `*` (e.g. `--calendar 2024-05`).
    #[arg(long, num_args = 0..=1, default_missing_value = "this month")]
    pub calendar: Option<String>,
    /// Lists the backups taken before each change.
    #[arg(long)]
    pub backups: bool,

    /// Edits entry number N (as shown by `--list`). Opens your $EDITOR unless TEXT is given.
    #[arg(long, short, value_name = "N")]
    pub edit: Option<usize>,
    /// Deletes entry number N (as shown by `--list`).
    #[arg(long, short, value_name = "N")]
    pub delete: Option<usize>,
    /// Deletes ALL entries. Requires `--yes`.
    #[arg(long)]
    pub clear: bool,
    /// Confirms `--clear`.
    #[arg(long, requires = "clear")]
    pub yes: bool,
    /// Exports every entry to a CSV file, by default `learning_journal_export_<timestamp>.csv`.
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Free text for a new entry (e.g., `mindtrack -r 4 Learned recursion`).
    #[arg()]
    pub text: Vec<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    Theme::from_str(value.trim()).map_err(|_| format!("unknown theme `{value}`, use dark or light"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn text_and_rating_for_new_entry() {
        let cli = Cli::try_parse_from(["mindtrack", "-r", "4", "Learned", "recursion"]).unwrap();
        assert_eq!(cli.rating, Some(4));
        assert_eq!(cli.text.join(" "), "Learned recursion");
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["mindtrack", "-r", "6", "text"]).is_err());
        assert!(Cli::try_parse_from(["mindtrack", "-r", "0", "text"]).is_err());
    }

    #[test]
    fn calendar_without_month_defaults_to_this_month() {
        let cli = Cli::try_parse_from(["mindtrack", "--calendar"]).unwrap();
        assert_eq!(cli.calendar.as_deref(), Some("this month"));
        let cli = Cli::try_parse_from(["mindtrack", "--calendar", "2024-05"]).unwrap();
        assert_eq!(cli.calendar.as_deref(), Some("2024-05"));
    }

    #[test]
    fn yes_requires_clear() {
        assert!(Cli::try_parse_from(["mindtrack", "--yes"]).is_err());
        assert!(Cli::try_parse_from(["mindtrack", "--clear", "--yes"]).is_ok());
    }

    #[test]
    fn read_and_change_modes_conflict() {
        assert!(Cli::try_parse_from(["mindtrack", "--list", "--delete", "2"]).is_err());
    }

    #[test]
    fn export_path_is_optional() {
        let cli = Cli::try_parse_from(["mindtrack", "--export"]).unwrap();
        assert_eq!(cli.export, Some(None));
        let cli = Cli::try_parse_from(["mindtrack", "--export", "out.csv"]).unwrap();
        assert_eq!(cli.export, Some(Some(PathBuf::from("out.csv"))));
        let cli = Cli::try_parse_from(["mindtrack", "--list"]).unwrap();
        assert_eq!(cli.export, None);
    }

    #[test]
    fn theme_is_parsed() {
        let cli = Cli::try_parse_from(["mindtrack", "--theme", "light", "--list"]).unwrap();
        assert_eq!(cli.theme, Some(Theme::Light));
        assert!(Cli::try_parse_from(["mindtrack", "--theme", "neon"]).is_err());
    }
}
