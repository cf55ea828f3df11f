use crate::journal::journal_paths::{JOURNAL_FILE_NAME, default_backup_dir};
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf, str::FromStr};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Color theme for the terminal front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// The journal file. Every entry lives in this single file.
    pub journal_file: PathBuf,
    /// Directory where a snapshot of the journal is written before every change.
    pub backup_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    pub theme: Theme,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_file: Option<PathBuf>,
    backup_dir: Option<PathBuf>,
    editor: Option<String>,
    theme: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            log::warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let journal_file = file_config
            .journal_file
            .unwrap_or_else(Self::default_journal_file);
        let backup_dir = file_config
            .backup_dir
            .unwrap_or_else(|| default_backup_dir(&journal_file));
        let theme = file_config
            .theme
            .as_deref()
            .and_then(|t| Theme::from_str(t.trim()).ok())
            .unwrap_or_default();

        Self {
            journal_file,
            backup_dir,
            editor: file_config.editor,
            theme,
        }
    }

    /// Default journal file: `{data_dir}/mindtrack/learning_journal.txt`
    /// - macOS:   `~/Library/Application Support/mindtrack`
    /// - Linux:   `$XDG_DATA_HOME/mindtrack` or `~/.local/share/mindtrack`
    /// - Windows: `%APPDATA%\mindtrack`
    fn default_journal_file() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("mindtrack").join(JOURNAL_FILE_NAME)
        } else {
            PathBuf::from(JOURNAL_FILE_NAME)
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("mindtrack")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("mindtrack").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
