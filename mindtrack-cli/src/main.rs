mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::{
    CliModeResult, calendar_mode, clear_mode, delete_mode, edit_mode, editor_mode, export_mode,
    read_mode, write_mode,
};
use mindtrack_core::{Config, Journal, journal::journal_paths::default_backup_dir};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

type CliMode = fn(&Cli, &Renderer, &Journal) -> Result<CliModeResult>;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mindtrack: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();

    let mut config = Config::load()?;
    if let Some(file) = &cli.file {
        config.journal_file = file.clone();
        config.backup_dir = default_backup_dir(file);
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    let renderer = Renderer::new(RenderOptions {
        use_color: cli.color.use_color(),
        theme: config.theme,
    });
    let journal = Journal::with_config(config)?;

    if cli.path {
        renderer.print_info(&format!("{}", journal.config.journal_file.display()));
        renderer.print_info(&format!("{}", journal.config.backup_dir.display()));
        return Ok(());
    }

    // Order matters: flags first, free text (write mode) last, the editor when nothing else applies.
    let modes: [CliMode; 8] = [
        clear_mode,
        export_mode,
        delete_mode,
        edit_mode,
        read_mode,
        calendar_mode,
        write_mode,
        editor_mode,
    ];
    for mode in modes {
        if let CliModeResult::Finish = mode(&cli, &renderer, &journal)? {
            log::debug!("command finished");
            return Ok(());
        }
    }

    Ok(())
}
