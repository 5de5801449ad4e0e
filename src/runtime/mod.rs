use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::cli::{Cli, Command};

mod commands;
mod event_loop;
mod logging;
mod settings;

fn directory_or_cwd(directory: Option<PathBuf>) -> Result<PathBuf> {
    match directory {
        Some(d) => Ok(d),
        None => Ok(std::env::current_dir()?),
    }
}

pub fn run() -> Result<()> {
    let args = Cli::parse();
    let settings = settings::load_settings();

    match args.command {
        Command::Rename {
            directory,
            fields,
            dry_run,
            strip_leading_separator,
        } => {
            logging::setup_logger(args.log_level)?;
            let directory = directory_or_cwd(directory)?;
            commands::rename(
                &settings,
                &directory,
                fields.as_deref(),
                dry_run,
                strip_leading_separator,
            )
        }
        Command::List { directory } => {
            logging::setup_logger(args.log_level)?;
            commands::list(&settings, &directory_or_cwd(directory)?)
        }
        Command::Config => commands::print_config(&settings),
        Command::Tui { directory } => {
            if let Some(path) = &settings.log.file {
                logging::setup_file_logger(args.log_level, path)?;
            }
            run_tui(&settings, directory)
        }
    }
}

fn run_tui(settings: &crate::config::Settings, directory: Option<PathBuf>) -> Result<()> {
    let directory = directory.map(|d| d.display().to_string());
    let mut app = App::new(directory, settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
