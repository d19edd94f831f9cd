// Copyright (c) 2025 Shopdash contributors. All rights reserved.

mod config;
mod consts;
mod data;
mod logging;
mod time_range;
mod ui;

use crate::config::{Config, get_config_path};
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the operations dashboard
    Start {
        /// Disable the dashboard background fill.
        #[arg(long)]
        no_background_color: bool,
    },
    /// Remove the saved display preferences.
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(logging::get_rust_log_level().into());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            no_background_color,
        } => {
            // Saved preferences apply first; the CLI flag overrides them.
            let mut with_background_color = Config::default().with_background_color;
            if config_path.exists() {
                match Config::load_from_file(&config_path) {
                    Ok(config) => with_background_color = config.with_background_color,
                    Err(e) => log::warn!("Ignoring unreadable config file: {}", e),
                }
            }
            if no_background_color {
                with_background_color = false;
            }
            start(UIConfig::new(with_background_color)).await
        }
        Command::Reset => {
            println!("Removing saved display preferences...");
            Config::clear_preferences(&config_path).map_err(Into::into)
        }
    }
}

/// Starts the dashboard UI.
///
/// # Arguments
/// * `ui_config` - Display preferences for this session.
async fn start(ui_config: UIConfig) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(ui_config);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
