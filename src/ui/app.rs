//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{SPLASH_DURATION, TICK_INTERVAL};
use crate::time_range::TimeRange;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the operations overview.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// UI display preferences.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    fn enter_dashboard(&mut self) {
        let state = DashboardState::new(self.ui_config.clone());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Update the state based on the current screen
        match &mut app.current_screen {
            Screen::Splash => {}
            Screen::Dashboard(state) => {
                state.update();
            }
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= SPLASH_DURATION {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any other key press skips the splash screen
                        app.enter_dashboard();
                    }
                    Screen::Dashboard(state) => match key.code {
                        KeyCode::Right | KeyCode::Tab => state.select_next_range(),
                        KeyCode::Left | KeyCode::BackTab => state.select_previous_range(),
                        KeyCode::Char(c @ '1'..='4') => {
                            let index = c as usize - '1' as usize;
                            state.set_time_range(TimeRange::ALL[index]);
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
