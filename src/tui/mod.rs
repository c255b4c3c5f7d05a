// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Workspace TUI
//!
//! Hosts the split-pane workspace in the terminal:
//! - the chat pane on one side, the outline or web preview on the other
//! - mouse dragging of the divider, swapping, and hiding either pane
//! - a simulated assistant that answers after a fixed delay

pub mod app;
pub mod assistant;
pub mod attachment;
pub mod events;
pub mod state;
pub mod surface;
pub mod ui;
pub mod widgets;

use std::io;

use crossterm::{
    event::{
        DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Settings;
use crate::error::{CourseError, Result};
use crate::stage::Stage;

pub use app::{TickResult, View, WorkspaceApp};
pub use surface::TerminalSurface;

/// Options for one workspace session
#[derive(Debug, Clone, Copy)]
pub struct WorkspaceTuiConfig {
    pub stage: Stage,
    pub mouse: bool,
}

/// Run the workspace TUI until the user quits.
pub async fn run_workspace_tui(config: WorkspaceTuiConfig, settings: Settings) -> Result<()> {
    // Restore the terminal even if rendering panics
    let original_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_quietly();
        original_panic_hook(panic_info);
    }));

    let mut terminal = cleanup_on_error(setup_terminal(config.mouse), || {
        restore_terminal_quietly();
        let _ = std::panic::take_hook();
    })?;

    tracing::info!(stage = ?config.stage, mouse = config.mouse, "workspace opened");
    let mut app = WorkspaceApp::new(config.stage, &settings, TerminalSurface::new(config.mouse));
    let result = run_app(&mut terminal, &mut app).await;

    // Ends any drag still in progress and resets the pointer shape
    drop(app);

    let _ = std::panic::take_hook();
    disable_raw_mode().map_err(|e| CourseError::Tui(e.to_string()))?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange,
        DisableBracketedPaste
    )
    .map_err(|e| CourseError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| CourseError::Tui(e.to_string()))?;
    tracing::info!("workspace closed");

    result
}

/// Run `cleanup` if `result` is an error, then pass the result through
fn cleanup_on_error<T>(result: Result<T>, cleanup: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        cleanup();
    }
    result
}

fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().map_err(|e| CourseError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableFocusChange,
        EnableBracketedPaste
    )
    .map_err(|e| CourseError::Tui(e.to_string()))?;
    if mouse {
        execute!(stdout, EnableMouseCapture).map_err(|e| CourseError::Tui(e.to_string()))?;
    }
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| CourseError::Tui(e.to_string()))
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut WorkspaceApp) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| CourseError::Tui(e.to_string()))?;

        match app.tick().await? {
            TickResult::Continue => {}
            TickResult::Quit => return Ok(()),
        }
    }
}

fn restore_terminal_quietly() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange,
        DisableBracketedPaste
    );
}
