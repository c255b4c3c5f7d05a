// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Coursecraft - course authoring workspace for your terminal
//!
//! Entry point for the coursecraft CLI application.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use coursecraft::cli::{Cli, Commands, RunArgs};
use coursecraft::commands;
use coursecraft::config::Settings;
use coursecraft::error::{CourseError, Result};
use coursecraft::tui::{run_workspace_tui, WorkspaceTuiConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let tui_mode = !matches!(cli.command, Some(Commands::Settings(_)));
    init_tracing(cli.verbose, tui_mode);

    match cli.command {
        Some(Commands::Settings(args)) => {
            commands::settings::execute(&args, &settings_path, &mut io::stdout())
        }
        Some(Commands::Run(args)) => {
            run_workspace(&args, Settings::load_from(&settings_path)?).await
        }
        None => run_workspace(&RunArgs::default(), Settings::load_from(&settings_path)?).await,
    }
}

/// Install the tracing subscriber.
///
/// While the TUI owns the terminal, log lines go to the log file instead of
/// stderr. `RUST_LOG` still takes precedence over `-v`.
fn init_tracing(verbose: u8, tui_mode: bool) {
    let mut env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    if verbose > 0 {
        let directive = if verbose > 1 {
            "coursecraft=trace"
        } else {
            "coursecraft=debug"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    if tui_mode {
        if let Some(file) = open_log_file(&Settings::log_path()) {
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
            return;
        }
        // No writable log file: drop events rather than draw over the TUI
        builder.with_writer(io::sink).init();
        return;
    }
    builder.with_writer(io::stderr).init();
}

fn open_log_file(path: &Path) -> Option<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

async fn run_workspace(args: &RunArgs, settings: Settings) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(CourseError::InvalidInput(
            "the workspace needs an interactive terminal".to_string(),
        ));
    }

    let config = WorkspaceTuiConfig {
        stage: args.stage.unwrap_or(settings.ui.default_stage),
        mouse: settings.ui.mouse && !args.no_mouse,
    };
    tracing::debug!(stage = ?config.stage, mouse = config.mouse, "starting workspace");
    run_workspace_tui(config, settings).await
}
