// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::stage::Stage;

/// coursecraft - co-author a course outline with an assistant in your terminal
#[derive(Parser, Debug)]
#[command(name = "coursecraft")]
#[command(version, about = "Course authoring workspace for your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path (defaults to ~/.coursecraft/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the authoring workspace (default when no command given)
    Run(RunArgs),

    /// Show or initialize settings
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the run subcommand
#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Stage to open
    #[arg(short, long, value_enum)]
    pub stage: Option<Stage>,

    /// Disable mouse capture (keyboard resizing still works)
    #[arg(long)]
    pub no_mouse: bool,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug, Default)]
pub struct SettingsArgs {
    /// Print the settings file location instead of its contents
    #[arg(long)]
    pub path: bool,

    /// Write the default settings file if none exists
    #[arg(long)]
    pub init: bool,
}

impl Cli {
    /// The run arguments, defaulting when no subcommand was given
    pub fn run_args(&self) -> Option<&RunArgs> {
        match &self.command {
            Some(Commands::Run(args)) => Some(args),
            Some(Commands::Settings(_)) => None,
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args() {
        let cli = Cli::try_parse_from(["coursecraft"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_run_with_stage() {
        let cli = Cli::try_parse_from(["coursecraft", "run", "--stage", "web-design"]).unwrap();
        let args = cli.run_args().unwrap();
        assert_eq!(args.stage, Some(Stage::WebDesign));
        assert!(!args.no_mouse);
    }

    #[test]
    fn test_cli_rejects_unknown_stage() {
        assert!(Cli::try_parse_from(["coursecraft", "run", "--stage", "upload"]).is_err());
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["coursecraft", "-vv", "run"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_settings_alias() {
        let cli = Cli::try_parse_from(["coursecraft", "config", "--path"]).unwrap();
        match cli.command {
            Some(Commands::Settings(args)) => {
                assert!(args.path);
                assert!(!args.init);
            }
            _ => panic!("expected settings command"),
        }
    }

    #[test]
    fn test_cli_global_config() {
        let cli = Cli::try_parse_from(["coursecraft", "run", "--config", "/tmp/s.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/s.json")));
    }
}
