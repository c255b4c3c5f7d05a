// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings subcommand

use std::io::Write;
use std::path::Path;

use crate::cli::args::SettingsArgs;
use crate::config::Settings;
use crate::error::Result;

/// Execute the settings command against the file at `path`.
///
/// `--path` and `--init` never parse the file, so they still work when it is
/// corrupt.
pub fn execute(args: &SettingsArgs, path: &Path, out: &mut impl Write) -> Result<()> {
    if args.path {
        writeln!(out, "{}", path.display())?;
        return Ok(());
    }

    if args.init {
        if path.exists() {
            writeln!(out, "Settings already exist at {}", path.display())?;
        } else {
            Settings::default().save_to(path)?;
            writeln!(out, "Wrote default settings to {}", path.display())?;
        }
        return Ok(());
    }

    let settings = Settings::load_from(path)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
    Ok(())
}
