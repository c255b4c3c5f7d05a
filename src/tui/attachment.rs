// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Source PDFs attached from the chat input
//!
//! `/attach <path>` records a local PDF as course source material. Only the
//! file's presence and type are checked; its contents are never read.

use std::path::{Path, PathBuf};

use crate::error::{CourseError, Result};

/// Chat command that attaches a source file
pub const ATTACH_COMMAND: &str = "/attach";

/// A validated source PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAttachment {
    pub path: PathBuf,
    pub file_name: String,
    pub size_bytes: u64,
}

impl SourceAttachment {
    /// Validate `path` as an existing `.pdf` file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Err(CourseError::InvalidInput(format!(
                "only PDF files can be attached: {}",
                path.display()
            )));
        }

        let metadata = std::fs::metadata(path).map_err(|_| {
            CourseError::InvalidInput(format!("no such file: {}", path.display()))
        })?;
        if !metadata.is_file() {
            return Err(CourseError::InvalidInput(format!(
                "not a file: {}",
                path.display()
            )));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size_bytes: metadata.len(),
        })
    }

    /// Chat line recorded for the attachment
    pub fn summary(&self) -> String {
        format!("Attached source: {} ({})", self.file_name, format_size(self.size_bytes))
    }
}

/// The path argument of an `/attach` command, if `text` is one.
///
/// `Some("")` means the command was given without a path.
pub fn parse_attach_command(text: &str) -> Option<&str> {
    let rest = text.trim().strip_prefix(ATTACH_COMMAND)?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
