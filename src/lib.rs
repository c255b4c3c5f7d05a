// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Coursecraft - a terminal workspace for designing courses.
//!
//! This crate exposes:
//! - `workspace`: the split-pane model (ratio, arrangement, visibility, drag, layout)
//! - `tui`: the ratatui host that puts a chat beside the course outline or web preview
//! - `config`, `cli`, `commands`, `error`: plumbing used by the `coursecraft` binary
//!
//! The workspace module has no terminal dependencies beyond `Rect`, so it can
//! be driven directly from tests or another front end.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod stage;
pub mod tui;
pub mod workspace;

pub use error::{CourseError, Result};
