// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Authoring stages that host the split workspace

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which authoring stage is shown.
///
/// Both stages put the chat in the primary pane; they differ in what the
/// secondary pane shows and which pane controls it offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Iterate on the course outline with the assistant
    #[default]
    Outline,
    /// Preview the generated course website
    WebDesign,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Outline => "Outline",
            Stage::WebDesign => "Web Design",
        }
    }

    /// Step number shown in the status bar (upload is step 1)
    pub fn step(self) -> u8 {
        match self {
            Stage::Outline => 2,
            Stage::WebDesign => 3,
        }
    }

    /// Title of the secondary pane
    pub fn secondary_title(self) -> &'static str {
        match self {
            Stage::Outline => "Course Outline",
            Stage::WebDesign => "Web Preview",
        }
    }

    /// Whether the secondary pane can be hidden and opened in full view
    pub fn secondary_hideable(self) -> bool {
        matches!(self, Stage::WebDesign)
    }

    /// Whether chat messages can revise the outline
    pub fn revises_outline(self) -> bool {
        matches!(self, Stage::Outline)
    }
}
