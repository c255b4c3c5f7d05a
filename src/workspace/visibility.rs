// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Pane visibility
//!
//! Visibility is a single tri-state value so that "both panes hidden" cannot
//! be represented. Every operation is idempotent and reports whether it
//! changed anything.

use super::Pane;

/// Which pane, if any, is hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Both,
    PrimaryHidden,
    SecondaryHidden,
}

/// Layout decision derived from [`Visibility`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Both,
    PrimaryOnly,
    SecondaryOnly,
}

impl RenderMode {
    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Both => "split",
            RenderMode::PrimaryOnly => "chat only",
            RenderMode::SecondaryOnly => "panel only",
        }
    }

    /// The single pane shown, if only one is
    pub fn sole_pane(self) -> Option<Pane> {
        match self {
            RenderMode::Both => None,
            RenderMode::PrimaryOnly => Some(Pane::Primary),
            RenderMode::SecondaryOnly => Some(Pane::Secondary),
        }
    }
}

impl Visibility {
    pub fn is_hidden(self, pane: Pane) -> bool {
        matches!(
            (self, pane),
            (Visibility::PrimaryHidden, Pane::Primary) | (Visibility::SecondaryHidden, Pane::Secondary)
        )
    }

    pub fn render_mode(self) -> RenderMode {
        match self {
            Visibility::PrimaryHidden => RenderMode::SecondaryOnly,
            Visibility::SecondaryHidden => RenderMode::PrimaryOnly,
            Visibility::Both => RenderMode::Both,
        }
    }

    /// Hide `pane`.
    ///
    /// Rejected when the other pane is already hidden, since that would leave
    /// nothing on screen.
    pub fn hide(&mut self, pane: Pane) -> bool {
        let next = match (*self, pane) {
            (Visibility::Both, Pane::Primary) => Visibility::PrimaryHidden,
            (Visibility::Both, Pane::Secondary) => Visibility::SecondaryHidden,
            (Visibility::PrimaryHidden, Pane::Secondary)
            | (Visibility::SecondaryHidden, Pane::Primary) => {
                tracing::debug!(?pane, "refusing to hide the last visible pane");
                return false;
            }
            _ => return false,
        };
        self.transition(next)
    }

    /// Show `pane`; a no-op if it is already shown
    pub fn show(&mut self, pane: Pane) -> bool {
        if self.is_hidden(pane) {
            self.transition(Visibility::Both)
        } else {
            false
        }
    }

    pub fn toggle(&mut self, pane: Pane) -> bool {
        if self.is_hidden(pane) {
            self.show(pane)
        } else {
            self.hide(pane)
        }
    }

    fn transition(&mut self, next: Visibility) -> bool {
        tracing::debug!(from = ?*self, to = ?next, "pane visibility changed");
        *self = next;
        true
    }
}
