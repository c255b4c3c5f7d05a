// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Widgets for the workspace TUI

pub mod chat_panel;
pub mod divider;
pub mod outline_panel;
pub mod preview_panel;
pub mod status_bar;

pub use chat_panel::{ChatControls, ChatPanel};
pub use divider::Divider;
pub use outline_panel::OutlinePanel;
pub use preview_panel::PreviewPanel;
pub use status_bar::StatusBar;
