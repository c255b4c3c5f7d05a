// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! State held by the workspace TUI besides the split itself

pub mod course;
pub mod input;
pub mod messages;

pub use course::{CourseData, OutlineItem};
pub use input::InputState;
pub use messages::{truncate_string, DisplayMessage, MessageRole};
