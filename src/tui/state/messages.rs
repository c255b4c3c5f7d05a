// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Message state for the chat pane

use chrono::{DateTime, TimeZone, Utc};

/// Safely truncate a string at a character boundary, appending "..." if truncated.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Role of a message participant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "you",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A chat message for display
#[derive(Debug, Clone)]
pub struct DisplayMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl DisplayMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content, Utc::now())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content, Utc::now())
    }

    fn new(role: MessageRole, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
        }
    }

    /// Time shown next to the role label
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    /// Conversation the workspace opens with
    pub fn demo_conversation() -> Vec<DisplayMessage> {
        let at = |minute: u32| {
            Utc.with_ymd_and_hms(2024, 4, 12, 9, minute, 0)
                .single()
                .unwrap_or_else(Utc::now)
        };
        vec![
            Self::new(
                MessageRole::User,
                "I want to build a course that teaches developers how to co-create outlines with AI.",
                at(27),
            ),
            Self::new(
                MessageRole::Assistant,
                "Great! Tell me about your target learners and how you envision supporting them \
                 after each module.",
                at(27),
            ),
            Self::new(
                MessageRole::User,
                "They already know React. I need structure that shows how to pair UI craft with AI prompts.",
                at(29),
            ),
            Self::new(
                MessageRole::Assistant,
                "Understood. I drafted an outline that escalates from foundational UX to advanced \
                 AI orchestration. Feel free to iterate further below.",
                at(30),
            ),
        ]
    }
}
