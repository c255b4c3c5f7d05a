// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Simulated assistant
//!
//! Stands in for the course-generation service: every message gets the same
//! demo reply after a fixed delay, and in the outline stage a message about
//! the course also produces a revised outline.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::Settings;
use crate::stage::Stage;

use super::events::{send_event, AppEvent, EventSender};
use super::state::CourseData;

/// Whether `text` asks about the course or its outline
pub fn mentions_course(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("course") || lower.contains("outline")
}

#[derive(Debug, Clone)]
pub struct DemoAssistant {
    delay: Duration,
    reply: String,
}

impl DemoAssistant {
    pub fn new(delay: Duration, reply: impl Into<String>) -> Self {
        Self {
            delay,
            reply: reply.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.reply_delay(), settings.assistant.demo_reply.clone())
    }

    /// Schedule the reply to `message`. Must be called inside a tokio runtime.
    pub fn respond(&self, message: &str, stage: Stage, tx: EventSender) -> JoinHandle<()> {
        let delay = self.delay;
        let reply = self.reply.clone();
        let revise = stage.revises_outline() && mentions_course(message);
        tracing::debug!(delay_ms = delay.as_millis() as u64, revise, "scheduling assistant reply");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            send_event(&tx, AppEvent::AssistantReply(reply));
            if revise {
                send_event(&tx, AppEvent::OutlineRevised(CourseData::revised()));
            }
        })
    }
}
