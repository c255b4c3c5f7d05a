// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Event system for the workspace TUI
//!
//! Background tasks (the simulated assistant) talk to the UI loop through an
//! unbounded tokio channel so they never block rendering.

use tokio::sync::mpsc;

use super::state::CourseData;

/// Events sent from background tasks to the UI loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The assistant finished a reply
    AssistantReply(String),
    /// The assistant posted a new outline
    OutlineRevised(CourseData),
}

/// Type alias for the event sender
pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Type alias for the event receiver
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

/// Create a new event channel
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Send an event, ignoring errors if the UI has already shut down
pub fn send_event(tx: &EventSender, event: AppEvent) {
    let _ = tx.send(event);
}
