// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Workspace application state
//!
//! Owns the split workspace and the content of both panes, and maps
//! terminal input onto workspace operations.

use std::path::Path;
use std::time::Duration;

use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::config::Settings;
use crate::error::Result;
use crate::stage::Stage;
use crate::workspace::{Pane, RenderMode, Side, Workspace};

use super::assistant::DemoAssistant;
use super::attachment::{parse_attach_command, SourceAttachment};
use super::events::{create_event_channel, AppEvent, EventReceiver, EventSender};
use super::state::{CourseData, DisplayMessage, InputState};
use super::surface::TerminalSurface;

/// What fills the screen below the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The split workspace
    Workspace,
    /// The secondary content on its own, full screen
    FullPreview,
}

/// Result of a tick (event loop iteration)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    Quit,
}

/// Main application state for the workspace TUI
pub struct WorkspaceApp {
    pub stage: Stage,
    pub workspace: Workspace<TerminalSurface>,
    pub view: View,

    // === Content ===
    pub messages: Vec<DisplayMessage>,
    pub input: InputState,
    pub course: CourseData,
    /// Source PDFs attached with `/attach`
    pub attachments: Vec<SourceAttachment>,
    /// Lines scrolled back from the newest message
    pub chat_scroll_back: u16,

    // === Status ===
    pub is_loading: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,

    // === Resources ===
    resize_step: f64,
    tick_rate: Duration,
    assistant: DemoAssistant,
    event_tx: EventSender,
    event_rx: EventReceiver,
}

impl WorkspaceApp {
    pub fn new(stage: Stage, settings: &Settings, surface: TerminalSurface) -> Self {
        let (event_tx, event_rx) = create_event_channel();
        Self {
            stage,
            workspace: Workspace::with_surface(surface),
            view: View::Workspace,

            messages: DisplayMessage::demo_conversation(),
            input: InputState::new(),
            course: CourseData::demo(),
            attachments: Vec::new(),
            chat_scroll_back: 0,

            is_loading: false,
            status_message: None,
            should_quit: false,

            resize_step: settings.ui.resize_step,
            tick_rate: settings.tick_rate(),
            assistant: DemoAssistant::from_settings(settings),
            event_tx,
            event_rx,
        }
    }

    /// Process one tick of the event loop
    pub async fn tick(&mut self) -> Result<TickResult> {
        if self.should_quit {
            return Ok(TickResult::Quit);
        }

        tokio::select! {
            Some(event) = self.event_rx.recv() => {
                self.handle_event(event);
            }
            _ = tokio::time::sleep(self.tick_rate) => {}
        }

        // Drain pending terminal input without blocking
        while crossterm::event::poll(Duration::from_millis(0))? {
            let event = crossterm::event::read()?;
            self.handle_terminal_event(event);
        }

        Ok(if self.should_quit {
            TickResult::Quit
        } else {
            TickResult::Continue
        })
    }

    /// Handle an event posted by a background task
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AssistantReply(text) => {
                self.messages.push(DisplayMessage::assistant(text));
                self.is_loading = false;
                self.chat_scroll_back = 0;
            }
            AppEvent::OutlineRevised(course) => {
                tracing::debug!(modules = course.outline.len(), "outline revised");
                self.course = course;
                self.set_status("Outline updated");
            }
        }
    }

    pub fn handle_terminal_event(&mut self, event: TermEvent) {
        match event {
            TermEvent::Key(key) => self.handle_key(key),
            TermEvent::Mouse(mouse) => self.handle_mouse(mouse),
            TermEvent::Paste(text) => {
                if self.view == View::Workspace && !self.workspace.is_hidden(Pane::Primary) {
                    self.input.insert_str(&text);
                }
            }
            TermEvent::FocusLost => {
                self.workspace.end_drag();
            }
            _ => {}
        }
    }

    // ==================== Input ====================

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) | (KeyCode::Char('q'), true) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Esc, _) if self.view == View::FullPreview => {
                self.close_full_view();
                return;
            }
            _ => {}
        }

        if self.view == View::FullPreview {
            return;
        }

        match (key.code, ctrl) {
            (KeyCode::Char('s'), true) => self.swap_panes(),
            (KeyCode::Char('t'), true) => self.toggle_chat(),
            (KeyCode::Char('p'), true) => self.toggle_preview(),
            (KeyCode::Char('o'), true) => self.open_full_view(),
            (KeyCode::Left, true) => self.nudge_divider(Side::Left),
            (KeyCode::Right, true) => self.nudge_divider(Side::Right),
            (KeyCode::Esc, _) => self.status_message = None,
            _ if !self.workspace.is_hidden(Pane::Primary) => self.handle_chat_key(key, ctrl),
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Enter => self.submit_message(),
            KeyCode::Char('w') if ctrl => self.input.delete_word(),
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Char(c) if !ctrl => self.input.insert_char(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Up => self.input.history_prev(),
            KeyCode::Down => self.input.history_next(),
            KeyCode::PageUp => self.chat_scroll_back = self.chat_scroll_back.saturating_add(5),
            KeyCode::PageDown => self.chat_scroll_back = self.chat_scroll_back.saturating_sub(5),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.view != View::Workspace {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.workspace.divider_hit(mouse.column, mouse.row) {
                    self.workspace.begin_drag();
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.workspace.drag_to_column(mouse.column);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.workspace.end_drag();
            }
            _ => {}
        }
    }

    // ==================== Actions ====================

    /// Swap sides; offered by the chat pane while both panes are shown
    pub fn swap_panes(&mut self) {
        if self.workspace.render_mode() != RenderMode::Both {
            self.set_status("Swap needs both panels visible");
            return;
        }
        self.workspace.handle(Pane::Primary).swap();
    }

    /// Toggle the chat; offered by the secondary pane
    pub fn toggle_chat(&mut self) {
        if self.workspace.is_hidden(Pane::Secondary) {
            self.set_status(format!("Show the {} first", self.stage.secondary_title()));
            return;
        }
        self.workspace.handle(Pane::Secondary).toggle_other();
    }

    /// Hide the preview from its own pane, or bring it back from the chat
    pub fn toggle_preview(&mut self) {
        if !self.stage.secondary_hideable() {
            return;
        }
        if self.workspace.is_hidden(Pane::Secondary) {
            self.workspace.handle(Pane::Primary).show_other();
        } else if !self.workspace.secondary_handle().hide_self() {
            self.set_status("Show the chat before hiding the preview");
        }
    }

    /// Open the preview full screen, leaving the chat behind in the workspace
    pub fn open_full_view(&mut self) {
        if !self.stage.secondary_hideable() || self.workspace.is_hidden(Pane::Secondary) {
            return;
        }
        self.workspace.end_drag();
        self.workspace.secondary_handle().open_full_view();
        self.view = View::FullPreview;
    }

    pub fn close_full_view(&mut self) {
        self.view = View::Workspace;
    }

    /// Move the divider one step towards `direction`
    pub fn nudge_divider(&mut self, direction: Side) {
        if self.workspace.render_mode() != RenderMode::Both {
            return;
        }
        let toward_primary = match direction {
            Side::Left => !self.workspace.is_swapped(),
            Side::Right => self.workspace.is_swapped(),
        };
        let delta = if toward_primary {
            -self.resize_step
        } else {
            self.resize_step
        };
        self.workspace.nudge_ratio(delta);
    }

    /// Send the input line to the assistant
    pub fn submit_message(&mut self) {
        if self.is_loading || self.workspace.is_hidden(Pane::Primary) {
            return;
        }
        let text = self.input.submit();
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        if let Some(path) = parse_attach_command(text) {
            self.attach_source(path);
            return;
        }

        self.messages.push(DisplayMessage::user(text));
        self.is_loading = true;
        self.chat_scroll_back = 0;
        self.assistant
            .respond(text, self.stage, self.event_tx.clone());
    }

    /// Record a source PDF; failures only produce a status message
    pub fn attach_source(&mut self, path: &str) {
        if path.is_empty() {
            self.set_status("Usage: /attach <file.pdf>");
            return;
        }
        match SourceAttachment::from_path(Path::new(path)) {
            Ok(attachment) => {
                tracing::debug!(file = %attachment.path.display(), "source attached");
                self.messages.push(DisplayMessage::user(attachment.summary()));
                self.chat_scroll_back = 0;
                self.set_status(format!("Attached {}", attachment.file_name));
                self.attachments.push(attachment);
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
