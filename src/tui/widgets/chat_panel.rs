// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat pane: conversation history plus the input line

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::state::{DisplayMessage, InputState, MessageRole};

/// Height of the input box including borders
const INPUT_HEIGHT: u16 = 3;
/// Width of the "> " prompt
const PROMPT_WIDTH: u16 = 2;

/// Pane controls the chat offers, shown in its title
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatControls {
    /// Swap is offered while both panes are visible
    pub can_swap: bool,
    /// "Show preview" is offered while the preview is hidden
    pub can_show_preview: bool,
}

pub struct ChatPanel<'a> {
    messages: &'a [DisplayMessage],
    input: &'a InputState,
    loading: bool,
    scroll_back: u16,
    controls: ChatControls,
}

impl<'a> ChatPanel<'a> {
    pub fn new(messages: &'a [DisplayMessage], input: &'a InputState) -> Self {
        Self {
            messages,
            input,
            loading: false,
            scroll_back: 0,
            controls: ChatControls::default(),
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn scroll_back(mut self, lines: u16) -> Self {
        self.scroll_back = lines;
        self
    }

    pub fn controls(mut self, controls: ChatControls) -> Self {
        self.controls = controls;
        self
    }

    /// Screen position of the input cursor when rendered into `area`
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let input_area = Self::split(area).1;
        let cursor = u16::try_from(self.input.cursor()).unwrap_or(u16::MAX);
        let x = input_area
            .x
            .saturating_add(1 + PROMPT_WIDTH)
            .saturating_add(cursor);
        let y = input_area.y.saturating_add(1);
        (
            x.min(input_area.right().saturating_sub(2)),
            y.min(input_area.bottom().saturating_sub(1)),
        )
    }

    fn split(area: Rect) -> (Rect, Rect) {
        let input_height = INPUT_HEIGHT.min(area.height);
        let history = Rect::new(area.x, area.y, area.width, area.height - input_height);
        let input = Rect::new(area.x, area.y + history.height, area.width, input_height);
        (history, input)
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(" Chat ", Style::default().fg(Color::Cyan).bold())];
        if self.controls.can_swap {
            spans.push(Span::styled("^S swap ", Style::default().fg(Color::DarkGray)));
        }
        if self.controls.can_show_preview {
            spans.push(Span::styled(
                "^P show preview ",
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }

    fn history_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for message in self.messages {
            let role_style = match message.role {
                MessageRole::User => Style::default().fg(Color::Green).bold(),
                MessageRole::Assistant => Style::default().fg(Color::Magenta).bold(),
            };
            lines.push(Line::from(vec![
                Span::styled(message.role.label(), role_style),
                Span::styled(
                    format!("  {}", message.time_label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            for text in message.content.lines() {
                lines.push(Line::from(format!("  {}", text)));
            }
            lines.push(Line::default());
        }
        if self.loading {
            lines.push(Line::styled(
                "assistant is typing…",
                Style::default().fg(Color::DarkGray).italic(),
            ));
        }
        lines
    }
}

/// Rows `lines` occupy once wrapped to `width` columns
fn wrapped_height(lines: &[Line<'_>], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

impl Widget for ChatPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (history_area, input_area) = Self::split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(self.title());
        let inner = block.inner(history_area);
        block.render(history_area, buf);

        let lines = self.history_lines();
        let total = wrapped_height(&lines, inner.width);
        let max_offset = total.saturating_sub(usize::from(inner.height));
        let offset = max_offset.saturating_sub(usize::from(self.scroll_back));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset.min(usize::from(u16::MAX)) as u16, 0))
            .render(inner, buf);

        let border = if self.loading { Color::Yellow } else { Color::Cyan };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let input_inner = input_block.inner(input_area);
        input_block.render(input_area, buf);

        let content = if self.input.is_empty() {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    "Ask about your course...",
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::raw(self.input.text()),
            ])
        };
        Paragraph::new(content).render(input_inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_messages_and_placeholder() {
        let messages = vec![DisplayMessage::user("hi there")];
        let input = InputState::new();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        ChatPanel::new(&messages, &input).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Chat"));
        assert!(text.contains("hi there"));
        assert!(text.contains("Ask about your course"));
    }

    #[test]
    fn test_loading_indicator() {
        let messages = Vec::new();
        let input = InputState::new();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        ChatPanel::new(&messages, &input)
            .loading(true)
            .render(area, &mut buf);
        assert!(buffer_text(&buf).contains("typing"));
    }

    #[test]
    fn test_controls_in_title() {
        let messages = Vec::new();
        let input = InputState::new();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        ChatPanel::new(&messages, &input)
            .controls(ChatControls {
                can_swap: false,
                can_show_preview: true,
            })
            .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("show preview"));
        assert!(!text.contains("swap"));
    }

    #[test]
    fn test_newest_message_visible_when_overflowing() {
        let messages: Vec<_> = (0..20)
            .map(|i| DisplayMessage::assistant(format!("message {}", i)))
            .collect();
        let input = InputState::new();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        ChatPanel::new(&messages, &input).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("message 19"));
        assert!(!text.contains("message 0 "));
    }

    #[test]
    fn test_cursor_position() {
        let messages = Vec::new();
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('b');
        let panel = ChatPanel::new(&messages, &input);
        let area = Rect::new(10, 0, 40, 12);
        // Border + prompt + two characters
        assert_eq!(panel.cursor_position(area), (10 + 1 + 2 + 2, 10));
    }

    #[test]
    fn test_cursor_position_with_very_long_input() {
        let messages = Vec::new();
        let mut input = InputState::new();
        input.insert_str(&"x".repeat(70_000));
        let panel = ChatPanel::new(&messages, &input);
        let area = Rect::new(100, 0, 40, 12);
        // Clamped to the last column inside the input border
        assert_eq!(panel.cursor_position(area), (138, 10));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let messages = vec![DisplayMessage::user("hi")];
        let input = InputState::new();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        ChatPanel::new(&messages, &input).render(area, &mut buf);
    }
}
