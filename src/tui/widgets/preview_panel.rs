// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Web preview pane
//!
//! A text mock of the generated course site.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::state::CourseData;

pub struct PreviewPanel<'a> {
    course: &'a CourseData,
    chat_hidden: bool,
    full_view: bool,
}

impl<'a> PreviewPanel<'a> {
    pub fn new(course: &'a CourseData) -> Self {
        Self {
            course,
            chat_hidden: false,
            full_view: false,
        }
    }

    pub fn chat_hidden(mut self, hidden: bool) -> Self {
        self.chat_hidden = hidden;
        self
    }

    /// Render as the full-screen view rather than a pane
    pub fn full_view(mut self, full_view: bool) -> Self {
        self.full_view = full_view;
        self
    }

    fn title(&self) -> Line<'static> {
        let hint_style = Style::default().fg(Color::DarkGray);
        let mut spans = vec![Span::styled(
            " Web Preview ",
            Style::default().fg(Color::Cyan).bold(),
        )];
        if self.full_view {
            spans.push(Span::styled("Esc back ", hint_style));
        } else {
            let chat_hint = if self.chat_hidden {
                "^T show chat "
            } else {
                "^T hide chat "
            };
            spans.push(Span::styled(chat_hint, hint_style));
            spans.push(Span::styled("^P hide ", hint_style));
            spans.push(Span::styled("^O full view ", hint_style));
        }
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::styled(
                self.course.title.as_str(),
                Style::default().fg(Color::White).bold(),
            )
            .centered(),
            Line::styled(
                format!("{} modules · {} topics", self.course.outline.len(), self.course.topic_count()),
                Style::default().fg(Color::DarkGray),
            )
            .centered(),
            Line::default(),
        ];
        if self.course.outline.is_empty() {
            lines.push(
                Line::styled(
                    "Nothing to preview yet. Chat with the assistant to build your course.",
                    Style::default().fg(Color::DarkGray),
                )
                .centered(),
            );
            return lines;
        }
        for item in &self.course.outline {
            let label = match item.week {
                Some(week) => format!("[ Week {} ] {}", week, item.title),
                None => format!("[ Module ] {}", item.title),
            };
            lines.push(Line::styled(label, Style::default().fg(Color::Blue).bold()));
            if let Some(description) = &item.description {
                lines.push(Line::from(format!("  {}", description)));
            }
            lines.push(Line::default());
        }
        lines.push(
            Line::styled("[ Enroll now ]", Style::default().fg(Color::Green).bold()).centered(),
        );
        lines
    }
}

impl Widget for PreviewPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(self.title());
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_site_mock() {
        let course = CourseData::demo();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        PreviewPanel::new(&course).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Web Preview"));
        assert!(text.contains("3 modules"));
        assert!(text.contains("Week 2"));
        assert!(text.contains("full view"));
    }

    #[test]
    fn test_full_view_hints() {
        let course = CourseData::demo();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        PreviewPanel::new(&course)
            .full_view(true)
            .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Esc back"));
        assert!(!text.contains("full view"));
    }

    #[test]
    fn test_empty_outline() {
        let course = CourseData {
            title: "Draft".to_string(),
            outline: Vec::new(),
        };
        let area = Rect::new(0, 0, 100, 10);
        let mut buf = Buffer::empty(area);
        PreviewPanel::new(&course).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Nothing to preview"));
    }
}
