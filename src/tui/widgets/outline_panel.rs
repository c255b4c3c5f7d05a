// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Course outline pane

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::state::CourseData;

pub struct OutlinePanel<'a> {
    course: &'a CourseData,
    chat_hidden: bool,
}

impl<'a> OutlinePanel<'a> {
    pub fn new(course: &'a CourseData) -> Self {
        Self {
            course,
            chat_hidden: false,
        }
    }

    /// Whether the chat pane is currently hidden (changes the toggle hint)
    pub fn chat_hidden(mut self, hidden: bool) -> Self {
        self.chat_hidden = hidden;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::styled(self.course.title.as_str(), Style::default().bold()),
            Line::default(),
        ];
        for item in &self.course.outline {
            let mut header = Vec::new();
            if let Some(week) = item.week {
                header.push(Span::styled(
                    format!("WEEK {}  ", week),
                    Style::default().fg(Color::Blue).bold(),
                ));
            }
            header.push(Span::styled(item.title.as_str(), Style::default().bold()));
            if let Some(duration) = &item.duration {
                header.push(Span::styled(
                    format!("  ({})", duration),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(header));

            if let Some(description) = &item.description {
                lines.push(Line::styled(
                    format!("  {}", description),
                    Style::default().fg(Color::Gray),
                ));
            }
            for topic in &item.topics {
                lines.push(Line::from(format!("    • {}", topic)));
            }
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for OutlinePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = if self.chat_hidden {
            "^T show chat "
        } else {
            "^T hide chat "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(vec![
                Span::styled(" Course Outline ", Style::default().fg(Color::Cyan).bold()),
                Span::styled(hint, Style::default().fg(Color::DarkGray)),
            ]));
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
    fn test_renders_outline() {
        let course = CourseData::demo();
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        OutlinePanel::new(&course).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Course Outline"));
        assert!(text.contains("WEEK 1"));
        assert!(text.contains("Kickoff & Discovery"));
        assert!(text.contains("hide chat"));
    }

    #[test]
    fn test_hint_when_chat_hidden() {
        let course = CourseData::revised();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        OutlinePanel::new(&course)
            .chat_hidden(true)
            .render(area, &mut buf);
        assert!(buffer_text(&buf).contains("show chat"));
    }
}
