// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Status bar widget

use ratatui::prelude::*;

use crate::stage::Stage;
use crate::tui::state::truncate_string;
use crate::workspace::{Arrangement, RenderMode, SplitRatio};

/// Widget for rendering the title/status line
pub struct StatusBar<'a> {
    stage: Stage,
    ratio: SplitRatio,
    arrangement: Arrangement,
    mode: RenderMode,
    resizing: bool,
    status_message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(stage: Stage, ratio: SplitRatio, arrangement: Arrangement, mode: RenderMode) -> Self {
        Self {
            stage,
            ratio,
            arrangement,
            mode,
            resizing: false,
            status_message: None,
        }
    }

    pub fn resizing(mut self, resizing: bool) -> Self {
        self.resizing = resizing;
        self
    }

    pub fn status(mut self, message: Option<&'a str>) -> Self {
        self.status_message = message;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let bg = Style::default().bg(Color::DarkGray);
        buf.set_style(area, bg);

        let title = format!(" coursecraft  step {} · {} ", self.stage.step(), self.stage.label());
        let layout = format!(
            " {} {} {} ",
            self.ratio,
            self.arrangement.label(),
            self.mode.label()
        );
        let mut spans = vec![
            Span::styled(title, bg.fg(Color::White).bold()),
            Span::styled("─", bg.fg(Color::Gray)),
            Span::styled(layout, bg.fg(Color::Cyan)),
        ];
        if self.resizing {
            spans.push(Span::styled(" ↔ resizing ", bg.fg(Color::Yellow).bold()));
            if self.ratio.is_at_bound() {
                spans.push(Span::styled("at limit ", bg.fg(Color::Red)));
            }
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if let Some(status) = self.status_message {
            let status = truncate_string(status, 40);
            let width = status.chars().count() as u16 + 1;
            if width < area.width {
                let x = area.x + area.width - width;
                buf.set_string(x, area.y, &status, bg.fg(Color::Yellow));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(bar: StatusBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_status_bar_shows_layout() {
        let bar = StatusBar::new(
            Stage::Outline,
            SplitRatio::clamp(50.0),
            Arrangement::PrimaryRight,
            RenderMode::Both,
        );
        let text = rendered(bar, 100);
        assert!(text.contains("Outline"));
        assert!(text.contains("50.00%"));
        assert!(text.contains("panel|chat"));
        assert!(!text.contains("resizing"));
    }

    #[test]
    fn test_status_bar_resizing_and_status() {
        let bar = StatusBar::new(
            Stage::WebDesign,
            SplitRatio::default(),
            Arrangement::PrimaryLeft,
            RenderMode::Both,
        )
        .resizing(true)
        .status(Some("Outline updated"));
        let text = rendered(bar, 120);
        assert!(text.contains("resizing"));
        assert!(text.contains("Outline updated"));
    }

    #[test]
    fn test_status_bar_flags_limit_while_resizing() {
        let at_min = StatusBar::new(
            Stage::Outline,
            SplitRatio::clamp(10.0),
            Arrangement::PrimaryLeft,
            RenderMode::Both,
        )
        .resizing(true);
        assert!(rendered(at_min, 120).contains("at limit"));

        let inside = StatusBar::new(
            Stage::Outline,
            SplitRatio::clamp(50.0),
            Arrangement::PrimaryLeft,
            RenderMode::Both,
        )
        .resizing(true);
        assert!(!rendered(inside, 120).contains("at limit"));
    }

    #[test]
    fn test_status_bar_zero_height() {
        let area = Rect::new(0, 0, 10, 0);
        let mut buf = Buffer::empty(area);
        StatusBar::new(
            Stage::Outline,
            SplitRatio::default(),
            Arrangement::PrimaryLeft,
            RenderMode::Both,
        )
        .render(area, &mut buf);
    }
}
