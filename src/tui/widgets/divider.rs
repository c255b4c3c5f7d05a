// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Draggable divider between the two panes

use ratatui::prelude::*;

pub struct Divider {
    active: bool,
}

impl Divider {
    pub fn new(active: bool) -> Self {
        Self { active }
    }
}

impl Widget for Divider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (symbol, style) = if self.active {
            ("┃", Style::default().fg(Color::Cyan))
        } else {
            ("│", Style::default().fg(Color::DarkGray))
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_symbol(symbol).set_style(style);
            }
        }
    }
}
