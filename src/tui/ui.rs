// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Frame rendering for the workspace TUI

use ratatui::{prelude::*, widgets::Paragraph};

use crate::stage::Stage;
use crate::workspace::{Pane, RenderMode};

use super::app::{View, WorkspaceApp};
use super::widgets::{ChatControls, ChatPanel, Divider, OutlinePanel, PreviewPanel, StatusBar};

/// Draw one frame.
///
/// Takes the app mutably because laying out the workspace records the
/// rectangles used for divider hit-testing and drag measurement.
pub fn draw(frame: &mut Frame, app: &mut WorkspaceApp) {
    let [status_area, body, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let overrides = app.workspace.surface().overrides();
    frame.render_widget(
        StatusBar::new(
            app.stage,
            app.workspace.ratio(),
            app.workspace.arrangement(),
            app.workspace.render_mode(),
        )
        .resizing(overrides.resize_cursor)
        .status(app.status_message.as_deref()),
        status_area,
    );

    match app.view {
        View::FullPreview => {
            frame.render_widget(PreviewPanel::new(&app.course).full_view(true), body);
        }
        View::Workspace => draw_workspace(frame, app, body),
    }

    frame.render_widget(
        Paragraph::new(help_line(app)).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_workspace(frame: &mut Frame, app: &mut WorkspaceApp, area: Rect) {
    let rects = app.workspace.layout(area);
    let overrides = app.workspace.surface().overrides();
    let chat_hidden = app.workspace.is_hidden(Pane::Primary);
    let secondary_hidden = app.workspace.is_hidden(Pane::Secondary);

    if let Some(rect) = rects.primary {
        let controls = ChatControls {
            can_swap: app.workspace.render_mode() == RenderMode::Both,
            can_show_preview: secondary_hidden && app.stage.secondary_hideable(),
        };
        let panel = ChatPanel::new(&app.messages, &app.input)
            .loading(app.is_loading)
            .scroll_back(app.chat_scroll_back)
            .controls(controls);
        let cursor = panel.cursor_position(rect);
        frame.render_widget(panel, rect);
        // No text cursor while the divider is being dragged
        if !overrides.selection_suppressed {
            frame.set_cursor_position(cursor);
        }
    }

    if let Some(rect) = rects.secondary {
        match app.stage {
            Stage::Outline => frame.render_widget(
                OutlinePanel::new(&app.course).chat_hidden(chat_hidden),
                rect,
            ),
            Stage::WebDesign => frame.render_widget(
                PreviewPanel::new(&app.course).chat_hidden(chat_hidden),
                rect,
            ),
        }
    }

    if let Some(rect) = rects.divider {
        frame.render_widget(Divider::new(overrides.resize_cursor), rect);
    }
}

fn help_line(app: &WorkspaceApp) -> &'static str {
    match (app.view, app.stage) {
        (View::FullPreview, _) => " Esc back to workspace · ^Q quit",
        (View::Workspace, Stage::Outline) => {
            " drag divider or ^←/^→ resize · ^S swap · ^T chat · Enter send · /attach PDF · ^Q quit"
        }
        (View::Workspace, Stage::WebDesign) => {
            " drag divider or ^←/^→ resize · ^S swap · ^T chat · ^P preview · ^O full view · ^Q quit"
        }
    }
}
