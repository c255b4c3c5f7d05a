// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Adjustable split-pane workspace
//!
//! Hosts two logical panes side by side:
//! - the primary pane (the chat) owns the split ratio
//! - the secondary pane (outline or preview) takes the rest
//!
//! The user can drag the divider, swap sides, and hide either pane. Ratio and
//! arrangement survive hide/show cycles; nothing here is persisted.

pub mod arrangement;
pub mod composer;
pub mod drag;
pub mod ratio;
pub mod visibility;

pub use arrangement::{Arrangement, Side};
pub use composer::{Composition, PaneRects, PaneSlot, DIVIDER_WIDTH};
pub use drag::{ContainerBounds, DragController, DragSurface, SurfaceOverrides};
pub use ratio::{RatioModel, SplitRatio};
pub use visibility::{RenderMode, Visibility};

use ratatui::layout::Rect;

/// Logical pane, independent of the side it renders on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Primary,
    Secondary,
}

impl Pane {
    pub fn other(self) -> Pane {
        match self {
            Pane::Primary => Pane::Secondary,
            Pane::Secondary => Pane::Primary,
        }
    }
}

/// The split-pane workspace state.
///
/// `S` is the surface that carries the drag overrides. It is restored when a
/// drag ends and, if a drag is still running, when the workspace is dropped.
#[derive(Debug)]
pub struct Workspace<S: DragSurface = SurfaceOverrides> {
    ratio: RatioModel,
    arrangement: Arrangement,
    visibility: Visibility,
    drag: DragController,
    surface: S,
    last_layout: Option<PaneRects>,
}

impl Workspace<SurfaceOverrides> {
    pub fn new() -> Self {
        Self::with_surface(SurfaceOverrides::default())
    }
}

impl Default for Workspace<SurfaceOverrides> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DragSurface> Workspace<S> {
    pub fn with_surface(surface: S) -> Self {
        Self {
            ratio: RatioModel::new(),
            arrangement: Arrangement::default(),
            visibility: Visibility::default(),
            drag: DragController::new(),
            surface,
            last_layout: None,
        }
    }

    // ==================== State ====================

    pub fn ratio(&self) -> SplitRatio {
        self.ratio.get()
    }

    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    pub fn is_swapped(&self) -> bool {
        self.arrangement.is_swapped()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn render_mode(&self) -> RenderMode {
        self.visibility.render_mode()
    }

    pub fn is_hidden(&self, pane: Pane) -> bool {
        self.visibility.is_hidden(pane)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    // ==================== Ratio ====================

    pub fn set_ratio(&mut self, raw: f64) -> bool {
        self.ratio.set_ratio(raw)
    }

    pub fn nudge_ratio(&mut self, delta: f64) -> bool {
        self.ratio.nudge(delta)
    }

    // ==================== Visibility ====================

    pub fn hide(&mut self, pane: Pane) -> bool {
        let changed = self.visibility.hide(pane);
        self.end_drag_without_divider();
        changed
    }

    pub fn show(&mut self, pane: Pane) -> bool {
        self.visibility.show(pane)
    }

    pub fn toggle(&mut self, pane: Pane) -> bool {
        let changed = self.visibility.toggle(pane);
        self.end_drag_without_divider();
        changed
    }

    /// A single-pane layout has no divider to drag
    fn end_drag_without_divider(&mut self) {
        if self.render_mode() != RenderMode::Both && self.drag.end(&mut self.surface) {
            tracing::debug!(mode = ?self.render_mode(), "drag ended by hiding a pane");
        }
    }

    // ==================== Swap ====================

    pub fn toggle_swap(&mut self) {
        self.arrangement = self.arrangement.toggled();
        tracing::debug!(arrangement = ?self.arrangement, "panes swapped");
    }

    // ==================== Drag ====================

    /// Pointer pressed on the divider
    pub fn begin_drag(&mut self) -> bool {
        if !self.composition().has_divider() {
            return false;
        }
        self.drag.begin(&mut self.surface)
    }

    /// Pointer moved to `pointer_x` while a drag may be active
    pub fn drag_to(&mut self, pointer_x: f64, bounds: Option<ContainerBounds>) -> bool {
        if !self.composition().has_divider() {
            return false;
        }
        self.drag
            .pointer_move(pointer_x, bounds, self.arrangement, &mut self.ratio)
    }

    /// Pointer moved to terminal column `column`, measured against the last
    /// laid-out container
    pub fn drag_to_column(&mut self, column: u16) -> bool {
        let bounds = self.last_layout.and_then(|rects| rects.drag_bounds());
        self.drag_to(f64::from(column), bounds)
    }

    /// Pointer released, or focus lost
    pub fn end_drag(&mut self) -> bool {
        self.drag.end(&mut self.surface)
    }

    // ==================== Composition ====================

    pub fn composition(&self) -> Composition {
        Composition::compose(self.ratio(), self.arrangement, self.render_mode())
    }

    /// Resolve the layout for `area` and remember it for hit-testing and
    /// drag measurement.
    pub fn layout(&mut self, area: Rect) -> PaneRects {
        let rects = self.composition().resolve(area);
        self.last_layout = Some(rects);
        rects
    }

    pub fn last_layout(&self) -> Option<PaneRects> {
        self.last_layout
    }

    /// Whether (`column`, `row`) falls on the divider of the last layout
    pub fn divider_hit(&self, column: u16, row: u16) -> bool {
        self.last_layout
            .is_some_and(|rects| rects.divider_hit(column, row))
    }

    // ==================== Pane handles ====================

    /// Controls handed to a hosted pane
    pub fn handle(&mut self, pane: Pane) -> PaneHandle<'_, S> {
        PaneHandle {
            pane,
            workspace: self,
        }
    }

    /// Controls handed to the secondary pane
    pub fn secondary_handle(&mut self) -> SecondaryHandle<'_, S> {
        SecondaryHandle { workspace: self }
    }
}

impl<S: DragSurface> Drop for Workspace<S> {
    fn drop(&mut self) {
        self.drag.end(&mut self.surface);
    }
}

/// The subset of workspace controls available to one hosted pane
pub struct PaneHandle<'a, S: DragSurface = SurfaceOverrides> {
    pane: Pane,
    workspace: &'a mut Workspace<S>,
}

impl<S: DragSurface> PaneHandle<'_, S> {
    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn is_hidden(&self) -> bool {
        self.workspace.is_hidden(self.pane)
    }

    pub fn is_other_hidden(&self) -> bool {
        self.workspace.is_hidden(self.pane.other())
    }

    pub fn is_swapped(&self) -> bool {
        self.workspace.is_swapped()
    }

    pub fn toggle_self(&mut self) -> bool {
        self.workspace.toggle(self.pane)
    }

    pub fn toggle_other(&mut self) -> bool {
        self.workspace.toggle(self.pane.other())
    }

    pub fn show_other(&mut self) -> bool {
        self.workspace.show(self.pane.other())
    }

    pub fn swap(&mut self) {
        self.workspace.toggle_swap();
    }
}

/// Extra controls only the secondary pane gets
pub struct SecondaryHandle<'a, S: DragSurface = SurfaceOverrides> {
    workspace: &'a mut Workspace<S>,
}

impl<S: DragSurface> SecondaryHandle<'_, S> {
    pub fn hide_self(&mut self) -> bool {
        self.workspace.hide(Pane::Secondary)
    }

    pub fn show_primary(&mut self) -> bool {
        self.workspace.show(Pane::Primary)
    }

    /// Prepare the workspace for a full view of the secondary content.
    ///
    /// The primary pane is brought back first so that hiding the secondary
    /// pane is always allowed and the workspace is never left empty.
    pub fn open_full_view(&mut self) {
        self.show_primary();
        self.hide_self();
        tracing::debug!("secondary pane opened in full view");
    }
}
