// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Workspace composition
//!
//! Turns (ratio, arrangement, render mode) into a layout plan expressed in
//! percentages, then resolves that plan into terminal rectangles.

use ratatui::layout::Rect;

use super::arrangement::{Arrangement, Side};
use super::drag::ContainerBounds;
use super::ratio::SplitRatio;
use super::visibility::RenderMode;
use super::Pane;

/// Columns reserved for the divider between the two panes
pub const DIVIDER_WIDTH: u16 = 1;

/// A pane placed in the plan with its share of the width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneSlot {
    pub pane: Pane,
    pub width_pct: f64,
}

/// Percentage layout plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Composition {
    /// Two panes separated by a draggable divider
    Split { left: PaneSlot, right: PaneSlot },
    /// One pane at full width, no divider
    Single(Pane),
}

impl Composition {
    pub fn compose(ratio: SplitRatio, arrangement: Arrangement, mode: RenderMode) -> Self {
        if let Some(pane) = mode.sole_pane() {
            return Composition::Single(pane);
        }
        let slot = |side: Side| {
            let pane = arrangement.pane_at(side);
            let width_pct = match pane {
                Pane::Primary => ratio.primary(),
                Pane::Secondary => ratio.secondary(),
            };
            PaneSlot { pane, width_pct }
        };
        Composition::Split {
            left: slot(Side::Left),
            right: slot(Side::Right),
        }
    }

    pub fn has_divider(&self) -> bool {
        matches!(self, Composition::Split { .. })
    }

    /// Place the plan inside `area`.
    pub fn resolve(&self, area: Rect) -> PaneRects {
        match *self {
            Composition::Single(pane) => {
                let mut rects = PaneRects {
                    container: area,
                    ..PaneRects::default()
                };
                rects.set(pane, area);
                rects
            }
            Composition::Split { left, right } => {
                let available = area.width.saturating_sub(DIVIDER_WIDTH);
                let left_width = ((f64::from(available) * left.width_pct / 100.0).round() as u16)
                    .min(available);
                let divider_width = area.width.min(DIVIDER_WIDTH);
                let right_width = available - left_width;

                let left_rect = Rect::new(area.x, area.y, left_width, area.height);
                let divider = Rect::new(area.x + left_width, area.y, divider_width, area.height);
                let right_rect = Rect::new(
                    area.x + left_width + divider_width,
                    area.y,
                    right_width,
                    area.height,
                );

                let mut rects = PaneRects {
                    container: area,
                    divider: Some(divider),
                    ..PaneRects::default()
                };
                rects.set(left.pane, left_rect);
                rects.set(right.pane, right_rect);
                rects
            }
        }
    }
}

/// Concrete rectangles for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneRects {
    pub container: Rect,
    pub primary: Option<Rect>,
    pub secondary: Option<Rect>,
    pub divider: Option<Rect>,
}

impl PaneRects {
    fn set(&mut self, pane: Pane, rect: Rect) {
        match pane {
            Pane::Primary => self.primary = Some(rect),
            Pane::Secondary => self.secondary = Some(rect),
        }
    }

    pub fn rect_of(&self, pane: Pane) -> Option<Rect> {
        match pane {
            Pane::Primary => self.primary,
            Pane::Secondary => self.secondary,
        }
    }

    /// Whether the cell at (`column`, `row`) is on the divider
    pub fn divider_hit(&self, column: u16, row: u16) -> bool {
        self.divider.is_some_and(|d| {
            column >= d.x && column < d.x + d.width && row >= d.y && row < d.y + d.height
        })
    }

    /// Pane under the cell at (`column`, `row`)
    pub fn pane_at(&self, column: u16, row: u16) -> Option<Pane> {
        let contains =
            |r: Rect| column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height;
        if self.primary.is_some_and(contains) {
            Some(Pane::Primary)
        } else if self.secondary.is_some_and(contains) {
            Some(Pane::Secondary)
        } else {
            None
        }
    }

    /// Bounds used by the drag controller; `None` until a frame with a
    /// non-empty container has been laid out.
    pub fn drag_bounds(&self) -> Option<ContainerBounds> {
        if self.container.width == 0 {
            return None;
        }
        Some(ContainerBounds::new(
            f64::from(self.container.x),
            f64::from(self.container.width),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(ratio: f64, arrangement: Arrangement) -> Composition {
        Composition::compose(SplitRatio::clamp(ratio), arrangement, RenderMode::Both)
    }

    #[test]
    fn test_compose_default_layout() {
        let c = split(SplitRatio::DEFAULT, Arrangement::PrimaryLeft);
        match c {
            Composition::Split { left, right } => {
                assert_eq!(left.pane, Pane::Primary);
                assert_eq!(left.width_pct, 66.67);
                assert_eq!(right.pane, Pane::Secondary);
                assert!((right.width_pct - 33.33).abs() < 1e-9);
            }
            Composition::Single(_) => panic!("expected split"),
        }
        assert!(c.has_divider());
    }

    #[test]
    fn test_compose_swapped_layout() {
        let c = split(40.0, Arrangement::PrimaryRight);
        match c {
            Composition::Split { left, right } => {
                assert_eq!(left.pane, Pane::Secondary);
                assert_eq!(left.width_pct, 60.0);
                assert_eq!(right.pane, Pane::Primary);
                assert_eq!(right.width_pct, 40.0);
            }
            Composition::Single(_) => panic!("expected split"),
        }
    }

    #[test]
    fn test_compose_single_modes() {
        let ratio = SplitRatio::default();
        let c = Composition::compose(ratio, Arrangement::PrimaryLeft, RenderMode::PrimaryOnly);
        assert_eq!(c, Composition::Single(Pane::Primary));
        assert!(!c.has_divider());

        let c = Composition::compose(ratio, Arrangement::PrimaryRight, RenderMode::SecondaryOnly);
        assert_eq!(c, Composition::Single(Pane::Secondary));
    }

    #[test]
    fn test_resolve_split() {
        let rects = split(50.0, Arrangement::PrimaryLeft).resolve(Rect::new(0, 1, 101, 20));
        assert_eq!(rects.primary, Some(Rect::new(0, 1, 50, 20)));
        assert_eq!(rects.divider, Some(Rect::new(50, 1, 1, 20)));
        assert_eq!(rects.secondary, Some(Rect::new(51, 1, 50, 20)));
    }

    #[test]
    fn test_resolve_swapped() {
        let rects = split(60.0, Arrangement::PrimaryRight).resolve(Rect::new(0, 0, 101, 10));
        assert_eq!(rects.secondary, Some(Rect::new(0, 0, 40, 10)));
        assert_eq!(rects.divider, Some(Rect::new(40, 0, 1, 10)));
        assert_eq!(rects.primary, Some(Rect::new(41, 0, 60, 10)));
    }

    #[test]
    fn test_resolve_single_has_no_divider() {
        let area = Rect::new(2, 1, 80, 20);
        let rects = Composition::Single(Pane::Secondary).resolve(area);
        assert_eq!(rects.secondary, Some(area));
        assert_eq!(rects.primary, None);
        assert_eq!(rects.divider, None);
        assert!(!rects.divider_hit(40, 5));
    }

    #[test]
    fn test_resolve_zero_width() {
        let rects = split(50.0, Arrangement::PrimaryLeft).resolve(Rect::new(0, 0, 0, 10));
        assert_eq!(rects.primary.map(|r| r.width), Some(0));
        assert_eq!(rects.drag_bounds(), None);
    }

    #[test]
    fn test_hit_testing() {
        let rects = split(50.0, Arrangement::PrimaryLeft).resolve(Rect::new(0, 0, 101, 10));
        assert!(rects.divider_hit(50, 3));
        assert!(!rects.divider_hit(49, 3));
        assert!(!rects.divider_hit(50, 10));
        assert_eq!(rects.pane_at(10, 2), Some(Pane::Primary));
        assert_eq!(rects.pane_at(70, 2), Some(Pane::Secondary));
        assert_eq!(rects.pane_at(50, 2), None);
    }

    #[test]
    fn test_drag_bounds() {
        let rects = split(50.0, Arrangement::PrimaryLeft).resolve(Rect::new(4, 0, 100, 10));
        assert_eq!(rects.drag_bounds(), Some(ContainerBounds::new(4.0, 100.0)));
    }
}
