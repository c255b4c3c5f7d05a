// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Divider drag handling
//!
//! A drag session lives from pointer-down on the divider until pointer-up
//! (or focus loss). While it is active every pointer move recomputes the
//! split ratio from the pointer position, and the drag surface carries the
//! resize overrides. The surface is restored whenever the session ends.

use super::arrangement::Arrangement;
use super::ratio::RatioModel;

/// Shared presentation state touched while a drag is in progress.
pub trait DragSurface {
    /// Force the resize pointer and suspend text selection
    fn apply_drag_overrides(&mut self);

    /// Undo [`DragSurface::apply_drag_overrides`]
    fn restore(&mut self);
}

/// In-memory record of the drag overrides.
///
/// Renderers read it to draw the divider highlight and to keep the chat
/// input from treating pointer motion as selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceOverrides {
    pub resize_cursor: bool,
    pub selection_suppressed: bool,
}

impl SurfaceOverrides {
    pub fn is_overridden(&self) -> bool {
        self.resize_cursor || self.selection_suppressed
    }
}

impl DragSurface for SurfaceOverrides {
    fn apply_drag_overrides(&mut self) {
        self.resize_cursor = true;
        self.selection_suppressed = true;
    }

    fn restore(&mut self) {
        self.resize_cursor = false;
        self.selection_suppressed = false;
    }
}

/// Measured horizontal extent of the container holding both panes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

impl ContainerBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Width of the physical left region implied by `pointer_x`, in percent.
    ///
    /// `None` when the container has no usable width or the coordinate is
    /// malformed.
    pub fn left_percent(&self, pointer_x: f64) -> Option<f64> {
        if !(self.width.is_finite() && self.width > 0.0) || !self.left.is_finite() {
            return None;
        }
        if !pointer_x.is_finite() {
            return None;
        }
        Some((pointer_x - self.left) / self.width * 100.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct DragSession {
    moves: u32,
}

/// Owns the (at most one) active drag session.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session. Ignored while one is already running.
    pub fn begin<S: DragSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.session.is_some() {
            return false;
        }
        surface.apply_drag_overrides();
        self.session = Some(DragSession::default());
        tracing::debug!("divider drag started");
        true
    }

    /// Recompute the ratio from a pointer move.
    ///
    /// The arrangement is read on every call so a swap during the drag takes
    /// effect on the next move. Returns true when the ratio changed.
    pub fn pointer_move(
        &mut self,
        pointer_x: f64,
        bounds: Option<ContainerBounds>,
        arrangement: Arrangement,
        ratio: &mut RatioModel,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(left_pct) = bounds.and_then(|b| b.left_percent(pointer_x)) else {
            return false;
        };
        session.moves += 1;
        ratio.set_ratio(arrangement.primary_share(left_pct))
    }

    /// End the session and restore the surface. No-op without a session.
    pub fn end<S: DragSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        surface.restore();
        tracing::debug!(moves = session.moves, "divider drag ended");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::ratio::SplitRatio;
    use proptest::prelude::*;

    fn bounds() -> Option<ContainerBounds> {
        Some(ContainerBounds::new(10.0, 200.0))
    }

    #[test]
    fn test_left_percent() {
        let b = ContainerBounds::new(10.0, 200.0);
        assert_eq!(b.left_percent(10.0), Some(0.0));
        assert_eq!(b.left_percent(110.0), Some(50.0));
        assert_eq!(b.left_percent(210.0), Some(100.0));
    }

    #[test]
    fn test_left_percent_unmeasurable_container() {
        assert_eq!(ContainerBounds::new(0.0, 0.0).left_percent(5.0), None);
        assert_eq!(ContainerBounds::new(0.0, -3.0).left_percent(5.0), None);
        assert_eq!(ContainerBounds::new(0.0, f64::NAN).left_percent(5.0), None);
        assert_eq!(ContainerBounds::new(0.0, 100.0).left_percent(f64::NAN), None);
    }

    #[test]
    fn test_begin_applies_overrides() {
        let mut drag = DragController::new();
        let mut surface = SurfaceOverrides::default();
        assert!(drag.begin(&mut surface));
        assert!(drag.is_active());
        assert!(surface.resize_cursor);
        assert!(surface.selection_suppressed);
    }

    #[test]
    fn test_second_begin_is_ignored() {
        let mut drag = DragController::new();
        let mut surface = SurfaceOverrides::default();
        drag.begin(&mut surface);
        assert!(!drag.begin(&mut surface));
        assert!(drag.is_active());
    }

    #[test]
    fn test_move_without_session_is_noop() {
        let mut drag = DragController::new();
        let mut ratio = RatioModel::new();
        assert!(!drag.pointer_move(110.0, bounds(), Arrangement::PrimaryLeft, &mut ratio));
        assert_eq!(ratio.get(), SplitRatio::default());
    }

    #[test]
    fn test_move_updates_ratio() {
        let mut drag = DragController::new();
        let mut surface = SurfaceOverrides::default();
        let mut ratio = RatioModel::new();
        drag.begin(&mut surface);
        assert!(drag.pointer_move(110.0, bounds(), Arrangement::PrimaryLeft, &mut ratio));
        assert_eq!(ratio.get().primary(), 50.0);
    }

    #[test]
    fn test_move_honours_swap() {
        let mut drag = DragController::new();
        let mut surface = SurfaceOverrides::default();
        let mut ratio = RatioModel::new();
        drag.begin(&mut surface);
        // Left region is 40% wide, so the primary pane on the right gets 60%
        drag.pointer_move(90.0, bounds(), Arrangement::PrimaryRight, &mut ratio);
        assert_eq!(ratio.get().primary(), 60.0);
    }

    #[test]
    fn test_move_with_missing_bounds_is_noop() {
        let mut drag = DragController::new();
        let mut surface = SurfaceOverrides::default();
        let mut ratio = RatioModel::new();
        drag.begin(&mut surface);
        assert!(!drag.pointer_move(50.0, None, Arrangement::PrimaryLeft, &mut ratio));
        assert!(!drag.pointer_move(
            50.0,
            Some(ContainerBounds::new(0.0, 0.0)),
            Arrangement::PrimaryLeft,
            &mut ratio
        ));
        assert_eq!(ratio.get(), SplitRatio::default());
        assert!(drag.is_active());
    }

    #[test]
    fn test_end_restores_surface() {
        let mut drag = DragController::new();
        let mut surface = SurfaceOverrides::default();
        let mut ratio = RatioModel::new();
        drag.begin(&mut surface);
        drag.pointer_move(50.0, bounds(), Arrangement::PrimaryLeft, &mut ratio);
        assert_eq!(ratio.get().primary(), SplitRatio::MIN);
        assert!(drag.end(&mut surface));
        assert!(!drag.is_active());
        assert!(!surface.is_overridden());
        assert!(!drag.end(&mut surface));
    }

    proptest! {
        #[test]
        fn prop_ratio_follows_pointer(left_pct in 0.0f64..=100.0, swapped in any::<bool>()) {
            let arrangement = if swapped { Arrangement::PrimaryRight } else { Arrangement::PrimaryLeft };
            let b = ContainerBounds::new(0.0, 100.0);
            let mut drag = DragController::new();
            let mut surface = SurfaceOverrides::default();
            let mut ratio = RatioModel::new();
            drag.begin(&mut surface);
            drag.pointer_move(left_pct, Some(b), arrangement, &mut ratio);
            let expected = if swapped { 100.0 - left_pct } else { left_pct };
            let diff = ratio.get().primary() - SplitRatio::clamp(expected).primary();
            prop_assert!(diff.abs() < 1e-9);
        }
    }
}
