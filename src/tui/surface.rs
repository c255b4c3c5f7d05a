// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Terminal-backed drag surface
//!
//! Records the drag overrides for the renderer and, when the terminal
//! supports it, switches the mouse pointer shape with OSC 22.

use std::io::{self, Write};

use crate::workspace::{DragSurface, SurfaceOverrides};

const RESIZE_POINTER: &str = "col-resize";
const DEFAULT_POINTER: &str = "default";

#[derive(Debug, Default)]
pub struct TerminalSurface {
    overrides: SurfaceOverrides,
    pointer_shapes: bool,
}

impl TerminalSurface {
    /// `pointer_shapes` enables writing OSC 22 pointer-shape requests
    pub fn new(pointer_shapes: bool) -> Self {
        Self {
            overrides: SurfaceOverrides::default(),
            pointer_shapes,
        }
    }

    pub fn overrides(&self) -> SurfaceOverrides {
        self.overrides
    }

    fn set_pointer_shape(&self, shape: &str) {
        if !self.pointer_shapes {
            return;
        }
        let mut stdout = io::stdout();
        if let Err(e) = write!(stdout, "\x1b]22;{}\x1b\\", shape).and_then(|_| stdout.flush()) {
            tracing::debug!(error = %e, shape, "failed to set pointer shape");
        }
    }
}

impl DragSurface for TerminalSurface {
    fn apply_drag_overrides(&mut self) {
        self.overrides.apply_drag_overrides();
        self.set_pointer_shape(RESIZE_POINTER);
    }

    fn restore(&mut self) {
        self.overrides.restore();
        self.set_pointer_shape(DEFAULT_POINTER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_follow_drag() {
        let mut surface = TerminalSurface::new(false);
        surface.apply_drag_overrides();
        assert!(surface.overrides().resize_cursor);
        assert!(surface.overrides().selection_suppressed);
        surface.restore();
        assert_eq!(surface.overrides(), SurfaceOverrides::default());
    }
}
