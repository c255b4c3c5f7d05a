// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Split ratio between the primary and secondary panes
//!
//! The ratio is always the share of the workspace width given to the
//! primary pane, regardless of which physical side it renders on.

use std::fmt;

/// Percentage of the workspace width assigned to the primary pane.
///
/// Always within [`SplitRatio::MIN`]..=[`SplitRatio::MAX`]; the only way to
/// build one is through [`SplitRatio::clamp`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SplitRatio(f64);

impl SplitRatio {
    /// Lower bound, roughly one third of the workspace
    pub const MIN: f64 = 33.33;
    /// Upper bound, roughly two thirds of the workspace
    pub const MAX: f64 = 66.67;
    /// 2:1 primary:secondary
    pub const DEFAULT: f64 = 66.67;

    /// Map any value into the valid range.
    ///
    /// NaN has no position to clamp to and maps to the default.
    pub fn clamp(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::DEFAULT);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Share of the workspace given to the primary pane, in percent
    pub fn primary(self) -> f64 {
        self.0
    }

    /// Share of the workspace given to the secondary pane, in percent
    pub fn secondary(self) -> f64 {
        100.0 - self.0
    }

    /// Whether the ratio sits on either bound
    pub fn is_at_bound(self) -> bool {
        self.0 <= Self::MIN || self.0 >= Self::MAX
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for SplitRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Holds the current ratio and applies clamping on every write.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatioModel {
    current: SplitRatio,
}

impl RatioModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> SplitRatio {
        self.current
    }

    /// Store `clamp(raw)`.
    ///
    /// Returns true when the stored ratio changed. Non-finite input is
    /// ignored.
    pub fn set_ratio(&mut self, raw: f64) -> bool {
        if !raw.is_finite() {
            return false;
        }
        let next = SplitRatio::clamp(raw);
        if next == self.current {
            return false;
        }
        tracing::debug!(from = self.current.primary(), to = next.primary(), "split ratio changed");
        self.current = next;
        true
    }

    /// Shift the ratio by `delta` percentage points (clamped)
    pub fn nudge(&mut self, delta: f64) -> bool {
        self.set_ratio(self.current.primary() + delta)
    }
}
