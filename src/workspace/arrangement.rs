// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Physical placement of the logical panes

use super::Pane;

/// Physical side of the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Which physical side hosts the primary pane.
///
/// Swapping never changes what the split ratio means: the ratio always
/// belongs to the primary pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arrangement {
    /// Primary on the left, secondary on the right
    #[default]
    PrimaryLeft,
    /// Secondary on the left, primary on the right
    PrimaryRight,
}

impl Arrangement {
    pub fn is_swapped(self) -> bool {
        self == Arrangement::PrimaryRight
    }

    pub fn toggled(self) -> Self {
        match self {
            Arrangement::PrimaryLeft => Arrangement::PrimaryRight,
            Arrangement::PrimaryRight => Arrangement::PrimaryLeft,
        }
    }

    /// Side on which `pane` renders
    pub fn side_of(self, pane: Pane) -> Side {
        match (self, pane) {
            (Arrangement::PrimaryLeft, Pane::Primary) | (Arrangement::PrimaryRight, Pane::Secondary) => {
                Side::Left
            }
            _ => Side::Right,
        }
    }

    /// Pane rendered on `side`
    pub fn pane_at(self, side: Side) -> Pane {
        match (self, side) {
            (Arrangement::PrimaryLeft, Side::Left) | (Arrangement::PrimaryRight, Side::Right) => {
                Pane::Primary
            }
            _ => Pane::Secondary,
        }
    }

    /// Convert the width of the physical left region (percent) into the
    /// primary pane's share, before clamping.
    pub fn primary_share(self, left_pct: f64) -> f64 {
        if self.is_swapped() {
            100.0 - left_pct
        } else {
            left_pct
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Arrangement::PrimaryLeft => "chat|panel",
            Arrangement::PrimaryRight => "panel|chat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_primary_left() {
        assert_eq!(Arrangement::default(), Arrangement::PrimaryLeft);
        assert!(!Arrangement::default().is_swapped());
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        let a = Arrangement::PrimaryLeft;
        assert_eq!(a.toggled(), Arrangement::PrimaryRight);
        assert_eq!(a.toggled().toggled(), a);
    }

    #[test]
    fn test_sides() {
        let normal = Arrangement::PrimaryLeft;
        assert_eq!(normal.side_of(Pane::Primary), Side::Left);
        assert_eq!(normal.side_of(Pane::Secondary), Side::Right);
        assert_eq!(normal.pane_at(Side::Left), Pane::Primary);

        let swapped = Arrangement::PrimaryRight;
        assert_eq!(swapped.side_of(Pane::Primary), Side::Right);
        assert_eq!(swapped.side_of(Pane::Secondary), Side::Left);
        assert_eq!(swapped.pane_at(Side::Left), Pane::Secondary);
        assert_eq!(swapped.pane_at(Side::Right), Pane::Primary);
    }

    proptest! {
        #[test]
        fn prop_primary_share(left_pct in 0.0f64..=100.0) {
            prop_assert_eq!(Arrangement::PrimaryLeft.primary_share(left_pct), left_pct);
            prop_assert_eq!(Arrangement::PrimaryRight.primary_share(left_pct), 100.0 - left_pct);
        }
    }
}
