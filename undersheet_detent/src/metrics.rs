// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen metrics consumed by detent resolution.

use kurbo::{Insets, Size};

/// The host screen measurements a detent resolves against.
///
/// Carries the screen size and the safe-area insets as reported by the host.
/// Values are passed by reference into every resolution call and never cached
/// here, so the host remains free to hand in fresh measurements after a
/// device rotation or window resize.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Full screen (or window) size in the host's linear unit.
    pub screen: Size,
    /// Safe-area insets; `y0` is the top inset, `y1` the bottom inset.
    pub insets: Insets,
}

impl Metrics {
    /// Create metrics from a screen size and safe-area insets.
    pub const fn new(screen: Size, insets: Insets) -> Self {
        Self { screen, insets }
    }

    /// Create metrics from a screen height and top inset alone.
    ///
    /// Width and the remaining insets are zero. Detent resolution only reads
    /// the screen height and the top inset, so this is sufficient for hosts
    /// (and tests) that do not track horizontal geometry.
    pub const fn from_heights(screen_height: f64, top_inset: f64) -> Self {
        Self {
            screen: Size::new(0.0, screen_height),
            insets: Insets {
                x0: 0.0,
                y0: top_inset,
                x1: 0.0,
                y1: 0.0,
            },
        }
    }

    /// Top safe-area inset.
    pub const fn top_inset(&self) -> f64 {
        self.insets.y0
    }

    /// Bottom safe-area inset.
    pub const fn bottom_inset(&self) -> f64 {
        self.insets.y1
    }

    /// True when the device reports a non-zero bottom safe-area inset.
    pub fn has_bottom_inset(&self) -> bool {
        self.insets.y1 != 0.0
    }

    /// The height a full-screen detent resolves to.
    ///
    /// Exceeds the visible screen height by the top inset so the sheet covers
    /// the inset area when fully expanded.
    pub fn full_screen_height(&self) -> f64 {
        self.screen.height + self.insets.y0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_screen_height_includes_top_inset() {
        let m = Metrics::from_heights(800.0, 50.0);
        assert_eq!(m.full_screen_height(), 850.0);
        assert_eq!(m.top_inset(), 50.0);
        assert_eq!(m.bottom_inset(), 0.0);
    }

    #[test]
    fn bottom_inset_detection() {
        let flat = Metrics::from_heights(800.0, 50.0);
        assert!(!flat.has_bottom_inset());

        let notched = Metrics::new(
            Size::new(390.0, 844.0),
            Insets {
                x0: 0.0,
                y0: 47.0,
                x1: 0.0,
                y1: 34.0,
            },
        );
        assert!(notched.has_bottom_inset());
        assert_eq!(notched.full_screen_height(), 891.0);
    }
}
