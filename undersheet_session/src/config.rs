// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied sheet configuration: chrome toggles, corner radius, detents.

use alloc::vec::Vec;

use undersheet_detent::Detent;

/// Default corner radius, also substituted for out-of-range values.
pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;

/// Largest accepted corner radius; values above it coerce to the default.
pub const MAX_CORNER_RADIUS: f64 = 30.0;

bitflags::bitflags! {
    /// Chrome toggles controlling the sheet's decorative elements.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Chrome: u8 {
        /// Show the drag-indicator capsule at the sheet's top edge.
        const DRAG_INDICATOR = 0b0000_0001;
        /// Show a close button in the sheet's top-trailing corner.
        const CLOSE_BUTTON   = 0b0000_0010;
        /// Dim the content behind the sheet with a tappable scrim.
        const SCRIM          = 0b0000_0100;
        /// Cast a shadow above the sheet's top edge.
        const SHADOW         = 0b0000_1000;
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::SCRIM
    }
}

/// Configuration for one sheet, consumed by
/// [`SheetSession::new`](crate::session::SheetSession::new).
///
/// Construction never fails: out-of-range values are coerced to safe
/// defaults when the session is built, not rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetConfig {
    /// Corner radius of the sheet's top corners. Values above
    /// [`MAX_CORNER_RADIUS`] are coerced to [`DEFAULT_CORNER_RADIUS`].
    pub corner_radius: f64,
    /// Chrome toggles. Defaults to [`Chrome::SCRIM`] alone.
    pub chrome: Chrome,
    /// Allowed sheet sizes, normalized at session construction. `None` means
    /// a content-driven single-size sheet with no snapping.
    pub detents: Option<Vec<Detent>>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            corner_radius: DEFAULT_CORNER_RADIUS,
            chrome: Chrome::default(),
            detents: None,
        }
    }
}

impl SheetConfig {
    /// The corner radius with the out-of-range coercion applied.
    pub fn coerced_corner_radius(&self) -> f64 {
        if self.corner_radius > MAX_CORNER_RADIUS {
            DEFAULT_CORNER_RADIUS
        } else {
            self.corner_radius
        }
    }
}
