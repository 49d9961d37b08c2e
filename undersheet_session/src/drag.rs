// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking helper: raw pointer positions to vertical translations.
//!
//! [`SheetSession`](crate::session::SheetSession) consumes translations
//! relative to the gesture's start, positive downward. Hosts whose input
//! layer only reports absolute pointer positions can run them through a
//! [`DragTracker`] to recover those translations.
//!
//! ```
//! use kurbo::Point;
//! use undersheet_session::drag::DragTracker;
//!
//! let mut drag = DragTracker::new();
//! drag.begin(Point::new(200.0, 600.0));
//! assert_eq!(drag.update(Point::new(200.0, 650.0)), 50.0);
//! assert_eq!(drag.finish(Point::new(204.0, 720.0)), 120.0);
//! assert!(!drag.is_active());
//! ```

use kurbo::Point;

/// Converts absolute pointer positions into per-gesture vertical
/// translations.
///
/// One tracker handles one gesture at a time; [`begin`](Self::begin) on an
/// active tracker restarts it at the new origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragTracker {
    origin: Option<Point>,
}

impl DragTracker {
    /// Create an idle tracker.
    pub const fn new() -> Self {
        Self { origin: None }
    }

    /// Whether a gesture is in flight.
    pub const fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Start a gesture at the given pointer position.
    pub fn begin(&mut self, at: Point) {
        self.origin = Some(at);
    }

    /// Current vertical translation for a moved pointer, for
    /// [`drag_changed`](crate::session::SheetSession::drag_changed).
    ///
    /// If no gesture was begun, the position becomes the origin and the
    /// translation is zero.
    pub fn update(&mut self, at: Point) -> f64 {
        match self.origin {
            Some(origin) => at.y - origin.y,
            None => {
                self.origin = Some(at);
                0.0
            }
        }
    }

    /// Final vertical translation for a lifted pointer, for
    /// [`drag_ended`](crate::session::SheetSession::drag_ended). Resets the
    /// tracker.
    pub fn finish(&mut self, at: Point) -> f64 {
        let translation = self.update(at);
        self.origin = None;
        translation
    }

    /// Abandon the gesture without producing a final translation, e.g. when
    /// the sheet is hidden externally mid-drag.
    pub fn cancel(&mut self) {
        self.origin = None;
    }
}
