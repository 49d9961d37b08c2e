// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sheet session: presentation lifecycle, drag handling, detent snapping.

use alloc::vec::Vec;

use undersheet_detent::{Detent, DetentSet, Metrics};

use crate::config::{Chrome, SheetConfig};

/// Downward translation at or past which a drag dismisses the sheet
/// immediately, without waiting for the drag to end.
pub const FAST_DISMISS_TRANSLATION: f64 = 250.0;

/// Dead zone for upward drags: smaller magnitudes produce no expansion
/// preview, so tiny jitters near rest do not move the sheet.
pub const EXPANSION_DEAD_ZONE: f64 = 50.0;

/// Translation magnitude at drag-end that commits a detent change. Within
/// `(-SNAP_TRANSLATION, SNAP_TRANSLATION)` the sheet snaps back unchanged.
pub const SNAP_TRANSLATION: f64 = 100.0;

/// Damping divisor for upward drags: the preview grows slower than the
/// finger moves, signalling resistance before the snap.
const EXPANSION_DAMPING: f64 = 1.5;

/// Per-event outcome of [`SheetSession::drag_changed`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DragResponse {
    /// The drag is being tracked; read back
    /// [`offset`](SheetSession::offset) and [`height`](SheetSession::height).
    Tracking,
    /// The drag crossed [`FAST_DISMISS_TRANSLATION`] and the sheet is now
    /// hidden. No further events for this gesture have any effect.
    Dismissed,
}

/// Snap decision returned by [`SheetSession::drag_ended`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SnapResponse {
    /// Advanced to the next larger detent (new index).
    Advanced(usize),
    /// Retreated to the next smaller detent (new index).
    Retreated(usize),
    /// Snapped back to the current detent unchanged.
    Settled,
    /// Retreated past the smallest detent; the sheet is now hidden.
    Dismissed,
}

/// Mutable state for one sheet instance.
///
/// One session is owned by exactly one sheet; the UI event source serializes
/// access, so all methods take plain `&mut self` and run synchronously.
///
/// The host's render contract per update:
/// - displayed height = [`height`](Self::height),
/// - vertical offset below the resting position = [`offset`](Self::offset),
/// - chrome from the `shows_*` / [`corner_radius`](Self::corner_radius)
///   queries.
#[derive(Clone, Debug)]
pub struct SheetSession {
    corner_radius: f64,
    chrome: Chrome,
    raw_detents: Option<Vec<Detent>>,
    detents: DetentSet,
    is_presented: bool,
    current: Option<usize>,
    drag_offset: f64,
    extra_height: f64,
    content_height: f64,
}

impl SheetSession {
    /// Build a session from a configuration, initially hidden.
    ///
    /// The detent list is normalized here (and again on
    /// [`renormalize`](Self::renormalize) when metrics change); the corner
    /// radius coercion is applied once. Construction never fails.
    pub fn new(config: SheetConfig, metrics: &Metrics) -> Self {
        let corner_radius = config.coerced_corner_radius();
        let SheetConfig {
            chrome, detents, ..
        } = config;
        let set = match &detents {
            Some(raw) => DetentSet::normalize(raw, metrics),
            None => DetentSet::default(),
        };
        let current = if set.is_empty() { None } else { Some(0) };
        Self {
            corner_radius,
            chrome,
            raw_detents: detents,
            detents: set,
            is_presented: false,
            current,
            drag_offset: 0.0,
            extra_height: 0.0,
            content_height: 0.0,
        }
    }

    /// Re-derive the detent set after a metrics change (device rotation).
    ///
    /// The current index is clamped into the new set; a set that becomes
    /// empty degrades to content-driven sizing.
    pub fn renormalize(&mut self, metrics: &Metrics) {
        self.detents = match &self.raw_detents {
            Some(raw) => DetentSet::normalize(raw, metrics),
            None => DetentSet::default(),
        };
        self.current = match self.current {
            Some(i) if !self.detents.is_empty() => Some(i.min(self.detents.len() - 1)),
            _ => self.entry_index(),
        };
    }

    /// Show the sheet at its entry detent. No-op while presented.
    pub fn present(&mut self) {
        if self.is_presented {
            return;
        }
        self.is_presented = true;
        self.current = self.entry_index();
        self.drag_offset = 0.0;
        self.extra_height = 0.0;
    }

    /// Hide the sheet, discarding any in-flight drag state and resetting the
    /// current detent back to the entry detent. No-op while hidden.
    pub fn dismiss(&mut self) {
        if !self.is_presented {
            return;
        }
        self.is_presented = false;
        self.drag_offset = 0.0;
        self.extra_height = 0.0;
        self.current = self.entry_index();
    }

    /// A tap landed on the background scrim. Dismisses a presented sheet;
    /// returns whether anything happened.
    pub fn scrim_tapped(&mut self) -> bool {
        if !self.is_presented {
            return false;
        }
        self.dismiss();
        true
    }

    /// Record the measured intrinsic height of the hosted content.
    ///
    /// Reported by the host whenever the content's size changes; clamped to
    /// be non-negative. Drives content-driven sizing and scroll arbitration.
    pub fn set_content_height(&mut self, height: f64) {
        self.content_height = height.max(0.0);
    }

    /// Process one drag-changed event with the gesture's current vertical
    /// translation (positive downward).
    ///
    /// Branches, first match wins:
    /// - at or past [`FAST_DISMISS_TRANSLATION`]: dismiss immediately;
    /// - downward: the offset tracks the finger 1:1;
    /// - upward: the expansion preview grows toward the next detent, damped,
    ///   and never past the next snap point or the largest detent.
    pub fn drag_changed(&mut self, translation_y: f64, metrics: &Metrics) -> DragResponse {
        if !self.is_presented {
            return DragResponse::Tracking;
        }
        if translation_y >= FAST_DISMISS_TRANSLATION {
            self.dismiss();
            return DragResponse::Dismissed;
        }
        if translation_y > 0.0 {
            // Offset is non-negative by invariant; this branch only sees
            // positive values but the clamp guards every write.
            self.drag_offset = translation_y.max(0.0);
        } else {
            self.preview_expansion(translation_y, metrics);
        }
        DragResponse::Tracking
    }

    /// Process the terminating drag-ended event with the gesture's final
    /// translation.
    ///
    /// At or past `-`[`SNAP_TRANSLATION`] the sheet advances to the next
    /// larger detent; at or past [`SNAP_TRANSLATION`] it retreats, or
    /// dismisses when already at the smallest; in between it settles where
    /// it is. Every branch, the dismissing one included, leaves
    /// [`offset`](Self::offset) at zero and clears the expansion preview.
    pub fn drag_ended(&mut self, translation_y: f64) -> SnapResponse {
        if !self.is_presented {
            return SnapResponse::Settled;
        }
        let response = if translation_y <= -SNAP_TRANSLATION {
            self.advance()
        } else if translation_y < SNAP_TRANSLATION {
            SnapResponse::Settled
        } else {
            self.retreat_or_dismiss()
        };
        self.drag_offset = 0.0;
        self.extra_height = 0.0;
        response
    }

    /// Whether the sheet is currently presented.
    pub fn is_presented(&self) -> bool {
        self.is_presented
    }

    /// Index of the current detent in [`detents`](Self::detents), or `None`
    /// in content-driven mode.
    pub fn current_detent(&self) -> Option<usize> {
        self.current
    }

    /// The normalized detent set.
    pub fn detents(&self) -> &DetentSet {
        &self.detents
    }

    /// The sheet's vertical offset below its resting position; zero while
    /// settled or hidden.
    pub fn offset(&self) -> f64 {
        if self.is_presented { self.drag_offset } else { 0.0 }
    }

    /// The displayed height: the current detent's height plus any expansion
    /// preview. Zero while hidden.
    ///
    /// In content-driven mode (no current detent, or a
    /// [`Detent::ByContent`] detent) the measured content height stands in,
    /// clamped to the full-screen height.
    pub fn height(&self, metrics: &Metrics) -> f64 {
        if !self.is_presented {
            return 0.0;
        }
        self.detent_height(metrics) + self.extra_height
    }

    /// The resting height of the current detent, without any in-flight
    /// expansion preview. This is the frame height scroll arbitration
    /// compares content against.
    pub fn detent_height(&self, metrics: &Metrics) -> f64 {
        match self.current.and_then(|i| self.detents.get(i)) {
            Some(Detent::ByContent) | None => {
                self.content_height.min(metrics.full_screen_height())
            }
            Some(d) => d.resolved_height(metrics),
        }
    }

    /// The last measured content height (clamped non-negative).
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// True when the current detent resolves to the full-screen height.
    pub fn is_full_screen(&self, metrics: &Metrics) -> bool {
        match self.current.and_then(|i| self.detents.get(i)) {
            Some(Detent::ByContent) | None => false,
            Some(d) => d.resolved_height(metrics) >= metrics.full_screen_height(),
        }
    }

    /// Whether the host should draw the drag indicator: configured on, and
    /// hidden at full screen.
    pub fn shows_drag_indicator(&self, metrics: &Metrics) -> bool {
        self.chrome.contains(Chrome::DRAG_INDICATOR) && !self.is_full_screen(metrics)
    }

    /// Whether the host should draw the close button: configured on, or
    /// forced on at full screen (where edge swipes are harder to reach).
    pub fn shows_close_button(&self, metrics: &Metrics) -> bool {
        self.chrome.contains(Chrome::CLOSE_BUTTON) || self.is_full_screen(metrics)
    }

    /// Whether the host should draw the background scrim.
    pub fn shows_scrim(&self) -> bool {
        self.chrome.contains(Chrome::SCRIM)
    }

    /// Whether the host should draw the sheet's shadow.
    pub fn shows_shadow(&self) -> bool {
        self.chrome.contains(Chrome::SHADOW)
    }

    /// The corner radius the host should clip the sheet with. Squared off at
    /// full screen on devices without a bottom safe-area inset, where the
    /// sheet meets the physical screen corners.
    pub fn corner_radius(&self, metrics: &Metrics) -> f64 {
        if self.is_full_screen(metrics) && !metrics.has_bottom_inset() {
            0.0
        } else {
            self.corner_radius
        }
    }

    fn entry_index(&self) -> Option<usize> {
        if self.detents.is_empty() { None } else { Some(0) }
    }

    /// Upward-drag preview: grow toward the next detent without committing.
    fn preview_expansion(&mut self, translation_y: f64, metrics: &Metrics) {
        // Upward translations are non-positive, so the magnitude is the
        // negation; no `abs` needed.
        let magnitude = -translation_y;
        if magnitude <= EXPANSION_DEAD_ZONE {
            return;
        }
        let Some(current) = self.current else {
            return;
        };
        if self.detents.len() <= 1 || current + 1 >= self.detents.len() {
            return;
        }

        let current_height = self.detent_height(metrics);
        let next_height = self
            .detents
            .height_above(current_height, metrics)
            .unwrap_or(magnitude);
        let largest = self.detents.largest_height(metrics).unwrap_or(magnitude);
        if current_height >= next_height {
            return;
        }

        let proposed = (current_height + magnitude / EXPANSION_DAMPING).max(0.0);
        self.extra_height =
            (proposed - current_height).min(next_height.min(largest) - current_height);
    }

    fn advance(&mut self) -> SnapResponse {
        match self.current {
            Some(i) if i + 1 < self.detents.len() => {
                self.current = Some(i + 1);
                SnapResponse::Advanced(i + 1)
            }
            _ => SnapResponse::Settled,
        }
    }

    fn retreat_or_dismiss(&mut self) -> SnapResponse {
        match self.current {
            Some(i) if i > 0 => {
                self.current = Some(i - 1);
                SnapResponse::Retreated(i - 1)
            }
            _ => {
                self.dismiss();
                SnapResponse::Dismissed
            }
        }
    }
}
