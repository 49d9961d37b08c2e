// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll gate: decide per event whether the inner region or the sheet
//! consumes a drag.

/// Whether the sheet's content should scroll internally.
///
/// True iff the measured content is taller than the sheet's resting frame.
/// When the content fits, inner scrolling is disabled so every drag reaches
/// the sheet's own gesture handling.
pub fn inner_scroll_enabled(content_height: f64, detent_height: f64) -> bool {
    content_height > detent_height
}

/// Per-event decision from [`ScrollGate::scroll_changed`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GateEvent {
    /// Hand the raw translation to the sheet, as if the drag started there.
    Forward(f64),
    /// The inner region consumes the event; the sheet sees nothing.
    Consume,
}

/// Tracks one inner scroll region's edge state and the forwarding of edge
/// drags to the sheet.
///
/// While the inner region is at or above its top edge and the user keeps
/// dragging, translations are forwarded to the sheet and the inner bounce
/// is suppressed; both end with [`scroll_ended`](Self::scroll_ended).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollGate {
    forwarding: bool,
    last_translation: f64,
}

impl ScrollGate {
    /// Create an idle gate.
    pub const fn new() -> Self {
        Self {
            forwarding: false,
            last_translation: 0.0,
        }
    }

    /// Whether a forwarded drag is currently in flight.
    pub const fn is_forwarding(&self) -> bool {
        self.forwarding
    }

    /// Whether the inner region's bounce effect should currently be active.
    /// Suppressed for the duration of a forwarded drag.
    pub const fn bounce_enabled(&self) -> bool {
        !self.forwarding
    }

    /// Process one inner scroll event.
    ///
    /// `scroll_offset` is the inner region's scroll position (`<= 0.0` means
    /// at or pulled past its top edge); `translation_y` is the driving
    /// gesture's current translation. At the top edge the translation is
    /// forwarded and the gate latches into forwarding until
    /// [`scroll_ended`](Self::scroll_ended); away from the edge the inner
    /// region consumes the event.
    pub fn scroll_changed(&mut self, scroll_offset: f64, translation_y: f64) -> GateEvent {
        if scroll_offset <= 0.0 {
            self.forwarding = true;
            self.last_translation = translation_y;
            GateEvent::Forward(translation_y)
        } else {
            // Content moved off the edge mid-gesture: stop feeding the sheet
            // but keep bounce suppressed until the gesture actually ends.
            GateEvent::Consume
        }
    }

    /// The driving gesture ended.
    ///
    /// Returns the final forwarded translation for the sheet's drag-ended
    /// handling when a forwarded drag was in flight, restoring bounce and
    /// resetting the gate; `None` when nothing was forwarded.
    pub fn scroll_ended(&mut self) -> Option<f64> {
        if !self.forwarding {
            return None;
        }
        self.forwarding = false;
        let translation = self.last_translation;
        self.last_translation = 0.0;
        Some(translation)
    }
}
