// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers driving a [`SheetSession`] from gate events.
//!
//! ## Feature
//!
//! Enable with `session_adapter`.
//!
//! ## Notes
//!
//! These helpers wire the gate's forwarding decisions into the session's
//! drag handling, so a host only relays its inner region's scroll callbacks.
//! The gate itself stays toolkit-agnostic; only this module knows about the
//! session.

use undersheet_detent::Metrics;
use undersheet_session::session::{DragResponse, SheetSession, SnapResponse};

use crate::gate::{GateEvent, ScrollGate, inner_scroll_enabled};

/// Whether the session's hosted content should scroll internally, from its
/// last measured content height against the current detent's frame.
pub fn scroll_enabled(session: &SheetSession, metrics: &Metrics) -> bool {
    inner_scroll_enabled(session.content_height(), session.detent_height(metrics))
}

/// Relay one inner scroll event into the sheet.
///
/// Returns the sheet's response when the gate forwarded the translation,
/// `None` when the inner region consumed the event.
pub fn relay_scroll_changed(
    gate: &mut ScrollGate,
    session: &mut SheetSession,
    scroll_offset: f64,
    translation_y: f64,
    metrics: &Metrics,
) -> Option<DragResponse> {
    match gate.scroll_changed(scroll_offset, translation_y) {
        GateEvent::Forward(dy) => Some(session.drag_changed(dy, metrics)),
        GateEvent::Consume => None,
    }
}

/// Relay the end of an inner scroll gesture into the sheet.
///
/// Returns the sheet's snap decision when a forwarded drag was in flight,
/// `None` otherwise.
pub fn relay_scroll_ended(
    gate: &mut ScrollGate,
    session: &mut SheetSession,
) -> Option<SnapResponse> {
    gate.scroll_ended().map(|dy| session.drag_ended(dy))
}
