// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Session: a headless state machine for bottom sheet presentation.
//!
//! ## Overview
//!
//! [`SheetSession`](crate::session::SheetSession) owns the mutable state of
//! one visible sheet: whether it is presented, which detent it rests at, the
//! live drag offset, and the transient extra height shown while an upward
//! drag previews the next detent. It consumes pre-decoded drag translations
//! and screen metrics; it performs no rendering, animation, hit testing, or
//! gesture recognition. The host feeds events in, reads
//! [`offset`](crate::session::SheetSession::offset) and
//! [`height`](crate::session::SheetSession::height) back out, and re-renders
//! after each mutation.
//!
//! ## Event model
//!
//! All transitions are synchronous and per-event. A continuous gesture is a
//! sequence of [`drag_changed`](crate::session::SheetSession::drag_changed)
//! calls followed by one
//! [`drag_ended`](crate::session::SheetSession::drag_ended); the session
//! never batches or reorders them. Translations are vertical, positive
//! downward, relative to the gesture's start.
//!
//! Update methods return transition events
//! ([`DragResponse`](crate::session::DragResponse),
//! [`SnapResponse`](crate::session::SnapResponse)) the host can use to drive
//! animations or haptics.
//!
//! ## Minimal example
//!
//! ```
//! use undersheet_detent::{Detent, Metrics};
//! use undersheet_session::config::SheetConfig;
//! use undersheet_session::session::{SheetSession, SnapResponse};
//!
//! let metrics = Metrics::from_heights(800.0, 50.0);
//! let config = SheetConfig {
//!     detents: Some(vec![Detent::Fraction(0.5), Detent::FullScreen]),
//!     ..SheetConfig::default()
//! };
//! let mut sheet = SheetSession::new(config, &metrics);
//!
//! sheet.present();
//! assert_eq!(sheet.height(&metrics), 400.0);
//!
//! // An upward fling past the snap threshold advances to the next detent.
//! assert_eq!(sheet.drag_ended(-150.0), SnapResponse::Advanced(1));
//! assert_eq!(sheet.height(&metrics), 850.0);
//! ```
//!
//! ## Error handling
//!
//! There is none to speak of, deliberately: every input is clamped or
//! degraded rather than rejected. An oversized corner radius is coerced, a
//! detent list that normalizes to empty falls back to content-driven sizing,
//! and spurious drag values land in one of the threshold branches. Nothing
//! here panics or returns a `Result`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod drag;
pub mod session;
