// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Scroll: arbitration between a sheet's drag and inner scrolling.
//!
//! ## Overview
//!
//! A bottom sheet hosting scrollable content has two consumers for every
//! vertical drag: the inner scroll region and the sheet itself. This crate
//! decides who gets the event, with no dependency on any toolkit's gesture
//! API:
//!
//! - [`inner_scroll_enabled`](crate::gate::inner_scroll_enabled) is the pure
//!   gate: content taller than the sheet's frame scrolls internally,
//!   otherwise every drag belongs to the sheet.
//! - [`ScrollGate`](crate::gate::ScrollGate) is the forwarding state
//!   machine: while the inner region sits at its top edge, raw drag
//!   translations are handed to the sheet exactly as if they started there,
//!   and the inner bounce is suppressed until the forwarded gesture ends.
//!
//! ## Minimal example
//!
//! ```
//! use undersheet_scroll::gate::{GateEvent, ScrollGate, inner_scroll_enabled};
//!
//! assert!(inner_scroll_enabled(1200.0, 400.0));
//!
//! let mut gate = ScrollGate::new();
//! // Content pulled below its top edge: forward to the sheet, stop bouncing.
//! assert_eq!(gate.scroll_changed(-8.0, 120.0), GateEvent::Forward(120.0));
//! assert!(!gate.bounce_enabled());
//! // Gesture ends; the sheet gets the final translation, bounce returns.
//! assert_eq!(gate.scroll_ended(), Some(120.0));
//! assert!(gate.bounce_enabled());
//! ```
//!
//! The `session_adapter` feature adds helpers that drive an
//! `undersheet_session` sheet directly from gate events.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod adapters;
pub mod gate;
