// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Detent: allowed sizes for a bottom sheet, and their normalization.
//!
//! ## Overview
//!
//! A *detent* is one allowed resting size for a bottom sheet: sized by its
//! content, a fraction of the screen, an explicit height, or the full screen.
//! This crate holds the detent value type, the pure resolution of a detent to
//! a concrete height against [`Metrics`] (screen size plus safe-area insets),
//! and [`DetentSet`]: the canonical, ascending, duplicate-free sequence a
//! sheet snaps between.
//!
//! Resolution is lazy and uncached: every query takes `&Metrics`, so a host
//! that re-reads its screen metrics after a device rotation gets fresh heights
//! with no invalidation step.
//!
//! ## Minimal example
//!
//! ```
//! use undersheet_detent::{Detent, DetentSet, Metrics};
//!
//! let metrics = Metrics::from_heights(800.0, 50.0);
//! let set = DetentSet::normalize(&[Detent::FullScreen, Detent::Fraction(0.5)], &metrics);
//! assert_eq!(set.len(), 2);
//! // Ascending by resolved height: half screen first, full screen last.
//! assert_eq!(set.get(0), Some(Detent::Fraction(0.5)));
//! assert_eq!(set.get(0).map(|d| d.resolved_height(&metrics)), Some(400.0));
//! assert_eq!(set.get(1).map(|d| d.resolved_height(&metrics)), Some(850.0));
//! ```
//!
//! Entries that would resolve taller than the full screen are dropped rather
//! than rejected; a list that normalizes to empty simply leaves the sheet in
//! content-driven sizing.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod detent;
pub mod metrics;
pub mod set;

pub use detent::Detent;
pub use metrics::Metrics;
pub use set::DetentSet;
