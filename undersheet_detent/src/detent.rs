// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The detent value type and its resolution to a concrete height.

use crate::metrics::Metrics;

/// One allowed resting size for a bottom sheet.
///
/// Detents are immutable values; a sheet is configured with a list of them
/// and snaps between the members of the normalized
/// [`DetentSet`](crate::set::DetentSet).
///
/// ## Equality
///
/// Two detents are equal when they are the same kind; [`Fixed`](Self::Fixed)
/// additionally compares its height. In particular, two `Fraction` detents
/// compare equal regardless of their factor, so a normalized set keeps at
/// most one fraction entry (the first in ascending height order).
///
/// Heights and fractions are assumed finite (no NaN).
#[derive(Copy, Clone, Debug)]
pub enum Detent {
    /// Sized by the measured content; resolves to `0.0` here, with the
    /// measured height tracked by the session that owns the sheet.
    ByContent,
    /// A fraction of the screen height, e.g. `0.5` for a half-screen sheet.
    Fraction(f64),
    /// An explicit height in the host's linear unit.
    Fixed(f64),
    /// The full screen, including the top safe-area inset.
    FullScreen,
}

impl Detent {
    /// Resolve this detent to a height against the given metrics.
    ///
    /// Pure; queried lazily on every use, never cached.
    pub fn resolved_height(&self, metrics: &Metrics) -> f64 {
        match *self {
            Self::ByContent => 0.0,
            Self::Fraction(f) => metrics.screen.height * f,
            Self::Fixed(h) => h,
            Self::FullScreen => metrics.full_screen_height(),
        }
    }
}

impl PartialEq for Detent {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::ByContent, Self::ByContent)
            | (Self::Fraction(_), Self::Fraction(_))
            | (Self::FullScreen, Self::FullScreen) => true,
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            _ => false,
        }
    }
}

// Heights are assumed finite; `Fixed(NaN)` would break reflexivity but is
// outside the contract, as with NaN depth keys elsewhere in this family.
impl Eq for Detent {}
