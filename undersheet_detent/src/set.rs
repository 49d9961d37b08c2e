// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized detent sets: the canonical sequence a sheet snaps between.

use alloc::vec::Vec;

use crate::detent::Detent;
use crate::metrics::Metrics;

/// An ordered, duplicate-free sequence of detents, ascending by resolved
/// height.
///
/// Produced by [`DetentSet::normalize`] from a caller-supplied raw list.
/// When non-empty, index 0 is the entry detent a freshly presented sheet
/// rests at. The set is derived data: recompute it whenever the raw list or
/// the screen metrics change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetentSet {
    entries: Vec<Detent>,
}

impl DetentSet {
    /// Build the canonical set from a raw detent list.
    ///
    /// Entries whose resolved height exceeds the full-screen height are
    /// dropped, the remainder is stably sorted ascending by resolved height,
    /// and duplicates (by detent equality) are removed keeping the first
    /// occurrence. The result may be empty; that is not an error — the sheet
    /// degrades to content-driven sizing.
    ///
    /// Normalization is idempotent: normalizing the entries of a normalized
    /// set is a no-op.
    pub fn normalize(raw: &[Detent], metrics: &Metrics) -> Self {
        let max_height = Detent::FullScreen.resolved_height(metrics);
        let mut kept: Vec<Detent> = raw
            .iter()
            .copied()
            .filter(|d| d.resolved_height(metrics) <= max_height)
            .collect();
        kept.sort_by(|a, b| {
            a.resolved_height(metrics)
                .partial_cmp(&b.resolved_height(metrics))
                .unwrap_or(core::cmp::Ordering::Equal)
        });

        let mut entries: Vec<Detent> = Vec::with_capacity(kept.len());
        for d in kept {
            if !entries.contains(&d) {
                entries.push(d);
            }
        }
        Self { entries }
    }

    /// Number of detents in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no detents survived normalization (content-driven sizing).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The detent at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Detent> {
        self.entries.get(index).copied()
    }

    /// The smallest detent (the entry detent), if any.
    pub fn first(&self) -> Option<Detent> {
        self.entries.first().copied()
    }

    /// The largest detent, if any.
    pub fn last(&self) -> Option<Detent> {
        self.entries.last().copied()
    }

    /// The entries in ascending resolved-height order.
    pub fn as_slice(&self) -> &[Detent] {
        &self.entries
    }

    /// Iterate the entries in ascending resolved-height order.
    pub fn iter(&self) -> core::slice::Iter<'_, Detent> {
        self.entries.iter()
    }

    /// The smallest resolved height strictly greater than `height`.
    ///
    /// This is the snap target an upward drag from `height` is heading for.
    pub fn height_above(&self, height: f64, metrics: &Metrics) -> Option<f64> {
        self.entries
            .iter()
            .map(|d| d.resolved_height(metrics))
            .find(|&h| h > height)
    }

    /// The resolved height of the largest detent, if any.
    pub fn largest_height(&self, metrics: &Metrics) -> Option<f64> {
        self.last().map(|d| d.resolved_height(metrics))
    }
}

impl<'a> IntoIterator for &'a DetentSet {
    type Item = &'a Detent;
    type IntoIter = core::slice::Iter<'a, Detent>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
