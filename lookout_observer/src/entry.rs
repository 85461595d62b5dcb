// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation entries: one target's visibility state at a point in time.

use lookout_rect::ViewRect;

/// A snapshot of one observed target's visibility.
///
/// Entries serve double duty. Inside an observer's queue they are the
/// retained per-target state that change scans compare against and update in
/// place. Handed to a callback (or returned from
/// [`take_records`](crate::Observer::take_records)) they are plain values:
/// snapshots the recipient may keep, sort, or mutate without touching the
/// observer.
///
/// All fields are public and plain data; there is no hidden state.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservedEntry<E> {
    /// The target's bounding rectangle in viewport coordinates, as of the
    /// most recent scan that saw this entry.
    pub bounding_client_rect: ViewRect,
    /// Overlap between the target and the root, in the computed-rect shape
    /// (`right`/`bottom` zero). [`ViewRect::EMPTY`] when not intersecting.
    ///
    /// Unlike `bounding_client_rect` and `root_bounds`, this field (and
    /// `time`) only moves when the overlap crosses between empty and
    /// non-empty; see
    /// [`Observer::handle_view_event`](crate::Observer::handle_view_event).
    pub intersection_rect: ViewRect,
    /// The root's rectangle (or the viewport rectangle for a `None` root),
    /// as of the most recent scan that saw this entry.
    pub root_bounds: ViewRect,
    /// Handle of the observed element.
    pub target: E,
    /// Host timestamp (milliseconds) of the transition this entry records.
    pub time: f64,
}

impl<E> ObservedEntry<E> {
    /// Assembles an entry from its parts.
    #[must_use]
    pub const fn new(
        bounding_client_rect: ViewRect,
        intersection_rect: ViewRect,
        root_bounds: ViewRect,
        target: E,
        time: f64,
    ) -> Self {
        Self {
            bounding_client_rect,
            intersection_rect,
            root_bounds,
            target,
            time,
        }
    }

    /// Whether the target currently overlaps the root.
    ///
    /// Derived from `intersection_rect` by the all-zero sentinel test; an
    /// entry never stores this separately.
    #[must_use]
    pub fn is_intersecting(&self) -> bool {
        !self.intersection_rect.is_empty()
    }
}
