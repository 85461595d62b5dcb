// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Rect: client-rect geometry primitives for viewport visibility tracking.
//!
//! This crate provides the small geometric vocabulary shared by the Lookout
//! observation crates: a six-field, viewport-coordinate rectangle in the shape
//! UI hosts report element boxes ([`ViewRect`]), axis-aligned intersection,
//! and the all-zero empty sentinel used for "no overlap".
//!
//! The core operations are:
//!
//! - [`ViewRect::intersect`]: axis-aligned overlap of two rectangles. A
//!   computed intersection populates only `top`/`left`/`width`/`height`;
//!   its `right` and `bottom` fields stay zero so that the sentinel test
//!   below keeps working.
//! - [`ViewRect::is_empty`]: the sentinel test. A rectangle is empty iff the
//!   sum of all six fields is exactly zero.
//!
//! The sentinel test is a heuristic, not a geometric predicate. The all-zero
//! sentinel always classifies empty, but the converse does not hold: any
//! rectangle whose fields sum to exactly zero classifies empty, however it
//! was built. Negative coordinates can cancel real extent in the sum.
//! `from_origin_size(5.0, -45.0, 15.0, 25.0)` is a genuine 15 by 25
//! rectangle that reports empty, and a computed intersection reports empty
//! whenever its far corner lands on the line `x + y = 0`. Transition
//! tracking built on [`ViewRect::is_empty`] inherits these
//! misclassification points.
//!
//! Values pass through unrounded. Coordinates may be negative (an element
//! scrolled above the viewport has a negative `top`). Float inputs are
//! assumed to be finite (no NaNs).
//!
//! ## Minimal example
//!
//! ```rust
//! use lookout_rect::ViewRect;
//!
//! let viewport = ViewRect::viewport(800.0, 600.0);
//! let below_fold = ViewRect::from_origin_size(100.0, 900.0, 200.0, 50.0);
//! assert!(viewport.intersect(below_fold).is_empty());
//!
//! let visible = ViewRect::from_origin_size(100.0, 100.0, 200.0, 50.0);
//! let overlap = viewport.intersect(visible);
//! assert!(!overlap.is_empty());
//! assert_eq!(overlap.width, 200.0);
//! assert_eq!(overlap.height, 50.0);
//! ```
//!
//! With the `kurbo` feature enabled, [`ViewRect`] converts to and from
//! [`kurbo::Rect`] so hosts already speaking Kurbo can hand their boxes over
//! directly.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "kurbo")]
mod convert;

/// An axis-aligned rectangle in viewport coordinates, in the six-field shape
/// UI hosts report element boxes.
///
/// `top`/`right`/`bottom`/`left` are edge positions and `width`/`height` are
/// extents, all in logical pixels. On rectangles reported by a host (or built
/// with [`ViewRect::from_origin_size`]) the redundant fields are consistent
/// (`right == left + width`). On rectangles *computed* by
/// [`ViewRect::intersect`], `right` and `bottom` are left at zero: only
/// `top`/`left`/`width`/`height` carry geometry there, and consumers that
/// need the far edges use [`ViewRect::right_edge`] / [`ViewRect::bottom_edge`].
///
/// The all-zero value is the canonical empty sentinel, [`ViewRect::EMPTY`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ViewRect {
    /// Position of the top edge.
    pub top: f64,
    /// Position of the right edge, when host-reported; zero on computed rects.
    pub right: f64,
    /// Position of the bottom edge, when host-reported; zero on computed rects.
    pub bottom: f64,
    /// Position of the left edge.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl ViewRect {
    /// The canonical empty rectangle: all six fields zero.
    pub const EMPTY: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a rectangle from all six fields.
    ///
    /// No consistency between edges and extents is enforced; hosts report
    /// whatever their layout produced.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            width,
            height,
        }
    }

    /// Creates a rectangle from its origin and size, deriving `right` and
    /// `bottom`.
    #[must_use]
    pub const fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            right: left + width,
            bottom: top + height,
            left,
            width,
            height,
        }
    }

    /// Creates the viewport rectangle for a viewport of the given size.
    ///
    /// The viewport rect anchors at the coordinate origin with only its
    /// extents set, matching the shape hosts report for "the whole view":
    /// a zero-size viewport is therefore the empty sentinel.
    #[must_use]
    pub const fn viewport(width: f64, height: f64) -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
            width,
            height,
        }
    }

    /// Position of the far horizontal edge, computed as `left + width`.
    ///
    /// Use this instead of the stored `right` field on computed rects.
    #[must_use]
    pub fn right_edge(self) -> f64 {
        self.left + self.width
    }

    /// Position of the far vertical edge, computed as `top + height`.
    ///
    /// Use this instead of the stored `bottom` field on computed rects.
    #[must_use]
    pub fn bottom_edge(self) -> f64 {
        self.top + self.height
    }

    /// Returns the axis-aligned intersection of `self` and `other`.
    ///
    /// When the rectangles overlap with positive area, the result carries the
    /// overlap in `top`/`left`/`width`/`height` and leaves `right`/`bottom`
    /// at zero. Touching edges (zero-area overlap) and disjoint rectangles
    /// both produce [`ViewRect::EMPTY`]. Values pass through unrounded. A
    /// computed overlap's fields sum to its far corner; see
    /// [`ViewRect::is_empty`] for when that misclassifies.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        let x1 = self.left.max(other.left);
        let y1 = self.top.max(other.top);
        let x2 = self.right_edge().min(other.right_edge());
        let y2 = self.bottom_edge().min(other.bottom_edge());

        if x1 < x2 && y1 < y2 {
            Self {
                top: y1,
                right: 0.0,
                bottom: 0.0,
                left: x1,
                width: x2 - x1,
                height: y2 - y1,
            }
        } else {
            Self::EMPTY
        }
    }

    /// Returns `true` iff this rectangle classifies as empty.
    ///
    /// The test is the exact zero-sum of all six fields, and it is a
    /// heuristic, not a geometric predicate: [`ViewRect::EMPTY`] always
    /// classifies empty, but so does any rectangle whose negative
    /// coordinates cancel its extent in the sum, no matter which
    /// constructor built it. `from_origin_size(5.0, -45.0, 15.0, 25.0)` is
    /// a genuine 15 by 25 rectangle that classifies empty, and rectangles
    /// computed by [`ViewRect::intersect`] sum to their far corner, so an
    /// overlap whose far corner lands on the line `x + y = 0` classifies
    /// empty despite positive area.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.top + self.right + self.bottom + self.left + self.width + self.height == 0.0
    }
}
