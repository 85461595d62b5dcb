// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between [`ViewRect`] and Kurbo geometry.
//!
//! Hosts that already speak [`kurbo::Rect`] can convert boxes in either
//! direction. Converting *to* Kurbo uses the computed far edges
//! ([`ViewRect::right_edge`] / [`ViewRect::bottom_edge`]), so rectangles
//! produced by [`ViewRect::intersect`] (whose stored `right`/`bottom` are
//! zero) convert correctly.

use crate::ViewRect;

impl From<kurbo::Rect> for ViewRect {
    fn from(rect: kurbo::Rect) -> Self {
        Self {
            top: rect.y0,
            right: rect.x1,
            bottom: rect.y1,
            left: rect.x0,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

impl From<ViewRect> for kurbo::Rect {
    fn from(rect: ViewRect) -> Self {
        Self::new(rect.left, rect.top, rect.right_edge(), rect.bottom_edge())
    }
}
