// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time observer configuration.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Options accepted by [`Observer::new`](crate::Observer::new).
///
/// All fields are latched at construction and never change over an
/// observer's life; they are surfaced afterwards through the accessors on
/// [`Observer`](crate::Observer).
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions<E> {
    /// The root whose box is intersected against, or `None` for the
    /// viewport.
    pub root: Option<E>,
    /// Root margin string, stored verbatim.
    ///
    /// Accepted for interface compatibility only: no parsing, no
    /// validation, and no effect on geometry. `"0px"` by default.
    pub root_margin: String,
    /// Threshold ratios, stored for inspection.
    ///
    /// Change detection is purely empty/non-empty; these values are never
    /// consulted by a scan. `[0.0]` by default.
    pub thresholds: Vec<f64>,
}

impl<E> Default for ObserverOptions<E> {
    fn default() -> Self {
        Self {
            root: None,
            root_margin: String::from("0px"),
            thresholds: vec![0.0],
        }
    }
}
