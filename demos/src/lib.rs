// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared plumbing for the Lookout demos.
//!
//! The demos drive an [`Observer`] over the simulated host by hand; the
//! helpers here keep the run-loop pumping and the printouts consistent
//! across them.

use lookout_host_ref::SimHost;
use lookout_observer::{Observer, ViewRect};

/// Runs one turn of the simulated run loop: drains every queued wake and
/// delivers it. Returns how many wakes were delivered.
pub fn pump(host: &SimHost, observer: &mut Observer<SimHost>) -> usize {
    let wakes = host.drain_wakes();
    let delivered = wakes.len();
    for wake in wakes {
        observer.wake(wake);
    }
    delivered
}

/// Formats a rect as `WxH at (left, top)` for demo printouts.
pub fn format_rect(rect: ViewRect) -> String {
    format!(
        "{}x{} at ({}, {})",
        rect.width, rect.height, rect.left, rect.top
    )
}
