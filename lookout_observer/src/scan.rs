// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The change scan: re-reading geometry and detecting transitions.

use alloc::vec::Vec;

use crate::entry::ObservedEntry;
use crate::host::{ViewHost, rect_of};
use crate::trace::ObserverTrace;

/// Re-reads geometry for every queued entry and collects transitions.
///
/// The root rectangle is read once per scan, each target's bounding
/// rectangle once per entry. `bounding_client_rect` and `root_bounds` are
/// refreshed on every entry the scan visits; `intersection_rect` and `time`
/// move only when the freshly computed overlap is on the other side of the
/// empty boundary from the stored one. Entries that flipped are cloned
/// (post-update) into the returned batch, in queue order. A scan that finds
/// no transitions allocates nothing.
pub(crate) fn scan_queue<H, T>(
    host: &H,
    root: Option<&H::Element>,
    queue: &mut [ObservedEntry<H::Element>],
    now: f64,
    trace: &mut T,
) -> Vec<ObservedEntry<H::Element>>
where
    H: ViewHost,
    T: ObserverTrace<H::Element>,
{
    let root_bounds = rect_of(host, root);
    let mut changes = Vec::new();
    for entry in queue.iter_mut() {
        let bounding = host.element_rect(&entry.target);
        let overlap = bounding.intersect(root_bounds);
        entry.bounding_client_rect = bounding;
        entry.root_bounds = root_bounds;
        if overlap.is_empty() != entry.intersection_rect.is_empty() {
            entry.intersection_rect = overlap;
            entry.time = now;
            trace.emptiness_flipped(&entry.target, !overlap.is_empty());
            changes.push(entry.clone());
        }
    }
    changes
}
