// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event binding: keeping host listeners alive exactly while needed.
//!
//! An observer holds host listeners (scroll on its root, resize on the
//! viewport) only while its queue is non-empty. [`rebind`] is the single
//! place that decides attach/detach, called after every queue mutation; the
//! observer stores the returned flag and never touches listeners elsewhere.

use crate::host::ViewHost;

/// Reconciles listener state with queue occupancy.
///
/// `bound` is the current listener state, `queue_len` the queue length
/// after the mutation, and the return value is the new listener state:
///
/// - queue emptied while bound, or `force_unbind` set: detach both
///   listeners (even if none are attached; hosts tolerate that), return
///   `false`;
/// - otherwise, not bound and the queue became non-empty: attach both
///   listeners, return `true`;
/// - otherwise: no host calls, state unchanged.
///
/// `force_unbind` wins over attaching when both conditions hold at once,
/// so a forced call always leaves the observer unbound whatever the queue
/// says.
pub(crate) fn rebind<H: ViewHost>(
    host: &mut H,
    bound: bool,
    queue_len: usize,
    root: Option<&H::Element>,
    force_unbind: bool,
) -> bool {
    if (bound && queue_len == 0) || force_unbind {
        host.detach_scroll_listener(root);
        host.detach_resize_listener();
        return false;
    }
    if !bound && queue_len > 0 {
        host.attach_scroll_listener(root);
        host.attach_resize_listener();
        return true;
    }
    bound
}
