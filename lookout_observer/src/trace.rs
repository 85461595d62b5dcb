// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for scans, wakes, and delivery.
//!
//! The observer itself stores no provenance: a scan updates entries and
//! moves on. For embedders that want to answer "why did this callback fire?"
//! (or "why did it *not* fire?"), every state-changing operation has a
//! `_with_trace` variant taking an [`ObserverTrace`] sink. The plain
//! variants pass `()`, whose hook implementations are empty and compile
//! away.
//!
//! [`TraceLog`] is a small ready-made recorder that appends every hook call
//! to a `Vec`; useful in tests and debug overlays.

use alloc::vec::Vec;

use crate::host::ViewEvent;
use crate::schedule::WakeToken;

/// A callback sink for observer tracing.
///
/// All hooks default to doing nothing, so implementations override only
/// what they care about. Hooks are called synchronously from inside the
/// observer; implementations should record and return, not re-enter the
/// observer.
pub trait ObserverTrace<E> {
    /// A view event reached a bound observer and a scan is starting over
    /// `queue_len` entries.
    fn scan_started(&mut self, _event: ViewEvent, _queue_len: usize) {}

    /// A scan found `target`'s overlap crossing between empty and
    /// non-empty. `now_intersecting` is the side it landed on.
    fn emptiness_flipped(&mut self, _target: &E, _now_intersecting: bool) {}

    /// A scan produced transitions and a wake was requested from the host.
    ///
    /// Not called when a wake is already outstanding; the pending batch is
    /// simply replaced under the existing request.
    fn wake_requested(&mut self, _wake: WakeToken) {}

    /// A wake arrived carrying a generation older than the observer's and
    /// was discarded.
    fn wake_dropped_stale(&mut self, _wake: WakeToken) {}

    /// A live wake delivered a batch of `batch_len` entries to the
    /// callback.
    fn batch_delivered(&mut self, _batch_len: usize) {}
}

/// The no-op sink used by the untraced operation variants.
impl<E> ObserverTrace<E> for () {}

/// One recorded hook call.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent<E> {
    /// See [`ObserverTrace::scan_started`].
    ScanStarted {
        /// The event that triggered the scan.
        event: ViewEvent,
        /// Queue length at scan start.
        queue_len: usize,
    },
    /// See [`ObserverTrace::emptiness_flipped`].
    EmptinessFlipped {
        /// The target whose overlap crossed the empty boundary.
        target: E,
        /// Which side of the boundary it landed on.
        now_intersecting: bool,
    },
    /// See [`ObserverTrace::wake_requested`].
    WakeRequested {
        /// The token handed to the host.
        wake: WakeToken,
    },
    /// See [`ObserverTrace::wake_dropped_stale`].
    WakeDroppedStale {
        /// The stale token.
        wake: WakeToken,
    },
    /// See [`ObserverTrace::batch_delivered`].
    BatchDelivered {
        /// Number of entries handed to the callback.
        batch_len: usize,
    },
}

/// Records every hook call in order.
#[derive(Clone, Debug)]
pub struct TraceLog<E> {
    events: Vec<TraceEvent<E>>,
}

impl<E> TraceLog<E> {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// The recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent<E>] {
        &self.events
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<E> Default for TraceLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> ObserverTrace<E> for TraceLog<E> {
    fn scan_started(&mut self, event: ViewEvent, queue_len: usize) {
        self.events.push(TraceEvent::ScanStarted { event, queue_len });
    }

    fn emptiness_flipped(&mut self, target: &E, now_intersecting: bool) {
        self.events.push(TraceEvent::EmptinessFlipped {
            target: target.clone(),
            now_intersecting,
        });
    }

    fn wake_requested(&mut self, wake: WakeToken) {
        self.events.push(TraceEvent::WakeRequested { wake });
    }

    fn wake_dropped_stale(&mut self, wake: WakeToken) {
        self.events.push(TraceEvent::WakeDroppedStale { wake });
    }

    fn batch_delivered(&mut self, batch_len: usize) {
        self.events.push(TraceEvent::BatchDelivered { batch_len });
    }
}
