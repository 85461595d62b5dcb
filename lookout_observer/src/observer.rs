// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The observer: queue, binder, scanner, and scheduler composed.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::binder::rebind;
use crate::entry::ObservedEntry;
use crate::host::{ViewEvent, ViewHost, rect_of};
use crate::options::ObserverOptions;
use crate::scan::scan_queue;
use crate::schedule::{NotifyStrategy, WakeToken};
use crate::trace::ObserverTrace;

/// The boxed callback type stored by an [`Observer`].
///
/// Receives the delivered batch and the observer itself, so a callback can
/// observe, unobserve, or disconnect re-entrantly.
pub type ChangeCallback<H> =
    Box<dyn FnMut(&[ObservedEntry<<H as ViewHost>::Element>], &mut Observer<H>)>;

/// Error returned when observing a handle the host reports dead.
#[derive(Clone, PartialEq, Eq)]
pub struct InvalidTarget<E> {
    /// The rejected handle, returned to the caller.
    pub target: E,
}

impl<E: fmt::Debug> fmt::Debug for InvalidTarget<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidTarget {{ target: {:?} }}", self.target)
    }
}

impl<E: fmt::Debug> fmt::Display for InvalidTarget<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot observe {:?}: the host reports no live element for it",
            self.target
        )
    }
}

impl<E: fmt::Debug> core::error::Error for InvalidTarget<E> {}

/// Tracks empty/non-empty intersection transitions for a set of targets.
///
/// An observer owns a [`ViewHost`] handle, a queue of [`ObservedEntry`]
/// values (one per observed target, in observe order), and a user callback.
/// The host drives it through two entry points:
///
/// - [`handle_view_event`](Observer::handle_view_event) on every scroll or
///   resize while the observer is bound. This re-reads geometry, detects
///   transitions, and, if any occurred, stashes them as the pending batch
///   and asks the host for a wake.
/// - [`wake`](Observer::wake) when the requested signal or deferred timer
///   fires. This is where the callback actually runs, never synchronously
///   with the triggering event.
///
/// At most one wake is outstanding at a time. Scans that find transitions
/// while a wake is pending replace the batch under the existing request, so
/// the callback always sees the latest state (latest-wins, not
/// at-least-once per event).
///
/// Listener lifetime follows queue occupancy exactly: the first observed
/// target attaches scroll + resize listeners through the host, emptying the
/// queue (or [`disconnect`](Observer::disconnect)) detaches them.
pub struct Observer<H: ViewHost> {
    host: H,
    callback: Option<ChangeCallback<H>>,
    root: Option<H::Element>,
    root_margin: String,
    thresholds: Vec<f64>,
    queue: Vec<ObservedEntry<H::Element>>,
    event_bound: bool,
    pending: Option<Vec<ObservedEntry<H::Element>>>,
    strategy: NotifyStrategy<H::Signal>,
    wake_scheduled: bool,
    generation: u64,
}

impl<H: ViewHost> Observer<H> {
    /// Creates an observer over `host` with the given callback and options.
    ///
    /// Probes the host's notification capability once, here: hosts offering
    /// a change signal get the signal path for life, all others the
    /// deferred-timer path. Nothing is observed and no listeners are
    /// attached until the first [`observe`](Observer::observe).
    pub fn new(
        mut host: H,
        callback: impl FnMut(&[ObservedEntry<H::Element>], &mut Self) + 'static,
        options: ObserverOptions<H::Element>,
    ) -> Self {
        let strategy = NotifyStrategy::probe(&mut host);
        Self {
            host,
            callback: Some(Box::new(callback)),
            root: options.root,
            root_margin: options.root_margin,
            thresholds: options.thresholds,
            queue: Vec::new(),
            event_bound: false,
            pending: None,
            strategy,
            wake_scheduled: false,
            generation: 0,
        }
    }

    /// Starts observing `target`.
    ///
    /// Seeds an entry with the target's current geometry (bounding rect,
    /// intersection with the root, root bounds, and the host clock) so the
    /// first scan compares against reality at observe time rather than
    /// against a blank. An element already intersecting when observed
    /// therefore produces no "entered" notification; only later transitions
    /// do.
    ///
    /// Observing the same target twice queues two entries; there is no
    /// deduplication.
    ///
    /// # Errors
    ///
    /// [`InvalidTarget`] if the host does not report `target` as live. The
    /// rejected handle rides back in the error.
    pub fn observe(&mut self, target: H::Element) -> Result<(), InvalidTarget<H::Element>> {
        if !self.host.is_live(&target) {
            return Err(InvalidTarget { target });
        }
        let bounding = self.host.element_rect(&target);
        let root_bounds = rect_of(&self.host, self.root.as_ref());
        let time = self.host.now();
        self.queue.push(ObservedEntry::new(
            bounding,
            bounding.intersect(root_bounds),
            root_bounds,
            target,
            time,
        ));
        self.event_bound = rebind(
            &mut self.host,
            self.event_bound,
            self.queue.len(),
            self.root.as_ref(),
            false,
        );
        Ok(())
    }

    /// Stops observing `target`.
    ///
    /// Removes the first queued entry for it, preserving the order of the
    /// rest; with duplicates, one call removes one entry. Unobserving a
    /// target that was never observed is a quiet no-op. Removing the last
    /// entry detaches the host listeners.
    pub fn unobserve(&mut self, target: &H::Element) {
        let Some(index) = self.queue.iter().position(|entry| entry.target == *target) else {
            return;
        };
        self.queue.remove(index);
        self.event_bound = rebind(
            &mut self.host,
            self.event_bound,
            self.queue.len(),
            self.root.as_ref(),
            false,
        );
    }

    /// Stops observing everything and cancels any scheduled delivery.
    ///
    /// Clears the queue, force-detaches the host listeners, drops the
    /// pending batch, and invalidates every wake already in flight: a
    /// signal or timer that fires after this call lands as a stale token
    /// and is discarded. The observer remains usable; a later
    /// [`observe`](Observer::observe) starts a fresh session.
    pub fn disconnect(&mut self) {
        self.queue.clear();
        self.event_bound = rebind(
            &mut self.host,
            self.event_bound,
            self.queue.len(),
            self.root.as_ref(),
            true,
        );
        self.pending = None;
        self.wake_scheduled = false;
        self.generation += 1;
    }

    /// Snapshots the queue, then disconnects.
    ///
    /// Returns a clone of every queued entry in observe order: their
    /// state as of the most recent scan, not a fresh geometry read.
    /// Draining the records ends observation: this is
    /// [`disconnect`](Observer::disconnect) with a return value, not a
    /// peek. Callers who want to keep observing re-observe the targets
    /// they still care about.
    #[must_use]
    pub fn take_records(&mut self) -> Vec<ObservedEntry<H::Element>> {
        let records = self.queue.clone();
        self.disconnect();
        records
    }

    /// Reacts to a scroll or resize reported by the host.
    ///
    /// Ignored while unbound (hosts that deliver a straggling event after
    /// detach get a no-op, mirroring a listener that is simply gone).
    /// Otherwise scans the whole queue: every entry's
    /// `bounding_client_rect` and `root_bounds` are refreshed; entries
    /// whose intersection crossed the empty boundary also get a new
    /// `intersection_rect` and `time` and are cloned into the pending
    /// batch. A non-empty batch requests a wake, unless one is already
    /// outstanding, in which case the new batch simply replaces the old
    /// under the existing request.
    pub fn handle_view_event(&mut self, event: ViewEvent) {
        self.handle_view_event_with_trace(event, &mut ());
    }

    /// [`handle_view_event`](Observer::handle_view_event) with tracing.
    pub fn handle_view_event_with_trace<T: ObserverTrace<H::Element>>(
        &mut self,
        event: ViewEvent,
        trace: &mut T,
    ) {
        if !self.event_bound {
            return;
        }
        trace.scan_started(event, self.queue.len());
        let now = self.host.now();
        let changes = scan_queue(&self.host, self.root.as_ref(), &mut self.queue, now, trace);
        if changes.is_empty() {
            return;
        }
        self.pending = Some(changes);
        if !self.wake_scheduled {
            let wake = WakeToken::new(self.generation);
            self.strategy.request(&mut self.host, wake);
            self.wake_scheduled = true;
            trace.wake_requested(wake);
        }
    }

    /// Delivers the pending batch; called by the host when a requested
    /// signal or deferred timer fires.
    ///
    /// A token issued before the most recent
    /// [`disconnect`](Observer::disconnect) is stale and dropped without
    /// effect. A live token takes the pending batch and invokes the
    /// callback with it and the observer; with nothing pending (the wake
    /// was spurious) it is a no-op. The callback may re-enter the observer
    /// freely, `wake` included: a wake landing while a delivery is already
    /// running leaves the batch pending and is handed back to the host, to
    /// land again once that delivery unwinds.
    pub fn wake(&mut self, wake: WakeToken) {
        self.wake_with_trace(wake, &mut ());
    }

    /// [`wake`](Observer::wake) with tracing.
    pub fn wake_with_trace<T: ObserverTrace<H::Element>>(&mut self, wake: WakeToken, trace: &mut T) {
        if wake.generation() != self.generation {
            trace.wake_dropped_stale(wake);
            return;
        }
        self.wake_scheduled = false;
        let Some(batch) = self.pending.take() else {
            return;
        };
        // The callback is parked while it runs so it can borrow the
        // observer mutably. An empty slot here means this wake was
        // re-entered from inside a running delivery: put the batch back and
        // hand the token to the host again, to land once that delivery
        // unwinds.
        let Some(mut callback) = self.callback.take() else {
            self.pending = Some(batch);
            self.wake_scheduled = true;
            self.strategy.request(&mut self.host, wake);
            trace.wake_requested(wake);
            return;
        };
        callback(&batch, self);
        self.callback = Some(callback);
        trace.batch_delivered(batch.len());
    }

    /// The configured root handle, or `None` for the viewport.
    #[must_use]
    pub fn root(&self) -> Option<&H::Element> {
        self.root.as_ref()
    }

    /// The configured root margin string, verbatim and unapplied.
    #[must_use]
    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }

    /// The configured threshold ratios, stored but never consulted.
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Whether host listeners are currently attached.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.event_bound
    }

    /// Number of queued entries (duplicates counted).
    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether at least one queued entry is for `target`.
    #[must_use]
    pub fn is_observing(&self, target: &H::Element) -> bool {
        self.queue.iter().any(|entry| entry.target == *target)
    }

    /// The notification path selected at construction.
    #[must_use]
    pub fn notify_strategy(&self) -> &NotifyStrategy<H::Signal> {
        &self.strategy
    }

    /// Shared access to the owned host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the owned host.
    ///
    /// For embedders whose host is not a shared handle; geometry changed
    /// through here is picked up by the next scan like any other.
    #[must_use]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: ViewHost> fmt::Debug for Observer<H>
where
    H::Element: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("root", &self.root)
            .field("root_margin", &self.root_margin)
            .field("thresholds", &self.thresholds)
            .field("queue", &self.queue)
            .field("event_bound", &self.event_bound)
            .field("pending", &self.pending)
            .field("wake_scheduled", &self.wake_scheduled)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
