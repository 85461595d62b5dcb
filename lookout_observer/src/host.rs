// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host capability seam.
//!
//! An [`Observer`](crate::Observer) never talks to a UI runtime directly. It
//! talks to a [`ViewHost`]: a trait the embedder implements over whatever it
//! actually runs on (a browser-style DOM, a retained scene graph, a test
//! scene). The host answers geometry queries, reports element liveness,
//! provides a monotonic clock, and carries the two notification capabilities
//! an observer probes at construction time.
//!
//! Geometry flows one way: the observer asks, the host answers. The host
//! never pushes rectangles; instead it delivers [`ViewEvent`]s (scroll,
//! resize) to [`Observer::handle_view_event`](crate::Observer::handle_view_event),
//! and the observer re-queries.

use lookout_rect::ViewRect;

use crate::schedule::WakeToken;

/// A view change reported by the host.
///
/// Both kinds are handled identically by the observer; the distinction
/// exists for host bookkeeping and tracing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ViewEvent {
    /// The root (or the viewport) scrolled.
    Scroll,
    /// The viewport was resized.
    Resize,
}

/// Capabilities an observer requires from its embedding UI runtime.
///
/// Implementations are expected to be cheap handles onto host state (an
/// `Rc`/`Arc` of the scene, a context pointer), because the observer takes
/// ownership of the value passed to [`Observer::new`](crate::Observer::new).
/// Embedders that need to keep driving the scene afterwards keep a second
/// handle.
///
/// # Notification capabilities
///
/// [`ViewHost::new_change_signal`] and [`ViewHost::raise_change_signal`]
/// form one optional capability and must be overridden together. The
/// defaults report the capability as absent, which routes every wake through
/// [`ViewHost::defer_wake`] instead. Absence is not an error; it is how a
/// host says "I have no cheap change signal, use the deferred path".
pub trait ViewHost {
    /// Handle to an element in the host's scene.
    ///
    /// `Clone + PartialEq` because observers store handles in their
    /// observation queue and look them up by equality on
    /// [`unobserve`](crate::Observer::unobserve).
    type Element: Clone + PartialEq;

    /// Host-side state backing one change signal (see
    /// [`new_change_signal`](ViewHost::new_change_signal)).
    ///
    /// Hosts without the capability can use `()`.
    type Signal;

    /// Current viewport rectangle, origin pinned at `(0, 0)`.
    fn viewport_rect(&self) -> ViewRect;

    /// Bounding rectangle of `target` in viewport coordinates.
    ///
    /// Called only for elements previously accepted by
    /// [`is_live`](ViewHost::is_live); hosts may answer
    /// [`ViewRect::EMPTY`] for elements that have since left the scene.
    fn element_rect(&self, target: &Self::Element) -> ViewRect;

    /// Whether `target` currently refers to a real element in the scene.
    ///
    /// Observers refuse to observe dead targets. Hosts whose element handles
    /// cannot dangle may keep the default, which accepts everything.
    fn is_live(&self, _target: &Self::Element) -> bool {
        true
    }

    /// Monotonic timestamp in milliseconds.
    ///
    /// Only differences and ordering are meaningful; the epoch is the
    /// host's own.
    fn now(&self) -> f64;

    /// Start delivering scroll events for `root` (`None`: the viewport).
    ///
    /// Called at most once per observer while bound; the observer does its
    /// own attach/detach bookkeeping, so hosts need not deduplicate.
    fn attach_scroll_listener(&mut self, root: Option<&Self::Element>);

    /// Stop delivering scroll events for `root` (`None`: the viewport).
    ///
    /// May be called when no listener is attached; hosts must treat that as
    /// a no-op.
    fn detach_scroll_listener(&mut self, root: Option<&Self::Element>);

    /// Start delivering viewport resize events.
    fn attach_resize_listener(&mut self);

    /// Stop delivering viewport resize events.
    ///
    /// May be called when no listener is attached; hosts must treat that as
    /// a no-op.
    fn detach_resize_listener(&mut self);

    /// Allocate a change signal, if the host has one to offer.
    ///
    /// A change signal is any host primitive that can schedule a callback
    /// "soon, after the current work completes" more cheaply or promptly
    /// than a timer (a microtask hook, a post-frame callback). Returning
    /// `Some` commits the host to honoring
    /// [`raise_change_signal`](ViewHost::raise_change_signal) on the
    /// returned value. The default returns `None`.
    fn new_change_signal(&mut self) -> Option<Self::Signal> {
        None
    }

    /// Raise a previously allocated change signal.
    ///
    /// The host must arrange for [`Observer::wake`](crate::Observer::wake)
    /// to be called exactly once with `wake`, on a later turn of its run
    /// loop. Delivery cannot happen from inside this call (the observer is
    /// mid-borrow); hosts store the token and deliver it later. Never
    /// called unless [`new_change_signal`](ViewHost::new_change_signal)
    /// returned `Some`.
    fn raise_change_signal(&mut self, _signal: &mut Self::Signal, _wake: WakeToken) {}

    /// Schedule a deferred wake on the host's run loop.
    ///
    /// The fallback notification path, and the only one every host must
    /// support: arrange for [`Observer::wake`](crate::Observer::wake) to be
    /// called exactly once with `wake` at the earliest convenient later
    /// point (a zero-delay timer, the next frame). As with
    /// [`raise_change_signal`](ViewHost::raise_change_signal), delivery is
    /// never from inside this call.
    fn defer_wake(&mut self, wake: WakeToken);
}

/// The rectangle a root handle denotes: the element's own box, or the
/// viewport when `root` is `None`.
#[must_use]
pub fn rect_of<H: ViewHost>(host: &H, root: Option<&H::Element>) -> ViewRect {
    match root {
        Some(element) => host.element_rect(element),
        None => host.viewport_rect(),
    }
}
