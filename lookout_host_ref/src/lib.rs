// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Host Reference: a deterministic in-memory [`ViewHost`].
//!
//! This crate provides [`SimHost`], a simulated viewport scene for driving
//! [`lookout_observer`] by hand. It is intentionally *not* a real UI host:
//!
//! - No rendering, no layout: element rectangles are whatever the test
//!   sets them to.
//! - No real time: the clock only moves when [`SimHost::advance`] is
//!   called.
//! - No run loop: scheduled wakes sit in a FIFO until the test drains them
//!   with [`SimHost::drain_wakes`] and delivers them itself.
//!
//! Nothing here advances on its own: every scan, wake, and delivery happens
//! exactly when the test says, so conformance tests can assert on ordering
//! and coalescing without sleeps or races. The host also keeps listener
//! and scheduling counters so tests can assert the observer's side effects
//! (listeners attached exactly once, one wake per batch, which
//! notification path was used).
//!
//! `SimHost` is a cheap handle: it clones by bumping a reference count and
//! all clones share one scene. Hand one clone to
//! [`Observer::new`](lookout_observer::Observer::new) and keep another to
//! keep editing the scene.
//!
//! ## Minimal example
//!
//! ```rust
//! use lookout_host_ref::SimHost;
//! use lookout_observer::{Observer, ObserverOptions, ViewEvent, ViewRect};
//!
//! let host = SimHost::new(800.0, 600.0);
//! let item = host.insert_element(ViewRect::from_origin_size(0.0, 900.0, 100.0, 100.0));
//!
//! let mut observer = Observer::new(
//!     host.clone(),
//!     |entries, _observer| println!("{} transition(s)", entries.len()),
//!     ObserverOptions::default(),
//! );
//! observer.observe(item).unwrap();
//!
//! // Scroll the item into view and let the observer see the event.
//! host.set_element_rect(item, ViewRect::from_origin_size(0.0, 200.0, 100.0, 100.0));
//! host.advance(16.0);
//! observer.handle_view_event(ViewEvent::Scroll);
//!
//! // Delivery happens on the drained wake, not during the event.
//! for wake in host.drain_wakes() {
//!     observer.wake(wake);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use lookout_observer::{ViewHost, ViewRect, WakeToken};

/// Handle to an element in a [`SimHost`] scene.
///
/// Minted by [`SimHost::insert_element`]; stays a valid value after the
/// element is removed, it just stops being live.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SimElement(u64);

/// Host-side state for one allocated change signal.
#[derive(Debug)]
pub struct SimSignal(u64);

impl SimSignal {
    /// Allocation index of this signal, in probe order.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Scene {
    viewport: ViewRect,
    clock: f64,
    next_id: u64,
    elements: Vec<(SimElement, ViewRect)>,
    scroll_attached: Vec<Option<SimElement>>,
    resize_attached: usize,
    wakes: VecDeque<WakeToken>,
    signal_offered: bool,
    signals_allocated: u64,
    signals_raised: u64,
    wakes_deferred: u64,
}

impl Scene {
    fn index_of(&self, element: SimElement) -> Option<usize> {
        self.elements.iter().position(|(key, _)| *key == element)
    }
}

/// A simulated viewport scene implementing [`ViewHost`].
///
/// By default the host offers no change signal, so observers constructed
/// over it select the deferred-timer path; call
/// [`offer_change_signal`](SimHost::offer_change_signal) *before*
/// constructing an observer to exercise the signal path instead. Both
/// paths feed the same wake FIFO: the simulation treats "signal fired"
/// and "timer fired" alike as "the run loop got around to it", which is
/// exactly when [`drain_wakes`](SimHost::drain_wakes) hands the token
/// back.
#[derive(Clone, Debug, Default)]
pub struct SimHost {
    scene: Rc<RefCell<Scene>>,
}

impl SimHost {
    /// Creates a host with a viewport of the given size at origin.
    #[must_use]
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let host = Self::default();
        host.set_viewport(viewport_width, viewport_height);
        host
    }

    /// Adds an element at `rect` and returns its handle.
    pub fn insert_element(&self, rect: ViewRect) -> SimElement {
        let mut scene = self.scene.borrow_mut();
        let element = SimElement(scene.next_id);
        scene.next_id += 1;
        scene.elements.push((element, rect));
        element
    }

    /// Moves or resizes a live element. No-op for dead handles.
    pub fn set_element_rect(&self, element: SimElement, rect: ViewRect) {
        let mut scene = self.scene.borrow_mut();
        if let Some(index) = scene.index_of(element) {
            scene.elements[index].1 = rect;
        }
    }

    /// Removes an element from the scene.
    ///
    /// Its handle goes dead: liveness checks fail and geometry queries
    /// report [`ViewRect::EMPTY`], like a detached node.
    pub fn remove_element(&self, element: SimElement) {
        let mut scene = self.scene.borrow_mut();
        if let Some(index) = scene.index_of(element) {
            scene.elements.remove(index);
        }
    }

    /// Resizes the viewport (origin stays pinned at zero).
    pub fn set_viewport(&self, width: f64, height: f64) {
        self.scene.borrow_mut().viewport = ViewRect::viewport(width, height);
    }

    /// Advances the manual clock by `millis`.
    pub fn advance(&self, millis: f64) {
        self.scene.borrow_mut().clock += millis;
    }

    /// Current value of the manual clock, in milliseconds.
    #[must_use]
    pub fn clock(&self) -> f64 {
        self.scene.borrow().clock
    }

    /// Chooses whether future capability probes are offered a change
    /// signal.
    ///
    /// Only affects observers constructed after the call; an observer's
    /// strategy is latched at construction.
    pub fn offer_change_signal(&self, offered: bool) {
        self.scene.borrow_mut().signal_offered = offered;
    }

    /// Takes every queued wake, oldest first, leaving the queue empty.
    ///
    /// The simulation's stand-in for "the run loop ran": deliver the
    /// drained tokens to the observers that scheduled them.
    #[must_use]
    pub fn drain_wakes(&self) -> Vec<WakeToken> {
        self.scene.borrow_mut().wakes.drain(..).collect()
    }

    /// Number of wakes currently queued.
    #[must_use]
    pub fn pending_wake_count(&self) -> usize {
        self.scene.borrow().wakes.len()
    }

    /// Number of scroll listeners currently attached.
    #[must_use]
    pub fn scroll_listener_count(&self) -> usize {
        self.scene.borrow().scroll_attached.len()
    }

    /// Whether a scroll listener is attached for `root` (`None`: the
    /// viewport).
    #[must_use]
    pub fn has_scroll_listener(&self, root: Option<&SimElement>) -> bool {
        self.scene
            .borrow()
            .scroll_attached
            .contains(&root.copied())
    }

    /// Number of resize listeners currently attached.
    #[must_use]
    pub fn resize_listener_count(&self) -> usize {
        self.scene.borrow().resize_attached
    }

    /// How many change signals have been allocated by capability probes.
    #[must_use]
    pub fn signals_allocated(&self) -> u64 {
        self.scene.borrow().signals_allocated
    }

    /// How many wakes were scheduled through the change-signal path.
    #[must_use]
    pub fn signals_raised(&self) -> u64 {
        self.scene.borrow().signals_raised
    }

    /// How many wakes were scheduled through the deferred-timer path.
    #[must_use]
    pub fn wakes_deferred(&self) -> u64 {
        self.scene.borrow().wakes_deferred
    }
}

impl ViewHost for SimHost {
    type Element = SimElement;
    type Signal = SimSignal;

    fn viewport_rect(&self) -> ViewRect {
        self.scene.borrow().viewport
    }

    fn element_rect(&self, target: &Self::Element) -> ViewRect {
        let scene = self.scene.borrow();
        scene
            .index_of(*target)
            .map_or(ViewRect::EMPTY, |index| scene.elements[index].1)
    }

    fn is_live(&self, target: &Self::Element) -> bool {
        self.scene.borrow().index_of(*target).is_some()
    }

    fn now(&self) -> f64 {
        self.scene.borrow().clock
    }

    fn attach_scroll_listener(&mut self, root: Option<&Self::Element>) {
        self.scene.borrow_mut().scroll_attached.push(root.copied());
    }

    fn detach_scroll_listener(&mut self, root: Option<&Self::Element>) {
        let mut scene = self.scene.borrow_mut();
        let root = root.copied();
        if let Some(index) = scene.scroll_attached.iter().position(|slot| *slot == root) {
            scene.scroll_attached.remove(index);
        }
    }

    fn attach_resize_listener(&mut self) {
        self.scene.borrow_mut().resize_attached += 1;
    }

    fn detach_resize_listener(&mut self) {
        let mut scene = self.scene.borrow_mut();
        scene.resize_attached = scene.resize_attached.saturating_sub(1);
    }

    fn new_change_signal(&mut self) -> Option<Self::Signal> {
        let mut scene = self.scene.borrow_mut();
        if !scene.signal_offered {
            return None;
        }
        let signal = SimSignal(scene.signals_allocated);
        scene.signals_allocated += 1;
        Some(signal)
    }

    fn raise_change_signal(&mut self, _signal: &mut Self::Signal, wake: WakeToken) {
        let mut scene = self.scene.borrow_mut();
        scene.signals_raised += 1;
        scene.wakes.push_back(wake);
    }

    fn defer_wake(&mut self, wake: WakeToken) {
        let mut scene = self.scene.borrow_mut();
        scene.wakes_deferred += 1;
        scene.wakes.push_back(wake);
    }
}
