// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Observer: host-agnostic intersection observation primitives for UI runtimes.
//!
//! Lookout tracks when UI elements become visible, that is, when their
//! rectangle's intersection with a viewport (or a containing element)
//! transitions between empty and non-empty, and delivers those transitions
//! to a callback in asynchronous batches. It is the engine behind
//! lazy-loading-on-scroll, visibility analytics, and "start work when
//! shown" patterns, without per-frame polling: geometry is only re-read
//! when the embedding runtime reports a scroll or resize.
//!
//! The crate knows nothing about any concrete UI stack. Everything an
//! observer needs from its surroundings (element rectangles, the viewport,
//! a clock, event listeners, a way to schedule a callback) comes through
//! the [`ViewHost`] trait the embedder implements. That keeps the engine
//! deterministic and testable: drive a simulated host by hand and every
//! scan, wake, and delivery happens exactly when you say.
//!
//! ## API overview
//!
//! - [`Observer`]: the engine. Owns the host handle, the observed-target
//!   queue, and the callback.
//! - [`ViewHost`]: capability trait over the embedding runtime; [`ViewEvent`]
//!   is what hosts feed into [`Observer::handle_view_event`].
//! - [`ObservedEntry`]: one target's visibility snapshot, the value handed
//!   to callbacks and returned by [`Observer::take_records`].
//! - [`ObserverOptions`]: construction-time configuration (root handle,
//!   margin string, thresholds).
//! - [`WakeToken`] / [`NotifyStrategy`]: the asynchronous delivery plumbing.
//!   Hosts carry tokens from a scheduling call back to [`Observer::wake`];
//!   the strategy (change signal preferred, deferred timer fallback) is
//!   probed once at construction.
//! - [`ObserverTrace`] / [`TraceLog`]: optional hooks into scans, wakes, and
//!   deliveries via the `_with_trace` operation variants.
//!
//! Change detection is deliberately binary: a scan reports a target when
//! its overlap with the root crosses between empty and non-empty, nothing
//! else. Partial-coverage ratios and threshold crossings beyond that are
//! out of scope (thresholds are stored for inspection only), which keeps
//! the per-event scan a handful of comparisons per target.
//!
//! ## Delivery model
//!
//! A scan never runs a callback. Transitions found by
//! [`Observer::handle_view_event`] are parked as the observer's pending
//! batch and a wake is requested from the host; the callback runs when the
//! host calls [`Observer::wake`] on a later tick. At most one wake is
//! outstanding per observer; scans in between replace the pending batch,
//! so the callback sees the latest state rather than one batch per event.
//! [`Observer::disconnect`] cancels in-flight wakes by token generation.
//!
//! ## Minimal example
//!
//! A feed item sits below an 800×600 viewport until a scroll brings it in;
//! the callback hears about it on the following wake.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use lookout_observer::{Observer, ObserverOptions, ViewEvent, ViewHost, ViewRect, WakeToken};
//!
//! #[derive(Clone, Default)]
//! struct Feed {
//!     state: Rc<RefCell<FeedState>>,
//! }
//!
//! #[derive(Default)]
//! struct FeedState {
//!     scrolled: f64,
//!     clock: f64,
//!     wakes: Vec<WakeToken>,
//! }
//!
//! impl ViewHost for Feed {
//!     type Element = u32;
//!     type Signal = ();
//!
//!     fn viewport_rect(&self) -> ViewRect {
//!         ViewRect::viewport(800.0, 600.0)
//!     }
//!
//!     fn element_rect(&self, _item: &u32) -> ViewRect {
//!         // One item, 120 logical pixels tall, 700 from the top of the feed.
//!         ViewRect::from_origin_size(0.0, 700.0 - self.state.borrow().scrolled, 800.0, 120.0)
//!     }
//!
//!     fn now(&self) -> f64 {
//!         self.state.borrow().clock
//!     }
//!
//!     fn attach_scroll_listener(&mut self, _root: Option<&u32>) {}
//!     fn detach_scroll_listener(&mut self, _root: Option<&u32>) {}
//!     fn attach_resize_listener(&mut self) {}
//!     fn detach_resize_listener(&mut self) {}
//!
//!     fn defer_wake(&mut self, wake: WakeToken) {
//!         self.state.borrow_mut().wakes.push(wake);
//!     }
//! }
//!
//! let feed = Feed::default();
//! let handle = feed.clone();
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let mut observer = Observer::new(
//!     feed,
//!     move |entries, _observer| {
//!         sink.borrow_mut()
//!             .extend(entries.iter().map(|entry| entry.target));
//!     },
//!     ObserverOptions::default(),
//! );
//!
//! observer.observe(0).unwrap();
//!
//! // The feed scrolls; the host reports it.
//! {
//!     let mut state = handle.state.borrow_mut();
//!     state.scrolled = 250.0;
//!     state.clock = 16.0;
//! }
//! observer.handle_view_event(ViewEvent::Scroll);
//!
//! // Nothing is delivered synchronously with the event...
//! assert!(seen.borrow().is_empty());
//!
//! // ...only when the deferred wake fires.
//! let wake = handle.state.borrow_mut().wakes.pop().unwrap();
//! observer.wake(wake);
//! assert_eq!(*seen.borrow(), [0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binder;
mod entry;
mod host;
mod observer;
mod options;
mod scan;
mod schedule;
mod trace;

pub use entry::ObservedEntry;
pub use host::{ViewEvent, ViewHost, rect_of};
pub use observer::{ChangeCallback, InvalidTarget, Observer};
pub use options::ObserverOptions;
pub use schedule::{NotifyStrategy, WakeToken};
pub use trace::{ObserverTrace, TraceEvent, TraceLog};

// The geometry vocabulary, re-exported so most dependants need only this
// crate.
pub use lookout_rect::ViewRect;
