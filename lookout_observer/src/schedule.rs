// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification scheduling: wake tokens and the strategy that carries them.
//!
//! Delivery is never synchronous with a scan. A scan that detects
//! transitions parks them as the observer's pending batch and asks the host
//! to call back "soon" with a [`WakeToken`]; the actual callback runs from
//! [`Observer::wake`](crate::Observer::wake). The token is how stale
//! callbacks are told apart from live ones: each carries the observer
//! generation it was issued under, and [`disconnect`](crate::Observer::disconnect)
//! advances the generation so that wakes already in flight land harmlessly.

use crate::host::ViewHost;

/// Token identifying one requested wake.
///
/// Opaque to hosts: they only carry it from the scheduling call back to
/// [`Observer::wake`](crate::Observer::wake). A token is `Copy` and remains
/// valid to deliver at any later time; delivery of an outdated token is a
/// silent no-op, not an error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WakeToken {
    generation: u64,
}

impl WakeToken {
    pub(crate) const fn new(generation: u64) -> Self {
        Self { generation }
    }

    pub(crate) const fn generation(self) -> u64 {
        self.generation
    }
}

/// How an observer asks its host for a deferred callback.
///
/// Selected once, at observer construction, by probing
/// [`ViewHost::new_change_signal`]: a host that offers a change signal gets
/// [`NotifyStrategy::ChangeSignal`] (and owns the allocated signal for the
/// observer's whole life), any other host gets
/// [`NotifyStrategy::DeferredTimer`]. The choice is never revisited.
#[derive(Debug)]
pub enum NotifyStrategy<S> {
    /// Wakes ride the host's change signal.
    ChangeSignal(S),
    /// Wakes go through [`ViewHost::defer_wake`].
    DeferredTimer,
}

impl<S> NotifyStrategy<S> {
    /// Probes `host` for a change signal and picks the strategy.
    pub(crate) fn probe<H>(host: &mut H) -> Self
    where
        H: ViewHost<Signal = S>,
    {
        match host.new_change_signal() {
            Some(signal) => Self::ChangeSignal(signal),
            None => Self::DeferredTimer,
        }
    }

    /// Routes one wake request through whichever path was selected.
    pub(crate) fn request<H>(&mut self, host: &mut H, wake: WakeToken)
    where
        H: ViewHost<Signal = S>,
    {
        match self {
            Self::ChangeSignal(signal) => host.raise_change_signal(signal, wake),
            Self::DeferredTimer => host.defer_wake(wake),
        }
    }

    /// Whether the change-signal path was selected.
    #[must_use]
    pub fn is_change_signal(&self) -> bool {
        matches!(self, Self::ChangeSignal(_))
    }
}
