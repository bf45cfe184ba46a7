// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor
//!
//! Carries out the effects that reach outside the worker queue: posting
//! notifications and blocking for simulated work.

use crate::observer::ObserverHandle;
use bgw_core::{DelaySource, Notification};
use std::sync::{Arc, RwLock};
use tokio::sync::watch;

/// The worker's notification target.
///
/// Shared between the worker handle and its execution context so that
/// shutdown can clear it before the context stops.
#[derive(Debug, Clone, Default)]
pub struct ObserverSlot {
    inner: Arc<RwLock<Option<ObserverHandle>>>,
}

impl ObserverSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, handle: ObserverHandle) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = Some(handle);
    }

    pub fn clear(&self) -> Option<ObserverHandle> {
        self.inner.write().unwrap_or_else(|e| e.into_inner()).take()
    }

    pub fn is_set(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Post if a target is installed. Returns false if the notification was dropped.
    pub fn post(&self, notification: Notification) -> bool {
        match self.inner.read().unwrap_or_else(|e| e.into_inner()).as_ref() {
            Some(handle) => handle.post(notification),
            None => false,
        }
    }
}

/// Resolves once an immediate stop has been requested.
///
/// Never resolves if the requesting side went away without asking.
pub(crate) async fn stop_requested(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Outcome of a simulated step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WorkOutcome {
    Completed,
    Interrupted,
}

/// Executes notification and work effects for one worker
pub(crate) struct Executor {
    observer: ObserverSlot,
    delays: DelaySource,
    stop: watch::Receiver<bool>,
}

impl Executor {
    pub(crate) fn new(observer: ObserverSlot, delays: DelaySource, stop: watch::Receiver<bool>) -> Self {
        Self {
            observer,
            delays,
            stop,
        }
    }

    pub(crate) fn notify(&self, notification: Notification) {
        if !self.observer.post(notification) {
            tracing::debug!(
                notification = %notification,
                "no observer attached, dropping notification"
            );
        }
    }

    /// Block this execution context for one drawn delay.
    ///
    /// An immediate stop cuts the delay short.
    pub(crate) async fn simulate_work(&mut self) -> WorkOutcome {
        let delay = self.delays.next_delay();
        tracing::trace!(delay_us = delay.as_micros() as u64, "simulating work");

        tokio::select! {
            _ = tokio::time::sleep(delay) => WorkOutcome::Completed,
            _ = stop_requested(&mut self.stop) => {
                tracing::debug!(delay_us = delay.as_micros() as u64, "simulated work interrupted");
                WorkOutcome::Interrupted
            }
        }
    }

    pub(crate) fn stop_signal(&mut self) -> &mut watch::Receiver<bool> {
        &mut self.stop
    }

    pub(crate) fn is_stop_requested(&self) -> bool {
        *self.stop.borrow()
    }
}
