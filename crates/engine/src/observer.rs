// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observer execution context
//!
//! An observer runs on its own task and receives notifications FIFO through
//! an [`ObserverHandle`]. The owner invalidates it explicitly with
//! [`ObserverLink::detach`]; deliveries after that are dropped.

use bgw_core::{Notification, Observer};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Sending side of an observer's queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ObserverHandle {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ObserverHandle {
    /// A handle plus the receiving end, for hosts that run their own loop
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue a notification. Returns false if the observer loop is gone.
    pub fn post(&self, notification: Notification) -> bool {
        self.tx.send(notification).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Owner's side of a spawned observer loop
pub struct ObserverLink<O> {
    target: Arc<Mutex<Option<O>>>,
    task: JoinHandle<()>,
}

impl<O> ObserverLink<O> {
    /// Invalidate the observer. Notifications already in flight are dropped.
    ///
    /// Returns the observer if it was still attached.
    pub fn detach(&self) -> Option<O> {
        self.target.lock().unwrap_or_else(|e| e.into_inner()).take()
    }

    pub fn is_attached(&self) -> bool {
        self.target
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Run `f` against the attached observer, if any
    pub fn with<R>(&self, f: impl FnOnce(&mut O) -> R) -> Option<R> {
        let mut target = self.target.lock().unwrap_or_else(|e| e.into_inner());
        target.as_mut().map(f)
    }

    /// Wait for the loop to end (every handle dropped) and take the observer back
    pub async fn join(self) -> Option<O> {
        let ObserverLink { target, task } = self;
        if let Err(e) = task.await {
            tracing::error!(error = %e, "observer loop failed");
        }
        let observer = target.lock().unwrap_or_else(|e| e.into_inner()).take();
        observer
    }
}

/// Spawns observers onto their own serial task
pub struct ObserverLoop;

impl ObserverLoop {
    /// Start delivering notifications to `observer` on the current runtime.
    ///
    /// The loop ends once every [`ObserverHandle`] has been dropped.
    pub fn spawn<O>(observer: O) -> (ObserverHandle, ObserverLink<O>)
    where
        O: Observer + 'static,
    {
        let (handle, mut rx) = ObserverHandle::channel();
        let target = Arc::new(Mutex::new(Some(observer)));
        let loop_target = Arc::clone(&target);

        let task = tokio::spawn(async move {
            while let Some(notification) = rx.recv().await {
                let mut target = loop_target.lock().unwrap_or_else(|e| e.into_inner());
                match target.as_mut() {
                    Some(observer) => observer.dispatch(notification),
                    None => tracing::debug!(
                        notification = notification.name(),
                        "observer detached, dropping notification"
                    ),
                }
            }
            tracing::debug!("observer loop finished");
        });

        (handle, ObserverLink { target, task })
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;
