// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observer capability
//!
//! Observers are driven only by notifications the worker posted, in the
//! order it posted them. An observer that has logically gone away must
//! treat late calls as no-ops.

use crate::notification::Notification;
use crate::progress::Progress;

/// Receiver of worker notifications
pub trait Observer: Send {
    fn on_progress(&mut self, value: Progress);

    fn on_done(&mut self);

    /// Route a notification to the matching callback
    fn dispatch(&mut self, notification: Notification) {
        match notification {
            Notification::Progress { value } => self.on_progress(value),
            Notification::Done => self.on_done(),
        }
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn on_progress(&mut self, value: Progress) {
        (**self).on_progress(value)
    }

    fn on_done(&mut self) {
        (**self).on_done()
    }
}

/// Observer that records everything it receives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingObserver {
    pub received: Vec<Notification>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn done_count(&self) -> usize {
        self.received.iter().filter(|n| n.is_done()).count()
    }

    pub fn last_progress(&self) -> Option<Progress> {
        self.received.iter().rev().find_map(|n| match n {
            Notification::Progress { value } => Some(*value),
            Notification::Done => None,
        })
    }
}

impl Observer for RecordingObserver {
    fn on_progress(&mut self, value: Progress) {
        self.received.push(Notification::progress(value));
    }

    fn on_done(&mut self) {
        self.received.push(Notification::Done);
    }
}
