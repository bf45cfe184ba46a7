// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Background worker handle
//!
//! The host-facing side of a worker. Every command is asynchronous: it is
//! queued for the worker's execution context and the call returns at once.

use crate::error::WorkerError;
use crate::executor::{Executor, ObserverSlot};
use crate::observer::ObserverHandle;
use crate::runtime::{Inbound, WorkerLoop, WorkerSnapshot};
use bgw_core::{Command, DelaySource, WorkerConfig};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::Instrument;

/// How [`BackgroundWorker::shutdown`] treats queued commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownMode {
    /// Discard the queue and cut any in-flight step short
    Immediate,
    /// Let already-queued commands run; reject everything after
    Drain,
}

enum HandleState {
    Created,
    Running {
        inbox: mpsc::UnboundedSender<Inbound>,
        stop: watch::Sender<bool>,
        snapshot: watch::Receiver<WorkerSnapshot>,
        task: JoinHandle<()>,
    },
    Stopped {
        // Held so a drain is not mistaken for a dropped handle
        _stop: watch::Sender<bool>,
        snapshot: watch::Receiver<WorkerSnapshot>,
        task: Option<JoinHandle<()>>,
    },
}

/// A worker running one job at a time on its own serial execution context
pub struct BackgroundWorker {
    config: WorkerConfig,
    observer: ObserverSlot,
    state: HandleState,
}

impl BackgroundWorker {
    /// Create a worker with default timing. Not ready until [`launch`](Self::launch).
    pub fn create(name: impl Into<String>) -> Self {
        Self::with_config(WorkerConfig::new(name))
    }

    pub fn with_config(config: WorkerConfig) -> Self {
        Self {
            config,
            observer: ObserverSlot::new(),
            state: HandleState::Created,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Spawn the execution context on the current tokio runtime
    pub fn launch(&mut self) -> Result<(), WorkerError> {
        if !matches!(self.state, HandleState::Created) {
            return Err(WorkerError::AlreadyLaunched(self.config.name.clone()));
        }
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|_| WorkerError::NoRuntime(self.config.name.clone()))?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(false);
        let (snapshot_tx, snapshot_rx) = watch::channel(WorkerSnapshot::default());

        let delays = DelaySource::from_seed(self.config.timing, self.config.seed);
        tracing::info!(
            name = %self.config.name,
            seed = delays.seed(),
            min_ms = u64::try_from(self.config.timing.min.as_millis()).unwrap_or(u64::MAX),
            max_ms = u64::try_from(self.config.timing.max.as_millis()).unwrap_or(u64::MAX),
            "launching worker"
        );

        let executor = Executor::new(self.observer.clone(), delays, stop_rx);
        let worker_loop = WorkerLoop::new(inbox_rx, executor, snapshot_tx);
        let span = tracing::info_span!("worker", name = %self.config.name);
        let task = runtime.spawn(worker_loop.run().instrument(span));

        self.state = HandleState::Running {
            inbox: inbox_tx,
            stop: stop_tx,
            snapshot: snapshot_rx,
            task,
        };
        Ok(())
    }

    /// True once launched and until shut down
    pub fn is_ready(&self) -> bool {
        matches!(self.state, HandleState::Running { .. })
    }

    /// Install the notification target. Without one, notifications are dropped.
    pub fn set_observer(&self, handle: ObserverHandle) {
        self.observer.set(handle);
    }

    /// Remove the notification target
    pub fn clear_observer(&self) -> Option<ObserverHandle> {
        self.observer.clear()
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_set()
    }

    /// Begin a run from zero. Restarts if a run is in progress.
    pub fn start(&self) -> Result<(), WorkerError> {
        self.send(Command::Start)
    }

    pub fn pause(&self) -> Result<(), WorkerError> {
        self.send(Command::Pause)
    }

    pub fn resume(&self) -> Result<(), WorkerError> {
        self.send(Command::Resume)
    }

    pub fn cancel(&self) -> Result<(), WorkerError> {
        self.send(Command::Cancel)
    }

    /// Queue any externally issuable command
    pub fn send(&self, command: Command) -> Result<(), WorkerError> {
        debug_assert!(command.is_external(), "step continuations are internal");
        match &self.state {
            HandleState::Created => Err(WorkerError::NotReady(self.config.name.clone())),
            HandleState::Stopped { .. } => Err(WorkerError::ShutDown(self.config.name.clone())),
            HandleState::Running { inbox, .. } => {
                tracing::debug!(worker = %self.config.name, command = %command, "queueing");
                inbox
                    .send(Inbound::Command(command))
                    .map_err(|_| WorkerError::ShutDown(self.config.name.clone()))
            }
        }
    }

    /// Stop the worker.
    ///
    /// The observer is cleared first, so nothing is posted to it once this
    /// returns. Returns false if the worker was not running.
    pub fn shutdown(&mut self, mode: ShutdownMode) -> bool {
        let state = std::mem::replace(&mut self.state, HandleState::Created);
        let HandleState::Running {
            inbox,
            stop,
            snapshot,
            task,
        } = state
        else {
            self.state = state;
            return false;
        };

        self.observer.clear();
        tracing::info!(worker = %self.config.name, ?mode, "shutting down");

        match mode {
            ShutdownMode::Immediate => {
                let _ = stop.send(true);
            }
            ShutdownMode::Drain => {
                let _ = inbox.send(Inbound::Quit);
            }
        }
        drop(inbox);

        self.state = HandleState::Stopped {
            _stop: stop,
            snapshot,
            task: Some(task),
        };
        true
    }

    /// Wait for the execution context to exit after [`shutdown`](Self::shutdown)
    pub async fn join(&mut self) {
        let task = match &mut self.state {
            HandleState::Stopped { task, .. } => task.take(),
            HandleState::Created | HandleState::Running { .. } => None,
        };
        if let Some(task) = task {
            if let Err(e) = task.await {
                tracing::error!(worker = %self.config.name, error = %e, "worker task failed");
            }
        }
    }

    /// Latest state published by the execution context
    pub fn snapshot(&self) -> Option<WorkerSnapshot> {
        self.watch().map(|rx| *rx.borrow())
    }

    /// Subscribe to snapshot updates
    pub fn watch(&self) -> Option<watch::Receiver<WorkerSnapshot>> {
        match &self.state {
            HandleState::Created => None,
            HandleState::Running { snapshot, .. } | HandleState::Stopped { snapshot, .. } => {
                Some(snapshot.clone())
            }
        }
    }
}

impl Drop for BackgroundWorker {
    fn drop(&mut self) {
        if self.is_ready() {
            self.shutdown(ShutdownMode::Immediate);
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
