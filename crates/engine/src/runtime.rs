// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker execution context
//!
//! A single task that owns the job, its command queue and its delay source.
//! Commands arrive over a channel and are moved into the local queue before
//! each dispatch and before every self-post, so a command sent while a step
//! is in flight lands ahead of that step's continuation.

use crate::executor::{stop_requested, Executor, WorkOutcome};
use bgw_core::{Command, CommandQueue, Effect, Job, JobPhase, Progress};
use tokio::sync::{mpsc, watch};

/// Message on the worker's inbound channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inbound {
    Command(Command),
    /// Drain marker: everything sent before it still runs, nothing after is accepted
    Quit,
}

/// Point-in-time view of a worker, for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerSnapshot {
    pub progress: Progress,
    pub phase: JobPhase,
    /// Commands waiting in the local queue
    pub queued: usize,
    /// Commands processed since launch
    pub processed: u64,
    /// The execution context has exited
    pub stopped: bool,
}

pub(crate) struct WorkerLoop {
    job: Job,
    queue: CommandQueue,
    inbox: mpsc::UnboundedReceiver<Inbound>,
    /// Cleared by the drain marker or a closed channel
    accepting: bool,
    processed: u64,
    executor: Executor,
    snapshot: watch::Sender<WorkerSnapshot>,
}

impl WorkerLoop {
    pub(crate) fn new(
        inbox: mpsc::UnboundedReceiver<Inbound>,
        executor: Executor,
        snapshot: watch::Sender<WorkerSnapshot>,
    ) -> Self {
        Self {
            job: Job::new(),
            queue: CommandQueue::new(),
            inbox,
            accepting: true,
            processed: 0,
            executor,
            snapshot,
        }
    }

    /// Runs until stopped; the caller instruments it with the worker span
    pub(crate) async fn run(mut self) {
        tracing::info!("worker ready");

        loop {
            if self.executor.is_stop_requested() {
                tracing::info!(discarded = self.queue.len(), "stopping immediately");
                self.queue.clear();
                break;
            }

            self.pull_inbox();

            let Some(command) = self.queue.pop() else {
                if !self.accepting {
                    tracing::info!("queue drained");
                    break;
                }
                self.wait_for_inbound().await;
                continue;
            };

            if self.dispatch(command).await == WorkOutcome::Interrupted {
                self.queue.clear();
                break;
            }
        }

        self.publish(true);
        tracing::info!(progress = self.job.progress.value(), "worker stopped");
    }

    /// Process one command to completion
    async fn dispatch(&mut self, command: Command) -> WorkOutcome {
        let (job, effects) = self.job.transition(command, &self.queue);
        tracing::debug!(
            command = %command,
            from = self.job.progress.value(),
            to = job.progress.value(),
            phase = %job.phase,
            "dispatch"
        );
        self.job = job;
        self.processed += 1;

        for effect in effects {
            match effect {
                Effect::Notify(notification) => self.executor.notify(notification),
                Effect::SimulateWork => {
                    if self.executor.simulate_work().await == WorkOutcome::Interrupted {
                        return WorkOutcome::Interrupted;
                    }
                }
                Effect::Post(command) => {
                    self.pull_inbox();
                    self.enqueue(command);
                }
                Effect::Purge(kinds) => {
                    let removed = self.queue.purge(&kinds);
                    if removed > 0 {
                        tracing::debug!(removed, "purged queued commands");
                    }
                }
            }
        }

        self.publish(false);
        WorkOutcome::Completed
    }

    /// Move everything already sent into the local queue
    fn pull_inbox(&mut self) {
        loop {
            match self.inbox.try_recv() {
                Ok(message) => self.accept(message),
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    self.accepting = false;
                    break;
                }
            }
        }
    }

    async fn wait_for_inbound(&mut self) {
        let message = tokio::select! {
            _ = stop_requested(self.executor.stop_signal()) => return,
            message = self.inbox.recv() => message,
        };
        match message {
            Some(message) => self.accept(message),
            None => self.accepting = false,
        }
    }

    fn accept(&mut self, message: Inbound) {
        match message {
            Inbound::Command(command) => self.enqueue(command),
            Inbound::Quit => {
                tracing::debug!(pending = self.queue.len(), "drain requested");
                self.accepting = false;
            }
        }
    }

    fn enqueue(&mut self, command: Command) {
        if self.accepting {
            self.queue.push(command);
        } else {
            tracing::debug!(command = %command, "rejected after shutdown");
        }
    }

    fn publish(&self, stopped: bool) {
        self.snapshot.send_replace(WorkerSnapshot {
            progress: self.job.progress,
            phase: self.job.phase,
            queued: self.queue.len(),
            processed: self.processed,
            stopped,
        });
    }
}
