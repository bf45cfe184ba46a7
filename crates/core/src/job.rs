// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job state machine
//!
//! A job is the simulated unit of long-running work owned by a worker.
//! Each step of work ends by self-posting a step continuation, so pause and
//! cancel interleave between steps through the queue rather than through
//! flags checked inside a loop.

use crate::command::{Command, CommandKind};
use crate::effect::Effect;
use crate::notification::Notification;
use crate::progress::Progress;
use crate::queue::CommandQueue;

/// Phase of a job, derived from the commands accepted so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobPhase {
    /// Never started, or the last run reached completion
    #[default]
    Idle,
    Running,
    Paused,
    Cancelled,
}

impl JobPhase {
    pub fn name(&self) -> &'static str {
        match self {
            JobPhase::Idle => "idle",
            JobPhase::Running => "running",
            JobPhase::Paused => "paused",
            JobPhase::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for JobPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The job owned by a worker. Reset by every start, never recreated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Job {
    pub progress: Progress,
    pub phase: JobPhase,
}

impl Job {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition function - returns new state and effects.
    ///
    /// `queue` is the worker queue as it stands when `command` is dequeued;
    /// pause consults it to tell whether a step was already scheduled.
    pub fn transition(&self, command: Command, queue: &CommandQueue) -> (Job, Vec<Effect>) {
        match command {
            // Restarting mid-run is allowed and resets progress. The old
            // run's continuation is dropped so only one chain of steps exists.
            Command::Start => {
                let job = Job {
                    progress: Progress::ZERO,
                    phase: JobPhase::Running,
                };
                let (job, mut effects) = job.report_and_advance();
                if queue.contains(CommandKind::Step) {
                    effects.insert(0, Effect::Purge(vec![CommandKind::Step]));
                }
                (job, effects)
            }

            Command::Step { .. } | Command::Resume => {
                let job = Job {
                    phase: JobPhase::Running,
                    ..*self
                };
                job.report_and_advance()
            }

            Command::Pause => {
                // A queued step already had its delay and increment applied;
                // roll the increment back since that step will not run.
                let progress = if queue.contains(CommandKind::Step) {
                    self.progress.decrement()
                } else {
                    self.progress
                };
                let job = Job {
                    progress,
                    phase: JobPhase::Paused,
                };
                (job, vec![Effect::Purge(vec![CommandKind::Step])])
            }

            Command::Cancel => {
                let job = Job {
                    progress: Progress::ZERO,
                    phase: JobPhase::Cancelled,
                };
                let effects = vec![
                    Effect::Purge(CommandKind::CANCELLABLE.to_vec()),
                    Effect::Notify(Notification::progress(Progress::ZERO)),
                ];
                (job, effects)
            }
        }
    }

    /// Shared by start, step and resume: report where we are, then advance
    fn report_and_advance(self) -> (Job, Vec<Effect>) {
        let mut effects = vec![Effect::Notify(Notification::progress(self.progress))];
        let job = self.advance(&mut effects);
        (job, effects)
    }

    /// Finish the run, or do one more step of work and schedule the next
    fn advance(self, effects: &mut Vec<Effect>) -> Job {
        if self.progress.is_complete() {
            effects.push(Effect::Notify(Notification::Done));
            return Job {
                phase: JobPhase::Idle,
                ..self
            };
        }

        let progress = self.progress.increment();
        effects.push(Effect::SimulateWork);
        effects.push(Effect::Post(Command::Step { progress }));
        Job { progress, ..self }
    }

    pub fn is_running(&self) -> bool {
        self.phase == JobPhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == JobPhase::Paused
    }

    pub fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
