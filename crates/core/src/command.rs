// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands accepted by the worker queue

use crate::progress::Progress;

/// A message in the worker's command queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reset progress and begin a new run
    Start,
    /// Stop scheduling steps, keeping progress
    Pause,
    /// Continue from the current progress
    Resume,
    /// Drop everything pending and report zero progress
    Cancel,
    /// Step continuation, self-posted by the worker after each unit of work.
    ///
    /// Carries the progress value the next step resumes from.
    Step { progress: Progress },
}

/// Payload-free tag of a [`Command`], used to query and purge the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Start,
    Pause,
    Resume,
    Cancel,
    Step,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Start => CommandKind::Start,
            Command::Pause => CommandKind::Pause,
            Command::Resume => CommandKind::Resume,
            Command::Cancel => CommandKind::Cancel,
            Command::Step { .. } => CommandKind::Step,
        }
    }

    /// True for commands an observer may issue; step continuations are internal
    pub fn is_external(&self) -> bool {
        !matches!(self, Command::Step { .. })
    }

    /// Stable name for logs
    pub fn label(&self) -> &'static str {
        self.kind().label()
    }
}

impl CommandKind {
    /// Everything a cancel removes from the queue
    pub const CANCELLABLE: [CommandKind; 4] = [
        CommandKind::Start,
        CommandKind::Pause,
        CommandKind::Resume,
        CommandKind::Step,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CommandKind::Start => "start",
            CommandKind::Pause => "pause",
            CommandKind::Resume => "resume",
            CommandKind::Cancel => "cancel",
            CommandKind::Step => "step",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Step { progress } => write!(f, "step({})", progress.value()),
            other => f.write_str(other.label()),
        }
    }
}
