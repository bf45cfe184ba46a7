// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Driver state machine
//!
//! The host's mirror of a run, used to decide which controls are offered.
//! It is fed by user input and by the worker's `Done` notification only;
//! it never reads worker state.

use crate::command::Command;

/// What the host believes the worker is doing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Off,
    Running,
    Paused,
}

/// Inputs that move the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverInput {
    StartPressed,
    /// Toggles between pause and resume
    PausePressed,
    CancelPressed,
    /// Host went to the background; a running job is paused
    HostPaused,
    /// Worker reported completion
    Done,
}

/// Label on the pause/resume toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseLabel {
    Pause,
    Resume,
}

impl std::fmt::Display for PauseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PauseLabel::Pause => f.write_str("pause"),
            PauseLabel::Resume => f.write_str("resume"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Driver {
    pub state: RunState,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition function - returns the new driver and the command
    /// to issue to the worker, if any.
    ///
    /// Inputs the current controls would not offer are ignored.
    pub fn transition(&self, input: DriverInput) -> (Driver, Option<Command>) {
        use DriverInput::*;
        use RunState::*;

        let (state, command) = match (self.state, input) {
            (Off, StartPressed) => (Running, Some(Command::Start)),
            (Running, PausePressed) | (Running, HostPaused) => (Paused, Some(Command::Pause)),
            (Paused, PausePressed) => (Running, Some(Command::Resume)),
            (Running | Paused, CancelPressed) => (Off, Some(Command::Cancel)),
            (_, Done) => (Off, None),
            (state, _) => (state, None),
        };
        (Driver { state }, command)
    }

    pub fn can_start(&self) -> bool {
        self.state == RunState::Off
    }

    pub fn can_pause(&self) -> bool {
        self.state != RunState::Off
    }

    pub fn can_cancel(&self) -> bool {
        self.state != RunState::Off
    }

    pub fn pause_label(&self) -> PauseLabel {
        match self.state {
            RunState::Paused => PauseLabel::Resume,
            RunState::Off | RunState::Running => PauseLabel::Pause,
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
