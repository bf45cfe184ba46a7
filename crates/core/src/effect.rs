// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects requested by the job state machine

use crate::command::{Command, CommandKind};
use crate::notification::Notification;

/// Side effects the worker runtime executes, in order, after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Post a notification to the observer, if one is installed
    Notify(Notification),
    /// Block the worker's execution context for one randomly drawn step delay
    SimulateWork,
    /// Self-post a command to the back of the worker queue
    Post(Command),
    /// Remove queued commands of the listed kinds
    Purge(Vec<CommandKind>),
}

impl Effect {
    /// Effect name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Notify(_) => "notify",
            Effect::SimulateWork => "simulate_work",
            Effect::Post(_) => "post",
            Effect::Purge(_) => "purge",
        }
    }
}
