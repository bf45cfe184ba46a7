// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The worker's local FIFO of pending commands
//!
//! Pause and cancel work by inspecting and purging this queue rather than
//! by checking flags, so queued commands stay visible until they run.

use crate::command::{Command, CommandKind};
use std::collections::VecDeque;

/// Ordered commands waiting to be processed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandQueue {
    items: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the back
    pub fn push(&mut self, command: Command) {
        self.items.push_back(command);
    }

    /// Take the oldest command
    pub fn pop(&mut self) -> Option<Command> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&Command> {
        self.items.front()
    }

    /// Whether any queued command has the given kind
    pub fn contains(&self, kind: CommandKind) -> bool {
        self.items.iter().any(|c| c.kind() == kind)
    }

    /// Remove every command whose kind is listed, keeping the order of the rest.
    ///
    /// Returns how many commands were removed.
    pub fn purge(&mut self, kinds: &[CommandKind]) -> usize {
        let before = self.items.len();
        self.items.retain(|c| !kinds.contains(&c.kind()));
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Kinds of the queued commands, front to back
    pub fn kinds(&self) -> impl Iterator<Item = CommandKind> + '_ {
        self.items.iter().map(Command::kind)
    }
}

impl FromIterator<Command> for CommandQueue {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
