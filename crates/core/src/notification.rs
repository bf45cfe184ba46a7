// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifications posted from the worker to its observer

use crate::progress::Progress;
use serde::{Deserialize, Serialize};

/// What the observer learns about a run.
///
/// `Done` is terminal: nothing follows it until the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Progress { value: Progress },
    Done,
}

impl Notification {
    pub fn progress(value: Progress) -> Self {
        Notification::Progress { value }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Notification::Progress { .. } => "progress",
            Notification::Done => "done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Notification::Done)
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::Progress { value } => write!(f, "progress {}", value),
            Notification::Done => f.write_str("done"),
        }
    }
}
