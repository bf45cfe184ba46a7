// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded job progress

use serde::{Deserialize, Serialize};

/// Job progress, always within `0..=100`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// Upper bound of a job; reaching it finishes the run
    pub const MAX: u8 = 100;

    pub const ZERO: Progress = Progress(0);
    pub const COMPLETE: Progress = Progress(Self::MAX);

    /// Returns `None` if `value` is above [`Progress::MAX`]
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Progress(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 >= Self::MAX
    }

    /// One step forward, saturating at [`Progress::COMPLETE`]
    pub fn increment(self) -> Self {
        Progress((self.0 + 1).min(Self::MAX))
    }

    /// One step back, saturating at zero
    pub fn decrement(self) -> Self {
        Progress(self.0.saturating_sub(1))
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

/// Error for values outside `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("progress out of range: {0}")]
pub struct OutOfRange(pub u8);

impl TryFrom<u8> for Progress {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Progress::new(value).ok_or(OutOfRange(value))
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
