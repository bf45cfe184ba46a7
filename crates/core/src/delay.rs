// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Seedable source of simulated step delays

use crate::config::JobTiming;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Draws per-step delays uniformly from `[min, max)`
#[derive(Debug, Clone)]
pub struct DelaySource {
    timing: JobTiming,
    seed: u64,
    rng: StdRng,
}

impl DelaySource {
    pub fn new(timing: JobTiming, seed: u64) -> Self {
        Self {
            timing,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the current wall-clock time
    pub fn from_time(timing: JobTiming) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        Self::new(timing, seed)
    }

    /// Fixed seed when given, wall clock otherwise
    pub fn from_seed(timing: JobTiming, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(timing, seed),
            None => Self::from_time(timing),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn timing(&self) -> JobTiming {
        self.timing
    }

    /// Next delay. An empty range (`min == max`) always yields `min`.
    pub fn next_delay(&mut self) -> Duration {
        let min = micros(self.timing.min);
        let max = micros(self.timing.max);
        if max <= min {
            return self.timing.min;
        }
        Duration::from_micros(self.rng.gen_range(min..max))
    }
}

/// Whole microseconds, saturating at `u64::MAX`
fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}
