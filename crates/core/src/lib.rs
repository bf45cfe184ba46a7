// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bgw-core: Core library for the bgw background worker
//!
//! This crate provides:
//! - The job state machine and the commands/notifications it speaks
//! - The worker's command queue and delay source
//! - The observer capability and the host-side driver state machine
//! - Worker configuration

pub mod config;
pub mod delay;
pub mod progress;

// State machines (order matters for dependencies)
pub mod command;
pub mod notification;
pub mod queue;
pub mod effect;
pub mod job;
pub mod driver;
pub mod observer;

// Re-exports
pub use command::{Command, CommandKind};
pub use config::{ConfigError, JobTiming, WorkerConfig};
pub use delay::DelaySource;
pub use driver::{Driver, DriverInput, PauseLabel, RunState};
pub use effect::Effect;
pub use job::{Job, JobPhase};
pub use notification::Notification;
pub use observer::{Observer, RecordingObserver};
pub use progress::Progress;
pub use queue::CommandQueue;
