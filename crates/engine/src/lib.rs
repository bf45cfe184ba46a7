// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bgw worker runtime
//!
//! Runs the job state machine on a dedicated serial task and delivers its
//! notifications to an observer running on another.

mod error;
mod executor;
mod observer;
mod runtime;
mod traced;
mod worker;

pub use error::WorkerError;
pub use executor::ObserverSlot;
pub use observer::{ObserverHandle, ObserverLink, ObserverLoop};
pub use runtime::WorkerSnapshot;
pub use traced::TracedObserver;
pub use worker::{BackgroundWorker, ShutdownMode};
