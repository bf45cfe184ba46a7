// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the worker handle

use thiserror::Error;

/// Errors returned when issuing commands or launching a worker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    #[error("worker {0} is not ready: launch it before issuing commands")]
    NotReady(String),
    #[error("worker {0} has shut down")]
    ShutDown(String),
    #[error("worker {0} is already launched")]
    AlreadyLaunched(String),
    #[error("no tokio runtime available to launch worker {0}")]
    NoRuntime(String),
}
