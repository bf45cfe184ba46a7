// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced observer wrapper for consistent observability

use bgw_core::{Observer, Progress};

/// Wrapper that adds tracing to any Observer
#[derive(Debug, Clone)]
pub struct TracedObserver<O> {
    name: String,
    inner: O,
}

impl<O> TracedObserver<O> {
    pub fn new(name: impl Into<String>, inner: O) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: Observer> Observer for TracedObserver<O> {
    fn on_progress(&mut self, value: Progress) {
        let span = tracing::debug_span!("observer.progress", name = %self.name);
        let _guard = span.enter();

        tracing::trace!(progress = value.value(), "delivering");
        self.inner.on_progress(value);
    }

    fn on_done(&mut self) {
        let span = tracing::info_span!("observer.done", name = %self.name);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        self.inner.on_done();
        tracing::info!(elapsed_us = start.elapsed().as_micros() as u64, "run finished");
    }
}
