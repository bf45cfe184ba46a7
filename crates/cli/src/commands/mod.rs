// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod interactive;
pub mod run;

use anyhow::{Context, Result};
use bgw_core::{JobTiming, WorkerConfig};
use bgw_engine::{BackgroundWorker, ObserverLink, ObserverLoop, TracedObserver};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::output::{ConsoleObserver, OutputFormat};

/// Worker options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct WorkerOpts {
    /// TOML file with worker settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Worker name
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Shortest simulated step, in milliseconds
    #[arg(long, global = true)]
    pub min_ms: Option<u64>,

    /// Longest simulated step (exclusive), in milliseconds
    #[arg(long, global = true)]
    pub max_ms: Option<u64>,

    /// Seed for step delays (defaults to the current time)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl WorkerOpts {
    /// Config file first, then flags on top
    pub fn resolve(&self) -> Result<WorkerConfig> {
        let mut config = match &self.config {
            Some(path) => WorkerConfig::load(path)
                .with_context(|| format!("loading worker config from {}", path.display()))?,
            None => WorkerConfig::default(),
        };

        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if self.min_ms.is_some() || self.max_ms.is_some() {
            let min = self.min_ms.map(Duration::from_millis).unwrap_or(config.timing.min);
            let max = self.max_ms.map(Duration::from_millis).unwrap_or(config.timing.max);
            config.timing = JobTiming::new(min, max).context("invalid step timing")?;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

/// A launched worker wired to a console observer
pub struct Session {
    pub worker: BackgroundWorker,
    pub link: ObserverLink<TracedObserver<ConsoleObserver>>,
    pub done: mpsc::UnboundedReceiver<()>,
}

impl Session {
    pub fn launch(opts: &WorkerOpts) -> Result<Self> {
        let config = opts.resolve()?;
        let mut worker = BackgroundWorker::with_config(config);
        worker.launch()?;

        let (done_tx, done) = mpsc::unbounded_channel();
        let observer = TracedObserver::new(worker.name(), ConsoleObserver::new(opts.format, done_tx));
        let (handle, link) = ObserverLoop::spawn(observer);
        worker.set_observer(handle);

        Ok(Self { worker, link, done })
    }

    /// Wait for the worker to stop, then for the observer to print what it was given
    pub async fn finish(mut self) {
        self.worker.join().await;
        let _ = self.link.join().await;
    }
}
