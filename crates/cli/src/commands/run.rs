// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bgw run` - Run one job to completion

use anyhow::{bail, Result};
use bgw_engine::ShutdownMode;
use tracing::info;

use super::{Session, WorkerOpts};

pub async fn run(opts: &WorkerOpts) -> Result<()> {
    let mut session = Session::launch(opts)?;
    session.worker.start()?;

    let interrupted = tokio::select! {
        done = session.done.recv() => done.is_none(),
        _ = tokio::signal::ctrl_c() => true,
    };

    if interrupted {
        info!("interrupted, stopping worker");
        session.worker.shutdown(ShutdownMode::Immediate);
        session.finish().await;
        bail!("interrupted before the job finished");
    }

    session.worker.shutdown(ShutdownMode::Drain);
    session.finish().await;
    Ok(())
}
