// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bgw interactive` - Drive a worker from stdin
//!
//! Reads one control per line (`start`, `pause`, `resume`, `cancel`,
//! `status`, `quit`) and mirrors the run in a driver so only the controls
//! that make sense are accepted.

use anyhow::Result;
use bgw_core::{Driver, DriverInput, RunState};
use bgw_engine::{BackgroundWorker, ShutdownMode};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::{Session, WorkerOpts};
use crate::output::controls;

/// A parsed line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Press(DriverInput),
    /// `resume` spelled out; only valid while paused
    Resume,
    Status,
    Help,
    Quit,
}

impl Control {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "start" | "s" => Some(Control::Press(DriverInput::StartPressed)),
            "pause" | "p" => Some(Control::Press(DriverInput::PausePressed)),
            "resume" | "r" => Some(Control::Resume),
            "cancel" | "c" => Some(Control::Press(DriverInput::CancelPressed)),
            "background" | "bg" => Some(Control::Press(DriverInput::HostPaused)),
            "status" | "?" => Some(Control::Status),
            "help" | "h" => Some(Control::Help),
            "quit" | "q" | "exit" => Some(Control::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "\
start       begin a new run
pause       pause a running job, or resume a paused one
resume      resume a paused job
cancel      cancel the current run
background  simulate the host leaving the foreground
status      show the worker's state
quit        stop the worker and exit";

pub async fn interactive(opts: &WorkerOpts) -> Result<()> {
    let mut session = Session::launch(opts)?;
    let mut driver = Driver::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", controls(&driver));

    let mode = loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break ShutdownMode::Drain;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match Control::parse(&line) {
                    Some(Control::Quit) => break ShutdownMode::Drain,
                    Some(Control::Help) => println!("{}", HELP),
                    Some(Control::Status) => print_status(&session.worker, &driver),
                    Some(Control::Resume) if driver.state != RunState::Paused => {
                        println!("nothing to resume {}", controls(&driver));
                    }
                    Some(Control::Resume) => {
                        driver = press(&session.worker, driver, DriverInput::PausePressed)?;
                    }
                    Some(Control::Press(input)) => {
                        driver = press(&session.worker, driver, input)?;
                    }
                    None => println!("unknown control '{}', try 'help'", line.trim()),
                }
            }
            Some(()) = session.done.recv() => {
                let (next, _) = driver.transition(DriverInput::Done);
                driver = next;
                println!("{}", controls(&driver));
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break ShutdownMode::Immediate;
            }
        }
    };

    session.worker.shutdown(mode);
    session.finish().await;
    Ok(())
}

fn press(worker: &BackgroundWorker, driver: Driver, input: DriverInput) -> Result<Driver> {
    let (next, command) = driver.transition(input);
    match command {
        Some(command) => {
            worker.send(command)?;
            println!("{}", controls(&next));
        }
        None if next == driver => println!("not available {}", controls(&driver)),
        None => println!("{}", controls(&next)),
    }
    Ok(next)
}

fn print_status(worker: &BackgroundWorker, driver: &Driver) {
    match worker.snapshot() {
        Some(s) => println!(
            "{}: {} at {} ({} queued) {}",
            worker.name(),
            s.phase,
            s.progress,
            s.queued,
            controls(driver)
        ),
        None => println!("{}: not launched", worker.name()),
    }
}
