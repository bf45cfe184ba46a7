// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use bgw_core::{Driver, Notification, Observer, Progress};
use clap::ValueEnum;
use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string(value) {
                println!("{}", json);
            }
        }
    }
}

/// One-line summary of the controls the driver currently offers
pub fn controls(driver: &Driver) -> String {
    let mut offered = Vec::new();
    if driver.can_start() {
        offered.push("start".to_string());
    }
    if driver.can_pause() {
        offered.push(driver.pause_label().to_string());
    }
    if driver.can_cancel() {
        offered.push("cancel".to_string());
    }
    offered.push("quit".to_string());
    format!("[{}]", offered.join(" | "))
}

/// Observer that prints every notification and forwards completion to the host loop
pub struct ConsoleObserver {
    format: OutputFormat,
    done: mpsc::UnboundedSender<()>,
}

impl ConsoleObserver {
    pub fn new(format: OutputFormat, done: mpsc::UnboundedSender<()>) -> Self {
        Self { format, done }
    }
}

impl Observer for ConsoleObserver {
    fn on_progress(&mut self, value: Progress) {
        print(&Notification::progress(value), self.format);
    }

    fn on_done(&mut self) {
        print(&Notification::Done, self.format);
        // The host may already be gone; a late done is a no-op
        let _ = self.done.send(());
    }
}
