//! `bgw interactive` specs
//!
//! Controls arrive one per line on stdin; closing stdin quits.

use crate::prelude::*;

const FAST: &[&str] = &["interactive", "--min-ms", "0", "--max-ms", "1"];

#[test]
fn start_then_quit_exits_cleanly() {
    Project::empty()
        .bgw()
        .args(FAST)
        .stdin("start\nquit\n")
        .passes()
        .stdout_has("[start | quit]")
        .stdout_has("[pause | cancel | quit]");
}

#[test]
fn interactive_is_the_default_command() {
    Project::empty()
        .bgw()
        .stdin("quit\n")
        .passes()
        .stdout_has("[start | quit]");
}

#[test]
fn closing_stdin_quits() {
    Project::empty().bgw().args(FAST).stdin("").passes();
}

#[test]
fn pause_offers_resume() {
    Project::empty()
        .bgw()
        .args(&["interactive", "--min-ms", "1000", "--max-ms", "1001"])
        .stdin("start\npause\nquit\n")
        .passes()
        .stdout_has("[resume | cancel | quit]");
}

#[test]
fn unavailable_controls_are_refused() {
    Project::empty()
        .bgw()
        .args(FAST)
        .stdin("pause\ncancel\nresume\nquit\n")
        .passes()
        .stdout_has("not available [start | quit]")
        .stdout_has("nothing to resume");
}

#[test]
fn unknown_controls_are_reported() {
    Project::empty()
        .bgw()
        .args(FAST)
        .stdin("launch\nquit\n")
        .passes()
        .stdout_has("unknown control 'launch'");
}

#[test]
fn status_reports_the_worker() {
    Project::empty()
        .bgw()
        .args(FAST)
        .args(&["--name", "Loader"])
        .stdin("status\nquit\n")
        .passes()
        .stdout_has("Loader: idle");
}
