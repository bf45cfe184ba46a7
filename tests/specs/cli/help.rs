//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    Project::empty()
        .bgw()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("interactive");
}

#[test]
fn help_lists_timing_flags() {
    Project::empty()
        .bgw()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--min-ms")
        .stdout_has("--max-ms")
        .stdout_has("--seed");
}

#[test]
fn version_is_reported() {
    Project::empty()
        .bgw()
        .args(&["--version"])
        .passes()
        .stdout_has("bgw");
}
