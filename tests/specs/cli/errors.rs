//! CLI error specs

use crate::prelude::*;

#[test]
fn unknown_subcommand_fails() {
    Project::empty()
        .bgw()
        .args(&["launch"])
        .fails()
        .stderr_has("launch");
}

#[test]
fn inverted_timing_is_rejected() {
    Project::empty()
        .bgw()
        .args(&["run", "--min-ms", "50", "--max-ms", "10"])
        .fails()
        .stderr_has("invalid step timing");
}

#[test]
fn unknown_format_is_rejected() {
    Project::empty()
        .bgw()
        .args(&["run", "--format", "yaml"])
        .fails()
        .stderr_has("yaml");
}
