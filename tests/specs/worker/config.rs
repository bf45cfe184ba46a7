//! Worker config file specs

use crate::prelude::*;

#[test]
fn config_file_sets_timing() {
    let project = Project::empty();
    let path = project.file(
        "bgw.toml",
        "name = \"Loader\"\nseed = 3\n\n[timing]\nmin = \"0ms\"\nmax = \"1ms\"\n",
    );

    project
        .bgw()
        .args(&["run", "--config", path.to_str().unwrap()])
        .passes()
        .stdout_has("progress 100%")
        .stdout_has("done");
}

#[test]
fn missing_config_file_fails() {
    Project::empty()
        .bgw()
        .args(&["run", "--config", "nope.toml"])
        .fails()
        .stderr_has("loading worker config");
}

#[test]
fn malformed_config_file_fails() {
    let project = Project::empty();
    let path = project.file("bgw.toml", "[timing\nmin = 3");

    project
        .bgw()
        .args(&["run", "--config", path.to_str().unwrap()])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn inverted_timing_in_config_file_fails() {
    let project = Project::empty();
    let path = project.file("bgw.toml", "[timing]\nmin = \"9ms\"\nmax = \"1ms\"\n");

    project
        .bgw()
        .args(&["run", "--config", path.to_str().unwrap()])
        .fails()
        .stderr_has("invalid job timing");
}
