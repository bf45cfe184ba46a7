use super::*;
use yare::parameterized;

fn driver_in(state: RunState) -> Driver {
    Driver { state }
}

#[parameterized(
    start_from_off = { RunState::Off, DriverInput::StartPressed, RunState::Running, Some(Command::Start) },
    pause_while_running = { RunState::Running, DriverInput::PausePressed, RunState::Paused, Some(Command::Pause) },
    resume_while_paused = { RunState::Paused, DriverInput::PausePressed, RunState::Running, Some(Command::Resume) },
    cancel_while_running = { RunState::Running, DriverInput::CancelPressed, RunState::Off, Some(Command::Cancel) },
    cancel_while_paused = { RunState::Paused, DriverInput::CancelPressed, RunState::Off, Some(Command::Cancel) },
    host_paused_while_running = { RunState::Running, DriverInput::HostPaused, RunState::Paused, Some(Command::Pause) },
    host_paused_while_paused = { RunState::Paused, DriverInput::HostPaused, RunState::Paused, None },
    host_paused_while_off = { RunState::Off, DriverInput::HostPaused, RunState::Off, None },
    done_while_running = { RunState::Running, DriverInput::Done, RunState::Off, None },
    done_while_paused = { RunState::Paused, DriverInput::Done, RunState::Off, None },
    start_while_running_ignored = { RunState::Running, DriverInput::StartPressed, RunState::Running, None },
    pause_while_off_ignored = { RunState::Off, DriverInput::PausePressed, RunState::Off, None },
    cancel_while_off_ignored = { RunState::Off, DriverInput::CancelPressed, RunState::Off, None },
)]
fn driver_transitions(from: RunState, input: DriverInput, to: RunState, command: Option<Command>) {
    let (driver, issued) = driver_in(from).transition(input);
    assert_eq!(driver.state, to);
    assert_eq!(issued, command);
}

#[test]
fn controls_when_off() {
    let driver = Driver::new();
    assert!(driver.can_start());
    assert!(!driver.can_pause());
    assert!(!driver.can_cancel());
    assert_eq!(driver.pause_label(), PauseLabel::Pause);
}

#[test]
fn controls_when_running() {
    let driver = driver_in(RunState::Running);
    assert!(!driver.can_start());
    assert!(driver.can_pause());
    assert!(driver.can_cancel());
    assert_eq!(driver.pause_label(), PauseLabel::Pause);
}

#[test]
fn controls_when_paused() {
    let driver = driver_in(RunState::Paused);
    assert!(!driver.can_start());
    assert!(driver.can_pause());
    assert!(driver.can_cancel());
    assert_eq!(driver.pause_label(), PauseLabel::Resume);
}

#[test]
fn full_session_issues_expected_commands() {
    let inputs = [
        DriverInput::StartPressed,
        DriverInput::PausePressed,
        DriverInput::PausePressed,
        DriverInput::HostPaused,
        DriverInput::PausePressed,
        DriverInput::Done,
        DriverInput::StartPressed,
        DriverInput::CancelPressed,
    ];

    let mut driver = Driver::new();
    let mut issued = Vec::new();
    for input in inputs {
        let (next, command) = driver.transition(input);
        driver = next;
        issued.extend(command);
    }

    assert_eq!(
        issued,
        vec![
            Command::Start,
            Command::Pause,
            Command::Resume,
            Command::Pause,
            Command::Resume,
            Command::Start,
            Command::Cancel,
        ]
    );
    assert_eq!(driver.state, RunState::Off);
}
