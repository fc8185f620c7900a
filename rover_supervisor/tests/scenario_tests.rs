//! Scenario tests for the rover supervisor.
//!
//! These exercise multiple modules together: scenario configuration,
//! the transition function, and the diagnostics renderers, driven the
//! way the console harness drives them — display, patch, evaluate.

use rover_common::conditions::Conditions;
use rover_common::config::ScenarioConfig;
use rover_common::state::SupervisorState::*;
use rover_supervisor::diagnostics::{describe, fault_report};
use rover_supervisor::fsm::{Supervisor, next_state};

/// The reference commissioning demo: e-stop pulse, an autonomous
/// window with trajectory tracking, then a joystick window with a
/// power dip in the middle.
const DEMO_SCENARIO: &str = r#"
    cycles = 20

    [[step]]
    at = 3
    emergency_stop_active = true

    [[step]]
    at = 6
    emergency_stop_active = false

    [[step]]
    at = 10
    autonomous_allowed = true
    trajectory_tracking = true

    [[step]]
    at = 13
    autonomous_allowed = false
    trajectory_tracking = false

    [[step]]
    at = 15
    joystick_allowed = true

    [[step]]
    at = 16
    power_ok = false

    [[step]]
    at = 17
    power_ok = true

    [[step]]
    at = 19
    joystick_allowed = false
"#;

/// Run a scenario the way the console does: record the state visible at
/// the start of each cycle, apply due patches, then evaluate.
fn replay(config: &ScenarioConfig) -> Vec<rover_common::state::SupervisorState> {
    let mut supervisor = Supervisor::new();
    let mut conditions = config.initial;
    let mut observed = Vec::with_capacity(config.cycles);

    for cycle in 0..config.cycles {
        observed.push(supervisor.state());
        for step in config.steps.iter().filter(|s| s.at == cycle) {
            step.patch.apply(&mut conditions);
        }
        supervisor.step(&conditions);
    }
    observed
}

#[test]
fn demo_scenario_state_sequence() {
    let config: ScenarioConfig = toml::from_str(DEMO_SCENARIO).unwrap();
    config.validate().unwrap();

    let observed = replay(&config);
    assert_eq!(
        observed,
        [
            Init, Wait, Wait, Wait, // e-stop pressed at 3
            Safe, Safe, Safe, // released at 6
            Wait, Wait, Wait, Wait, // autonomous armed at 10
            Autonomous, Autonomous, Autonomous, // disarmed at 13
            Wait, Wait, // joystick armed at 15
            Joystick, // power dip at 16
            Safe, // power back at 17, re-arm via Wait
            Wait, Joystick,
        ]
    );
}

#[test]
fn demo_scenario_autonomous_label_names_trajectory_tracking() {
    let config: ScenarioConfig = toml::from_str(DEMO_SCENARIO).unwrap();
    let mut supervisor = Supervisor::new();
    let mut conditions = config.initial;

    for cycle in 0..config.cycles {
        for step in config.steps.iter().filter(|s| s.at == cycle) {
            step.patch.apply(&mut conditions);
        }
        supervisor.step(&conditions);
        if supervisor.state() == Autonomous {
            assert_eq!(
                describe(supervisor.state(), &conditions),
                "AUTONOMOUS: trajectory tracking"
            );
        }
    }
}

#[test]
fn permission_toggle_cycles_wait_autonomous_wait() {
    let mut conditions = Conditions::default();
    let mut supervisor = Supervisor::new();

    supervisor.step(&conditions);
    assert_eq!(supervisor.state(), Wait);

    conditions.autonomous_allowed = true;
    assert_eq!(supervisor.step(&conditions), Autonomous);
    assert_eq!(supervisor.step(&conditions), Autonomous);

    conditions.autonomous_allowed = false;
    assert_eq!(supervisor.step(&conditions), Wait);
}

#[test]
fn estop_mid_autonomous_goes_safe_immediately() {
    let mut conditions = Conditions {
        autonomous_allowed: true,
        ..Default::default()
    };
    let mut supervisor = Supervisor::new();
    supervisor.step(&conditions);
    supervisor.step(&conditions);
    assert_eq!(supervisor.state(), Autonomous);

    conditions.emergency_stop_active = true;
    // Permission is still granted; safety pre-empts it.
    assert_eq!(supervisor.step(&conditions), Safe);

    let report = fault_report(supervisor.state(), &conditions);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].label, "emergency stop");
}

#[test]
fn clearing_all_faults_recovers_through_wait_only() {
    let mut conditions = Conditions {
        power_ok: false,
        lidar_ok: false,
        autonomous_allowed: true,
        joystick_allowed: true,
        ..Default::default()
    };
    let mut supervisor = Supervisor::new();
    supervisor.step(&conditions);
    assert_eq!(supervisor.state(), Safe);

    // All faults cleared in one snapshot, both modes already armed.
    conditions.power_ok = true;
    conditions.lidar_ok = true;
    assert_eq!(supervisor.step(&conditions), Wait);
    assert!(fault_report(Safe, &conditions).is_empty());

    // The armed mode is only entered on the following cycle.
    assert_eq!(supervisor.step(&conditions), Autonomous);
}

#[test]
fn repeated_evaluation_with_unchanged_snapshot_reaches_fixed_point() {
    let conditions = Conditions {
        joystick_allowed: true,
        ..Default::default()
    };
    let mut state = Init;
    for _ in 0..10 {
        state = next_state(state, &conditions);
    }
    // Init → Wait → Joystick → Joystick → ...
    assert_eq!(state, Joystick);
    assert_eq!(next_state(state, &conditions), state);
}
