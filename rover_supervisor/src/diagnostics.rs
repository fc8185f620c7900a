//! Diagnostics rendering for operator display and fault triage.
//!
//! Both renderers are pure and return values; the caller picks the
//! output sink. Nothing here feeds back into the transition logic.

use heapless::Vec;
use rover_common::conditions::{Conditions, SAFETY_INPUT_COUNT};
use rover_common::state::SupervisorState;

/// One line of a fault report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultEntry {
    /// Human label of the safety input.
    pub label: &'static str,
    /// Reported health of the input (`false` = fault).
    pub ok: bool,
}

/// Bounded fault report — at most one entry per safety input.
pub type FaultReport = Vec<FaultEntry, SAFETY_INPUT_COUNT>;

/// Render a display label for the current state.
///
/// `Autonomous` inspects the control-method flags in fixed priority
/// order and names the first active one; multiple active flags are not
/// an error, the highest-priority one wins.
pub fn describe(state: SupervisorState, conditions: &Conditions) -> &'static str {
    match state {
        SupervisorState::Init => "INIT",
        SupervisorState::Safe => "SAFE",
        SupervisorState::Wait => "WAIT",
        SupervisorState::Joystick => "JOYSTICK",
        SupervisorState::Autonomous => {
            if conditions.trajectory_tracking {
                "AUTONOMOUS: trajectory tracking"
            } else if conditions.collision_avoidance {
                "AUTONOMOUS: collision avoidance"
            } else if conditions.camera_control {
                "AUTONOMOUS: camera control"
            } else if conditions.optitrack_control {
                "AUTONOMOUS: OptiTrack control"
            } else if conditions.trajectory_loaded {
                "AUTONOMOUS: preloaded trajectory"
            } else if conditions.scanner_measurement_active {
                "AUTONOMOUS: scanner measurement"
            } else {
                "AUTONOMOUS: no specific method selected"
            }
        }
    }
}

/// Enumerate the currently failing safety inputs.
///
/// Applicable only in `Safe`: for any other state the report is empty.
/// Entries come exclusively from the safety-input group, in the fixed
/// order of [`Conditions::safety_inputs`]; permission and
/// control-method flags are never listed. Empty in `Safe` when every
/// input already reads healthy (the cycle after recovery, before the
/// machine re-arms).
pub fn fault_report(state: SupervisorState, conditions: &Conditions) -> FaultReport {
    let mut report = FaultReport::new();
    if state != SupervisorState::Safe {
        return report;
    }
    for (label, ok) in conditions.safety_inputs() {
        if !ok {
            // Capacity equals the number of inputs, push cannot fail.
            let _ = report.push(FaultEntry { label, ok });
        }
    }
    report
}

// ─── Tests ──────────────────────────────────────────────────────────
