//! Supervisory state transitions.
//!
//! Implements the fixed transition table over
//! `SupervisorState` × `Conditions`. Safety failure is checked first in
//! every branching state, so the robot can neither remain in nor enter
//! a moving state while any monitored condition is unsatisfied.
//! Recovery from `Safe` always routes through `Wait` — an explicit
//! re-arm step, never directly into a motion mode. A dropped mode
//! permission routes to `Wait`, not `Safe`: it is a commanded stop,
//! not a fault.

use rover_common::conditions::Conditions;
use rover_common::state::SupervisorState;

/// Compute the next supervisory state from the current one and a fresh
/// condition snapshot.
///
/// Total function: defined for every (state, snapshot) pair, never
/// fails, has no side effects. The safety predicate is re-derived from
/// the snapshot on every call.
pub fn next_state(current: SupervisorState, conditions: &Conditions) -> SupervisorState {
    use SupervisorState::*;

    let safety = conditions.safety_ok();

    match current {
        // Init is left unconditionally on the first evaluation.
        Init => {
            if safety {
                Wait
            } else {
                Safe
            }
        }

        Safe => {
            if safety {
                Wait
            } else {
                Safe
            }
        }

        Wait => {
            if !safety {
                Safe
            } else if conditions.autonomous_allowed {
                Autonomous
            } else if conditions.joystick_allowed && conditions.joystick_connected {
                Joystick
            } else {
                Wait
            }
        }

        Autonomous => {
            if !safety {
                Safe
            } else if !conditions.autonomous_allowed {
                Wait
            } else {
                Autonomous
            }
        }

        Joystick => {
            if !safety {
                Safe
            } else if !conditions.joystick_allowed {
                Wait
            } else {
                Joystick
            }
        }
    }
}

/// Holder for the current supervisory state.
///
/// Convenience over [`next_state`] for callers that step the machine
/// once per polling cycle. The snapshot is still owned by the caller
/// and passed in fresh each cycle.
#[derive(Debug, Clone)]
pub struct Supervisor {
    state: SupervisorState,
}

impl Supervisor {
    /// Create a new supervisor in `Init` state.
    pub const fn new() -> Self {
        Self {
            state: SupervisorState::Init,
        }
    }

    /// Current state.
    #[inline]
    pub const fn state(&self) -> SupervisorState {
        self.state
    }

    /// Evaluate one cycle: apply [`next_state`] and store the result.
    pub fn step(&mut self, conditions: &Conditions) -> SupervisorState {
        self.state = next_state(self.state, conditions);
        self.state
    }

    /// Force the fail-safe state (e.g. from an external watchdog).
    #[inline]
    pub fn force_safe(&mut self) {
        self.state = SupervisorState::Safe;
    }

    /// Check if the current state permits motion commands.
    #[inline]
    pub const fn allows_motion(&self) -> bool {
        self.state.is_moving()
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
