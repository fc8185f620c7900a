//! Supervisory state enumeration.
//!
//! Uses `#[repr(u8)]` for compact layout and stable raw encoding on
//! telemetry surfaces. The enum is closed: every new state must be
//! handled exhaustively in both the transition function and the
//! diagnostics renderer, checked at compile time.

use serde::{Deserialize, Serialize};

/// Global supervisory state of the robot.
///
/// Exactly one state is current at any time. `Init` is the boot state
/// and is never re-entered by any transition. `Safe` is the fail-safe
/// sink: it is reachable from every other state whenever the safety
/// predicate fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SupervisorState {
    /// Boot state — left unconditionally on the first evaluation.
    Init = 0,
    /// Fail-safe state, all motion inhibited.
    Safe = 1,
    /// All subsystems healthy, no operating mode armed.
    Wait = 2,
    /// Autonomous motion active.
    Autonomous = 3,
    /// Manual motion from the joystick.
    Joystick = 4,
}

impl SupervisorState {
    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Init),
            1 => Some(Self::Safe),
            2 => Some(Self::Wait),
            3 => Some(Self::Autonomous),
            4 => Some(Self::Joystick),
            _ => None,
        }
    }

    /// Convert from raw `u8`, mapping unknown values to `Safe`.
    ///
    /// An unmapped state value is treated as an unsafe condition, so
    /// decoding surfaces fall back to the fail-safe state rather than
    /// reporting an error.
    #[inline]
    pub const fn from_u8_or_safe(value: u8) -> Self {
        match Self::from_u8(value) {
            Some(state) => state,
            None => Self::Safe,
        }
    }

    /// Returns true if the robot may be moving in this state.
    #[inline]
    pub const fn is_moving(&self) -> bool {
        matches!(self, Self::Autonomous | Self::Joystick)
    }
}

impl Default for SupervisorState {
    fn default() -> Self {
        Self::Init
    }
}
