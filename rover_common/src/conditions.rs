//! Per-cycle condition snapshot and the derived safety predicate.
//!
//! `Conditions` is owned by the caller and immutable for the duration
//! of one evaluation: the supervisor reads it, never mutates it, and
//! never retains a reference past the call. Every field is an
//! independent boolean, so every snapshot is valid by construction.

use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

/// Number of inputs in the safety group (the fields `safety_ok()` reads).
pub const SAFETY_INPUT_COUNT: usize = 12;

/// Snapshot of sensor/device/communication health and operator commands.
///
/// Three independent groups:
/// - **Safety inputs** feed the derived [`Conditions::safety_ok`] predicate.
/// - **Mode permissions** arm the autonomous/joystick operating modes.
/// - **Control-method flags** are informational only — they drive the
///   diagnostics label, never a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    // ── Safety inputs ───────────────────────────────────────────────
    /// Power supply within limits.
    #[serde(default = "default_true")]
    pub power_ok: bool,
    /// Emergency stop pressed. Active means UNSAFE.
    #[serde(default)]
    pub emergency_stop_active: bool,
    /// Safety scanner reports a clear protective field (no intrusion).
    #[serde(default = "default_true")]
    pub scanner_free: bool,
    /// PC to controller link alive.
    #[serde(default = "default_true")]
    pub pc_link_ok: bool,
    /// Joystick paired and reporting.
    #[serde(default = "default_true")]
    pub joystick_connected: bool,
    /// PLC to servo drive link alive.
    #[serde(default = "default_true")]
    pub plc_servo_link_ok: bool,
    /// Hitch actuator healthy.
    #[serde(default = "default_true")]
    pub actuator_ok: bool,
    /// RGB-D camera healthy.
    #[serde(default = "default_true")]
    pub camera_ok: bool,
    /// Lidar healthy.
    #[serde(default = "default_true")]
    pub lidar_ok: bool,
    /// On-board PC healthy.
    #[serde(default = "default_true")]
    pub pc_ok: bool,
    /// Router healthy.
    #[serde(default = "default_true")]
    pub router_ok: bool,
    /// Servo drive healthy.
    #[serde(default = "default_true")]
    pub servo_ok: bool,

    // ── Mode permissions ────────────────────────────────────────────
    /// Operator allows autonomous motion.
    #[serde(default)]
    pub autonomous_allowed: bool,
    /// Operator allows joystick motion.
    #[serde(default)]
    pub joystick_allowed: bool,

    // ── Control-method flags (informational) ────────────────────────
    /// Trajectory tracking controller active.
    #[serde(default)]
    pub trajectory_tracking: bool,
    /// Collision avoidance controller active.
    #[serde(default)]
    pub collision_avoidance: bool,
    /// RGB-D camera control active.
    #[serde(default)]
    pub camera_control: bool,
    /// OptiTrack control active.
    #[serde(default)]
    pub optitrack_control: bool,
    /// Preloaded trajectory playback active.
    #[serde(default)]
    pub trajectory_loaded: bool,
    /// Scanner measurement run active.
    #[serde(default)]
    pub scanner_measurement_active: bool,
    /// Joystick control loop active.
    #[serde(default)]
    pub joystick_control: bool,
}

// 21 independent bools, no padding. Snapshot copies are cheap.
assert_eq_size!(Conditions, [u8; 21]);

impl Conditions {
    /// Derived safety predicate.
    ///
    /// True only when every monitored subsystem reports healthy, the
    /// emergency stop is NOT active, and the safety scanner protective
    /// field IS clear. Pure function of the snapshot — recomputed fresh
    /// on every evaluation, never cached.
    #[inline]
    pub const fn safety_ok(&self) -> bool {
        self.power_ok
            && !self.emergency_stop_active
            && self.scanner_free
            && self.pc_link_ok
            && self.joystick_connected
            && self.plc_servo_link_ok
            && self.actuator_ok
            && self.camera_ok
            && self.lidar_ok
            && self.pc_ok
            && self.router_ok
            && self.servo_ok
    }

    /// Fixed-order view of the safety-input group as `(label, ok)` pairs.
    ///
    /// Polarity is normalized: `ok == true` always means healthy, so the
    /// emergency-stop entry reads `!emergency_stop_active`. The AND of
    /// every `ok` in this view equals [`Conditions::safety_ok`].
    pub const fn safety_inputs(&self) -> [(&'static str, bool); SAFETY_INPUT_COUNT] {
        [
            ("power supply", self.power_ok),
            ("emergency stop", !self.emergency_stop_active),
            ("safety scanner", self.scanner_free),
            ("PC link", self.pc_link_ok),
            ("joystick", self.joystick_connected),
            ("PLC-servo link", self.plc_servo_link_ok),
            ("actuator", self.actuator_ok),
            ("camera", self.camera_ok),
            ("lidar", self.lidar_ok),
            ("PC", self.pc_ok),
            ("router", self.router_ok),
            ("servo", self.servo_ok),
        ]
    }
}

impl Default for Conditions {
    /// All devices healthy, e-stop released, scanner clear, no mode
    /// armed, no control method active.
    fn default() -> Self {
        Self {
            power_ok: true,
            emergency_stop_active: false,
            scanner_free: true,
            pc_link_ok: true,
            joystick_connected: true,
            plc_servo_link_ok: true,
            actuator_ok: true,
            camera_ok: true,
            lidar_ok: true,
            pc_ok: true,
            router_ok: true,
            servo_ok: true,
            autonomous_allowed: false,
            joystick_allowed: false,
            trajectory_tracking: false,
            collision_avoidance: false,
            camera_control: false,
            optitrack_control: false,
            trajectory_loaded: false,
            scanner_measurement_active: false,
            joystick_control: false,
        }
    }
}

fn default_true() -> bool {
    true
}
