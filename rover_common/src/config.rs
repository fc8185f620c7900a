//! Scenario configuration loading.
//!
//! A scenario file describes one console run: the initial condition
//! snapshot, the number of evaluation cycles, and a list of condition
//! patches applied at fixed cycle indices. This replaces the original
//! hard-coded demo toggles with data-driven TOML, loaded the same way
//! as every other configuration file in the workspace.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::conditions::Conditions;

/// Error type for scenario loading operations.
#[derive(Debug, Clone, Error)]
pub enum ScenarioError {
    /// Scenario file not found at specified path.
    #[error("Scenario file not found")]
    FileNotFound,

    /// File read or TOML parsing failed.
    #[error("Failed to parse scenario: {0}")]
    Parse(String),

    /// Semantic validation failed.
    #[error("Scenario validation failed: {0}")]
    Validation(String),
}

/// A full console scenario: initial snapshot plus timed condition patches.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Number of evaluation cycles to run.
    #[serde(default = "default_cycles")]
    pub cycles: usize,
    /// Conditions at cycle 0. Unspecified fields take their defaults.
    #[serde(default)]
    pub initial: Conditions,
    /// Patches applied at the start of their cycle, before evaluation.
    #[serde(default, rename = "step")]
    pub steps: Vec<ScenarioStep>,
}

fn default_cycles() -> usize {
    20
}

impl ScenarioConfig {
    /// Check that every step fires within the configured cycle range.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for step in &self.steps {
            if step.at >= self.cycles {
                return Err(ScenarioError::Validation(format!(
                    "step at cycle {} is outside 0..{}",
                    step.at, self.cycles
                )));
            }
        }
        Ok(())
    }
}

/// One timed change to the condition snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioStep {
    /// Cycle index at which the patch is applied.
    pub at: usize,
    /// Fields to overwrite; everything else is left untouched.
    #[serde(flatten)]
    pub patch: ConditionPatch,
}

/// Partial condition update — `Some(v)` overwrites, `None` leaves as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionPatch {
    #[serde(default)]
    pub power_ok: Option<bool>,
    #[serde(default)]
    pub emergency_stop_active: Option<bool>,
    #[serde(default)]
    pub scanner_free: Option<bool>,
    #[serde(default)]
    pub pc_link_ok: Option<bool>,
    #[serde(default)]
    pub joystick_connected: Option<bool>,
    #[serde(default)]
    pub plc_servo_link_ok: Option<bool>,
    #[serde(default)]
    pub actuator_ok: Option<bool>,
    #[serde(default)]
    pub camera_ok: Option<bool>,
    #[serde(default)]
    pub lidar_ok: Option<bool>,
    #[serde(default)]
    pub pc_ok: Option<bool>,
    #[serde(default)]
    pub router_ok: Option<bool>,
    #[serde(default)]
    pub servo_ok: Option<bool>,
    #[serde(default)]
    pub autonomous_allowed: Option<bool>,
    #[serde(default)]
    pub joystick_allowed: Option<bool>,
    #[serde(default)]
    pub trajectory_tracking: Option<bool>,
    #[serde(default)]
    pub collision_avoidance: Option<bool>,
    #[serde(default)]
    pub camera_control: Option<bool>,
    #[serde(default)]
    pub optitrack_control: Option<bool>,
    #[serde(default)]
    pub trajectory_loaded: Option<bool>,
    #[serde(default)]
    pub scanner_measurement_active: Option<bool>,
    #[serde(default)]
    pub joystick_control: Option<bool>,
}

impl ConditionPatch {
    /// Overwrite the specified fields of `conditions` in place.
    pub fn apply(&self, conditions: &mut Conditions) {
        macro_rules! apply_field {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(v) = self.$field {
                        conditions.$field = v;
                    }
                )*
            };
        }
        apply_field!(
            power_ok,
            emergency_stop_active,
            scanner_free,
            pc_link_ok,
            joystick_connected,
            plc_servo_link_ok,
            actuator_ok,
            camera_ok,
            lidar_ok,
            pc_ok,
            router_ok,
            servo_ok,
            autonomous_allowed,
            joystick_allowed,
            trajectory_tracking,
            collision_avoidance,
            camera_control,
            optitrack_control,
            trajectory_loaded,
            scanner_measurement_active,
            joystick_control,
        );
    }
}

/// Load and validate a scenario TOML file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ScenarioError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScenarioError::FileNotFound,
        _ => ScenarioError::Parse(e.to_string()),
    })?;
    let config: ScenarioConfig =
        toml::from_str(&raw).map_err(|e| ScenarioError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
