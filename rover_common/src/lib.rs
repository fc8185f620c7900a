//! Rover Common Library
//!
//! Shared plain data types for the rover supervisory workspace.
//!
//! # Module Structure
//!
//! - [`state`] - The supervisory state enumeration
//! - [`conditions`] - The per-cycle condition snapshot and safety predicate
//! - [`config`] - Scenario configuration loading (TOML)
//!
//! All types here are passive: the supervisory logic lives in
//! `rover_supervisor`, the console harness in `rover_console`.

pub mod conditions;
pub mod config;
pub mod state;
