//! # Rover Supervisor Library
//!
//! Deterministic safety-supervisory state machine for a mobile robot.
//! Given a [`Conditions`](rover_common::conditions::Conditions) snapshot
//! and the current [`SupervisorState`](rover_common::state::SupervisorState),
//! it computes the permitted operating mode and enforces fail-safe
//! behavior: any safety failure routes to `Safe` before anything else is
//! considered, and recovery always re-arms through `Wait`.
//!
//! The core is pure and synchronous — no I/O, no allocation, no hidden
//! state. The caller owns the current state and the snapshot, calls
//! [`fsm::next_state`] once per cycle, and applies the result in order.
//! [`fsm::Supervisor`] is a thin holder for callers that prefer not to
//! thread the state themselves.
//!
//! Diagnostics rendering ([`diagnostics::describe`],
//! [`diagnostics::fault_report`]) is equally pure and returns values;
//! the output sink (console, log, telemetry) is the caller's choice.

pub mod diagnostics;
pub mod fsm;
