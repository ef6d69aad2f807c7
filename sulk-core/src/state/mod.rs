//! Power state machine
//!
//! Defines the authoritative sleep/wake/run/park behavior of the machine.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;
pub mod power;

pub use events::{Diagnostic, Event};
pub use machine::{FaultKind, PowerState};
pub use power::{CycleOutcome, PowerStateMachine};
