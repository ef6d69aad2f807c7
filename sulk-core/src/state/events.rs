//! Events that trigger state transitions, and lifecycle diagnostics

use super::machine::{FaultKind, PowerState};

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Wake signal seen active (or already active on entry)
    WakeEdge,
    /// Wake signal still active after waking
    SignalActive,
    /// Wake signal gone by the time it was re-checked
    SignalInactive,
    /// Library has no program to play; park straight away
    NothingToRun,
    /// Last command of the program completed
    ProgramFinished,
    /// Actuators home and detached, rail off
    Parked,
}

/// Lifecycle records handed to a [`DiagnosticsSink`](crate::traits::DiagnosticsSink)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// State machine moved
    StateChanged { from: PowerState, to: PowerState },
    /// About to suspend until the wake edge
    WaitingForWake,
    /// Switch was already on when the machine went to sleep
    AlreadyActive,
    /// Woken, but the switch was off again on re-check
    IdleWake,
    /// Woken with an empty library; parking without a show
    EmptyLibrary,
    /// Program chosen for this wake
    ProgramSelected {
        index: usize,
        name: &'static str,
        /// Expected playback time from home, excluding ready and park
        nominal_ms: u32,
    },
    /// Program played to the end
    ProgramFinished {
        index: usize,
        commands_run: usize,
        faults: usize,
    },
    /// Hardware fault, playback continued
    Fault(FaultKind),
}
