//! Program playback
//!
//! Walks a program's commands strictly in order: map the logical target and
//! speed, move the named actuator, then hold. Faults are reported and
//! playback carries on.

use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use super::program::ChoreographyProgram;
use crate::config::TimingConfig;
use crate::motion::{pacing_for, Actuators};
use crate::state::{Diagnostic, FaultKind};
use crate::traits::{ActuatorOutput, DiagnosticsSink};

/// Faults kept in a [`PlaybackSummary`]; later ones are only counted
pub const MAX_RECORDED_FAULTS: usize = 4;

/// Result of playing one program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackSummary {
    /// Commands executed
    pub commands_run: usize,
    /// Total faults seen
    pub fault_count: usize,
    /// First faults seen, in order
    pub faults: Vec<FaultKind, MAX_RECORDED_FAULTS>,
}

impl PlaybackSummary {
    fn note_fault(&mut self, fault: FaultKind) {
        self.fault_count += 1;
        // Full buffer: the fault is still counted
        let _ = self.faults.push(fault);
    }

    /// Check if the program ran without faults
    pub fn is_clean(&self) -> bool {
        self.fault_count == 0
    }
}

/// Play a program on attached actuators
pub async fn execute<O, D, S>(
    program: &ChoreographyProgram,
    actuators: &mut Actuators<O>,
    timing: &TimingConfig,
    delay: &mut D,
    diagnostics: &mut S,
) -> PlaybackSummary
where
    O: ActuatorOutput,
    D: DelayNs,
    S: DiagnosticsSink + ?Sized,
{
    let mut summary = PlaybackSummary::default();

    for cmd in program.commands {
        let pacing = pacing_for(cmd.speed, timing);
        let driver = actuators.driver_mut(cmd.actuator);

        if let Err(fault) = driver.move_to_logical(cmd.target, pacing, delay).await {
            diagnostics.record(Diagnostic::Fault(fault));
            summary.note_fault(fault);
        }

        if cmd.hold_ms > 0 {
            delay.delay_ms(cmd.hold_ms as u32).await;
        }

        summary.commands_run += 1;
    }

    summary
}
