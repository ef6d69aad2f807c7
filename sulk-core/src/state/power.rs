//! Power state machine driver
//!
//! Owns both actuators, the servo rail, the wake signal and the delay
//! provider, and walks one sleep, wake, run, park cycle at a time:
//!
//! ```text
//!   Sleeping --wake--> Waking --inactive--> Sleeping
//!                        |
//!                      active
//!                        v
//!                     Running --finished/empty--> Parking --parked--> Sleeping
//! ```
//!
//! The rail is powered only between the ready and park steps of a cycle, and
//! the program is drawn only once both actuators are attached and home.

use embedded_hal_async::delay::DelayNs;

use super::events::{Diagnostic, Event};
use super::machine::{FaultKind, PowerState};
use crate::choreography::{execute, ChoreographyLibrary, PlaybackSummary};
use crate::config::MachineConfig;
use crate::motion::{ActuatorId, Actuators};
use crate::traits::{ActuatorOutput, DiagnosticsSink, RailPower, RandomSource, WakeSignal};

/// How one cycle ended
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// Switch was off again on re-check; nothing powered
    Idle,
    /// Library empty; readied and parked without a show
    NothingToRun,
    /// A program played and the machine parked
    Completed {
        /// Library index of the program
        index: usize,
        /// Playback result
        summary: PlaybackSummary,
    },
}

/// The machine: actuators, rail, wake signal and configuration
pub struct PowerStateMachine<O, R, W, D> {
    state: PowerState,
    actuators: Actuators<O>,
    rail: R,
    wake: W,
    delay: D,
    config: MachineConfig,
}

impl<O, R, W, D> PowerStateMachine<O, R, W, D>
where
    O: ActuatorOutput,
    R: RailPower,
    W: WakeSignal,
    D: DelayNs,
{
    /// Create a sleeping machine
    pub fn new(
        actuators: Actuators<O>,
        rail: R,
        wake: W,
        delay: D,
        config: &MachineConfig,
    ) -> Self {
        Self {
            state: PowerState::Sleeping,
            actuators,
            rail,
            wake,
            delay,
            config: *config,
        }
    }

    /// Current state
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Both actuator drivers
    pub fn actuators(&self) -> &Actuators<O> {
        &self.actuators
    }

    /// Servo rail
    pub fn rail(&self) -> &R {
        &self.rail
    }

    fn apply<S: DiagnosticsSink + ?Sized>(&mut self, event: Event, diagnostics: &mut S) {
        let next = self.state.transition(event);
        if next != self.state {
            diagnostics.record(Diagnostic::StateChanged {
                from: self.state,
                to: next,
            });
            self.state = next;
        }
    }

    fn set_rail<S: DiagnosticsSink + ?Sized>(&mut self, on: bool, diagnostics: &mut S) {
        if self.rail.set_powered(on).is_err() {
            diagnostics.record(Diagnostic::Fault(FaultKind::RailFault));
        }
    }

    /// Power the rail, attach both actuators and home them
    async fn ready<S: DiagnosticsSink + ?Sized>(&mut self, diagnostics: &mut S) {
        self.set_rail(true, diagnostics);
        self.delay.delay_ms(self.config.timing.rail_settle_ms).await;

        for id in ActuatorId::ALL {
            if let Err(fault) = self.actuators.driver_mut(id).attach() {
                diagnostics.record(Diagnostic::Fault(fault));
            }
        }
        self.home_all(diagnostics);
    }

    /// Home both actuators, let them settle, detach and cut the rail
    async fn park<S: DiagnosticsSink + ?Sized>(&mut self, diagnostics: &mut S) {
        self.home_all(diagnostics);
        self.delay.delay_ms(self.config.timing.park_settle_ms).await;

        for id in ActuatorId::ALL {
            self.actuators.driver_mut(id).detach();
        }
        self.set_rail(false, diagnostics);
    }

    fn home_all<S: DiagnosticsSink + ?Sized>(&mut self, diagnostics: &mut S) {
        for id in ActuatorId::ALL {
            if let Err(fault) = self.actuators.driver_mut(id).home() {
                diagnostics.record(Diagnostic::Fault(fault));
            }
        }
    }

    /// Power-on homing pass
    ///
    /// Readies and parks the mechanism once with no program, so it starts
    /// from a known position. The machine stays `Sleeping`.
    pub async fn boot<S: DiagnosticsSink + ?Sized>(&mut self, diagnostics: &mut S) {
        self.ready(diagnostics).await;
        self.park(diagnostics).await;
    }

    /// Sleep until woken, then play at most one program
    pub async fn run_cycle<G, S>(
        &mut self,
        library: &ChoreographyLibrary<'_>,
        rng: &mut G,
        diagnostics: &mut S,
    ) -> CycleOutcome
    where
        G: RandomSource + ?Sized,
        S: DiagnosticsSink + ?Sized,
    {
        // Switch flipped back on while the last program was parking
        if !library.is_empty() && self.wake.is_active() {
            diagnostics.record(Diagnostic::AlreadyActive);
        } else {
            // With nothing to play the switch stays on, so wait for a fresh
            // flip rather than spinning through ready and park
            if library.is_empty() {
                self.wake.wait_for_release().await;
            }
            diagnostics.record(Diagnostic::WaitingForWake);
            self.wake.wait_for_wake().await;
        }
        self.apply(Event::WakeEdge, diagnostics);

        if !self.wake.is_active() {
            diagnostics.record(Diagnostic::IdleWake);
            self.apply(Event::SignalInactive, diagnostics);
            return CycleOutcome::Idle;
        }

        self.apply(Event::SignalActive, diagnostics);
        self.ready(diagnostics).await;

        let Some(selection) = library.select(rng) else {
            diagnostics.record(Diagnostic::EmptyLibrary);
            self.apply(Event::NothingToRun, diagnostics);
            self.park(diagnostics).await;
            self.apply(Event::Parked, diagnostics);
            return CycleOutcome::NothingToRun;
        };
        diagnostics.record(Diagnostic::ProgramSelected {
            index: selection.index,
            name: selection.program.name,
            nominal_ms: selection.program.nominal_duration_ms(&self.config),
        });

        let summary = execute(
            selection.program,
            &mut self.actuators,
            &self.config.timing,
            &mut self.delay,
            diagnostics,
        )
        .await;
        diagnostics.record(Diagnostic::ProgramFinished {
            index: selection.index,
            commands_run: summary.commands_run,
            faults: summary.fault_count,
        });

        self.apply(Event::ProgramFinished, diagnostics);
        self.park(diagnostics).await;
        self.apply(Event::Parked, diagnostics);

        CycleOutcome::Completed {
            index: selection.index,
            summary,
        }
    }

    /// Run cycles forever; never returns
    pub async fn run<G, S>(
        &mut self,
        library: &ChoreographyLibrary<'_>,
        rng: &mut G,
        diagnostics: &mut S,
    ) where
        G: RandomSource + ?Sized,
        S: DiagnosticsSink + ?Sized,
    {
        loop {
            self.run_cycle(library, rng, diagnostics).await;
        }
    }
}
