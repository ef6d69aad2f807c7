//! Power state machine definition
//!
//! Whether the rail is powered and the actuators are attached is a function
//! of the current state and an event.

use super::events::Event;
use crate::motion::ActuatorId;

/// Power states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Rail off, actuators detached, waiting for the switch
    Sleeping,
    /// Woken by an edge, checking whether the switch is still on
    Waking,
    /// Rail on, one program playing
    Running,
    /// Returning home before powering down
    Parking,
}

/// Non-fatal faults reported by the hardware layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Output did not accept a position
    ActuatorUnreachable(ActuatorId),
    /// Output rejected a position beyond its travel
    ActuatorOutOfRange(ActuatorId),
    /// Move requested while the control signal was disconnected
    ActuatorDetached(ActuatorId),
    /// Rail switch did not respond
    RailFault,
}

impl FaultKind {
    /// Actuator the fault concerns, if any
    pub fn actuator(&self) -> Option<ActuatorId> {
        match self {
            FaultKind::ActuatorUnreachable(id)
            | FaultKind::ActuatorOutOfRange(id)
            | FaultKind::ActuatorDetached(id) => Some(*id),
            FaultKind::RailFault => None,
        }
    }
}

impl PowerState {
    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use PowerState::*;

        match (self, event) {
            (Sleeping, WakeEdge) => Waking,

            (Waking, SignalActive) => Running,
            (Waking, SignalInactive) => Sleeping,

            (Running, ProgramFinished) => Parking,
            (Running, NothingToRun) => Parking,

            (Parking, Parked) => Sleeping,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let state = PowerState::Sleeping;

        let waking = state.transition(Event::WakeEdge);
        assert_eq!(waking, PowerState::Waking);

        let running = waking.transition(Event::SignalActive);
        assert_eq!(running, PowerState::Running);

        let parking = running.transition(Event::ProgramFinished);
        assert_eq!(parking, PowerState::Parking);

        let sleeping = parking.transition(Event::Parked);
        assert_eq!(sleeping, PowerState::Sleeping);
    }

    #[test]
    fn test_idle_wake_returns_to_sleep() {
        let waking = PowerState::Waking;
        assert_eq!(waking.transition(Event::SignalInactive), PowerState::Sleeping);
    }

    #[test]
    fn test_empty_library_parks() {
        // Already powered and homed by the time selection comes up empty
        let running = PowerState::Running;
        assert_eq!(running.transition(Event::NothingToRun), PowerState::Parking);
        assert_eq!(
            PowerState::Waking.transition(Event::NothingToRun),
            PowerState::Waking
        );
    }

    #[test]
    fn test_running_ignores_wake_edges() {
        // The switch is not observed while a program plays
        let running = PowerState::Running;
        assert_eq!(running.transition(Event::WakeEdge), PowerState::Running);
        assert_eq!(running.transition(Event::SignalInactive), PowerState::Running);
    }

    #[test]
    fn test_unexpected_events_hold_state() {
        let states = [
            PowerState::Sleeping,
            PowerState::Waking,
            PowerState::Running,
            PowerState::Parking,
        ];

        for state in states {
            let next = state.transition(Event::Parked);
            if state == PowerState::Parking {
                assert_eq!(next, PowerState::Sleeping);
            } else {
                assert_eq!(next, state);
            }
        }
    }

    #[test]
    fn test_fault_actuator() {
        assert_eq!(
            FaultKind::ActuatorDetached(ActuatorId::Arm).actuator(),
            Some(ActuatorId::Arm)
        );
        assert_eq!(FaultKind::RailFault.actuator(), None);
    }
}
