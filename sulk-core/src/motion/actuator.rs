//! Stepped actuator driver
//!
//! The driver is the only owner of an actuator's position. There is no
//! feedback sensor: the last commanded position is the position.

use embedded_hal_async::delay::DelayNs;

use super::mapping::{map_position, Pacing};
use crate::config::{ActuatorCalibration, MachineConfig};
use crate::state::FaultKind;
use crate::traits::{ActuatorOutput, OutputError};

/// Actuator identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorId {
    /// Lid over the switch
    Door,
    /// Arm that flips the switch back
    Arm,
}

impl ActuatorId {
    /// Both actuators, door first
    pub const ALL: [ActuatorId; 2] = [ActuatorId::Door, ActuatorId::Arm];

    /// Short name for logs
    pub const fn name(&self) -> &'static str {
        match self {
            ActuatorId::Door => "door",
            ActuatorId::Arm => "arm",
        }
    }
}

/// Position and power state of one actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorState {
    /// Last commanded physical position
    pub position: u16,
    /// Control signal connected
    pub attached: bool,
}

/// Driver for one actuator
pub struct ActuatorDriver<O> {
    id: ActuatorId,
    calibration: ActuatorCalibration,
    output: O,
    state: ActuatorState,
}

impl<O: ActuatorOutput> ActuatorDriver<O> {
    /// Create a detached driver resting at home
    pub fn new(id: ActuatorId, calibration: ActuatorCalibration, output: O) -> Self {
        Self {
            id,
            calibration,
            output,
            state: ActuatorState {
                position: calibration.home(),
                attached: false,
            },
        }
    }

    /// Actuator identifier
    pub fn id(&self) -> ActuatorId {
        self.id
    }

    /// Calibrated range
    pub fn calibration(&self) -> &ActuatorCalibration {
        &self.calibration
    }

    /// Current state
    pub fn state(&self) -> ActuatorState {
        self.state
    }

    /// Last commanded physical position
    pub fn read_current_physical(&self) -> u16 {
        self.state.position
    }

    /// Check if the control signal is connected
    pub fn is_attached(&self) -> bool {
        self.state.attached
    }

    /// Access the underlying output
    pub fn output(&self) -> &O {
        &self.output
    }

    fn fault(&self, err: OutputError) -> FaultKind {
        match err {
            OutputError::Unreachable => FaultKind::ActuatorUnreachable(self.id),
            OutputError::OutOfRange => FaultKind::ActuatorOutOfRange(self.id),
        }
    }

    /// Connect the control signal
    ///
    /// The actuator starts holding its last commanded position. The driver
    /// counts as attached even if the output reports an error, since the
    /// move that follows is open-loop anyway.
    pub fn attach(&mut self) -> Result<(), FaultKind> {
        if self.state.attached {
            return Ok(());
        }
        self.state.attached = true;
        self.output
            .attach(self.state.position)
            .map_err(|e| self.fault(e))
    }

    /// Disconnect the control signal
    pub fn detach(&mut self) {
        if self.state.attached {
            self.output.detach();
            self.state.attached = false;
        }
    }

    /// Jump straight to a physical position with no interpolation
    pub fn jump_to(&mut self, target: u16) -> Result<(), FaultKind> {
        if !self.state.attached {
            return Err(FaultKind::ActuatorDetached(self.id));
        }
        self.state.position = target;
        self.output.write(target).map_err(|e| self.fault(e))
    }

    /// Jump straight to the home position
    pub fn home(&mut self) -> Result<(), FaultKind> {
        self.jump_to(self.calibration.home())
    }

    /// Move to a physical position
    ///
    /// Stepped moves advance one physical unit at a time, forwarding every
    /// position to the output and holding `step_ms` after each, so a move
    /// over `n` units emits exactly `n` positions and takes `n * step_ms`.
    /// Output errors do not stop the move; the first one is returned once
    /// the target is reached.
    pub async fn move_to<D: DelayNs>(
        &mut self,
        target: u16,
        pacing: Pacing,
        delay: &mut D,
    ) -> Result<(), FaultKind> {
        let step_ms = match pacing {
            Pacing::Instant | Pacing::Stepped { step_ms: 0 } => return self.jump_to(target),
            Pacing::Stepped { step_ms } => step_ms,
        };

        if !self.state.attached {
            return Err(FaultKind::ActuatorDetached(self.id));
        }

        let mut result = Ok(());
        while self.state.position != target {
            self.state.position = if target > self.state.position {
                self.state.position + 1
            } else {
                self.state.position - 1
            };

            if let Err(e) = self.output.write(self.state.position) {
                if result.is_ok() {
                    result = Err(self.fault(e));
                }
            }

            delay.delay_ms(step_ms).await;
        }

        result
    }

    /// Move to a logical position through this actuator's calibration
    pub async fn move_to_logical<D: DelayNs>(
        &mut self,
        logical: u8,
        pacing: Pacing,
        delay: &mut D,
    ) -> Result<(), FaultKind> {
        let target = map_position(logical, &self.calibration);
        self.move_to(target, pacing, delay).await
    }
}

/// The machine's two actuators
pub struct Actuators<O> {
    /// Lid servo
    pub door: ActuatorDriver<O>,
    /// Switch arm servo
    pub arm: ActuatorDriver<O>,
}

impl<O: ActuatorOutput> Actuators<O> {
    /// Create both drivers from their outputs and the machine calibration
    pub fn new(door: O, arm: O, config: &MachineConfig) -> Self {
        Self {
            door: ActuatorDriver::new(ActuatorId::Door, config.door, door),
            arm: ActuatorDriver::new(ActuatorId::Arm, config.arm, arm),
        }
    }

    /// Driver for an actuator
    pub fn driver(&self, id: ActuatorId) -> &ActuatorDriver<O> {
        match id {
            ActuatorId::Door => &self.door,
            ActuatorId::Arm => &self.arm,
        }
    }

    /// Mutable driver for an actuator
    pub fn driver_mut(&mut self, id: ActuatorId) -> &mut ActuatorDriver<O> {
        match id {
            ActuatorId::Door => &mut self.door,
            ActuatorId::Arm => &mut self.arm,
        }
    }

    /// Check if both actuators rest at home
    pub fn all_home(&self) -> bool {
        ActuatorId::ALL.iter().all(|&id| {
            let driver = self.driver(id);
            driver.read_current_physical() == driver.calibration().home()
        })
    }

    /// Check if either actuator is attached
    pub fn any_attached(&self) -> bool {
        self.door.is_attached() || self.arm.is_attached()
    }
}
