//! Motion commands

use crate::motion::{ActuatorId, Speed};

/// One step of a choreography: move an actuator, then hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionCommand {
    /// Actuator to move
    pub actuator: ActuatorId,
    /// Logical target, 0..=100
    pub target: u8,
    /// How fast to get there
    pub speed: Speed,
    /// Pause after arriving (ms)
    pub hold_ms: u16,
}

impl MotionCommand {
    /// Create a command
    pub const fn new(actuator: ActuatorId, target: u8, speed: Speed, hold_ms: u16) -> Self {
        Self {
            actuator,
            target,
            speed,
            hold_ms,
        }
    }

    /// Door command in authored form (negative speed = instant)
    pub const fn door(target: u8, speed: i8, hold_ms: u16) -> Self {
        Self::new(ActuatorId::Door, target, Speed::from_authored(speed), hold_ms)
    }

    /// Arm command in authored form (negative speed = instant)
    pub const fn arm(target: u8, speed: i8, hold_ms: u16) -> Self {
        Self::new(ActuatorId::Arm, target, Speed::from_authored(speed), hold_ms)
    }
}
