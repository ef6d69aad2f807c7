//! Actuator calibration
//!
//! Each actuator maps the logical 0..=100 scale onto a directed range of raw
//! physical units (servo degrees for the PWM servo driver). The range is
//! directed: depending on how a servo is mounted, logical 100 can sit below
//! logical 0.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Door: closed at logical 0, fully open at logical 100
pub const DOOR_CLOSED: u16 = 150;
/// Door fully open
pub const DOOR_OPEN: u16 = 60;

/// Arm: stowed at logical 0, touching the switch at logical 100
pub const ARM_HOME: u16 = 120;
/// Arm fully extended
pub const ARM_FULL: u16 = 8;

/// Calibrated physical range of one actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActuatorCalibration {
    /// Physical position at logical 0 (home)
    pub at_logical_0: u16,
    /// Physical position at logical 100
    pub at_logical_100: u16,
}

impl ActuatorCalibration {
    /// Door calibration of the reference build
    pub const DOOR: Self = Self::new(DOOR_CLOSED, DOOR_OPEN);

    /// Arm calibration of the reference build
    pub const ARM: Self = Self::new(ARM_HOME, ARM_FULL);

    /// Create a calibration from its two endpoints
    pub const fn new(at_logical_0: u16, at_logical_100: u16) -> Self {
        Self {
            at_logical_0,
            at_logical_100,
        }
    }

    /// Canonical home position (logical 0)
    pub const fn home(&self) -> u16 {
        self.at_logical_0
    }

    /// Signed span from logical 0 to logical 100
    pub const fn span(&self) -> i32 {
        self.at_logical_100 as i32 - self.at_logical_0 as i32
    }

    /// Smallest physical position this actuator is ever commanded to
    pub fn min_physical(&self) -> u16 {
        self.at_logical_0.min(self.at_logical_100)
    }

    /// Largest physical position this actuator is ever commanded to
    pub fn max_physical(&self) -> u16 {
        self.at_logical_0.max(self.at_logical_100)
    }
}
