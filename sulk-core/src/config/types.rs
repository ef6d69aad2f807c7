//! Configuration type definitions
//!
//! These types represent the machine configuration: actuator calibrations,
//! servo pulse limits and the timing constants of the show cycle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::calibration::ActuatorCalibration;
use crate::motion::ActuatorId;

/// Step delay at logical speed 100 (ms)
pub const FAST_STEP_MS: u32 = 1;

/// Step delay at logical speed 0 (ms)
pub const SLOW_STEP_MS: u32 = 70;

/// Time for the servo rail to come up after the relay closes (ms)
pub const RAIL_SETTLE_MS: u32 = 50;

/// Time both actuators are held at home before the rail is cut (ms)
pub const PARK_SETTLE_MS: u32 = 1000;

/// Timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Per-step delay at speed 100
    pub fast_step_ms: u32,
    /// Per-step delay at speed 0
    pub slow_step_ms: u32,
    /// Delay after powering the rail, before the first pulse
    pub rail_settle_ms: u32,
    /// Hold at home before detaching and powering down
    pub park_settle_ms: u32,
}

impl TimingConfig {
    /// Timing of the reference build
    pub const DEFAULT: Self = Self {
        fast_step_ms: FAST_STEP_MS,
        slow_step_ms: SLOW_STEP_MS,
        rail_settle_ms: RAIL_SETTLE_MS,
        park_settle_ms: PARK_SETTLE_MS,
    };
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Hobby servo pulse limits
///
/// Physical actuator units are servo degrees, 0..=`max_degrees`, mapped
/// linearly onto `min_pulse_us..=max_pulse_us`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServoConfig {
    /// Pulse width at 0 degrees
    pub min_pulse_us: u16,
    /// Pulse width at `max_degrees`
    pub max_pulse_us: u16,
    /// Mechanical travel in degrees
    pub max_degrees: u16,
}

impl ServoConfig {
    /// Limits used by the common Arduino servo libraries
    pub const DEFAULT: Self = Self {
        min_pulse_us: 544,
        max_pulse_us: 2400,
        max_degrees: 180,
    };
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MachineConfig {
    /// Lid servo
    pub door: ActuatorCalibration,
    /// Switch arm servo
    pub arm: ActuatorCalibration,
    /// Servo pulse limits (shared by both servos)
    #[cfg_attr(feature = "serde", serde(default))]
    pub servo: ServoConfig,
    /// Show timing
    #[cfg_attr(feature = "serde", serde(default))]
    pub timing: TimingConfig,
}

impl MachineConfig {
    /// Configuration of the reference build
    pub const DEFAULT: Self = Self {
        door: ActuatorCalibration::DOOR,
        arm: ActuatorCalibration::ARM,
        servo: ServoConfig::DEFAULT,
        timing: TimingConfig::DEFAULT,
    };

    /// Calibration for an actuator
    pub fn calibration(&self, id: ActuatorId) -> &ActuatorCalibration {
        match id {
            ActuatorId::Door => &self.door,
            ActuatorId::Arm => &self.arm,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for id in ActuatorId::ALL {
            let cal = self.calibration(id);
            if cal.at_logical_0 == cal.at_logical_100 {
                return Err(ConfigError::DegenerateCalibration(id));
            }
            if cal.max_physical() > self.servo.max_degrees {
                return Err(ConfigError::CalibrationOutOfRange(id));
            }
        }

        if self.servo.max_degrees == 0 || self.servo.min_pulse_us >= self.servo.max_pulse_us {
            return Err(ConfigError::InvalidServoRange);
        }

        if self.timing.fast_step_ms == 0 || self.timing.fast_step_ms > self.timing.slow_step_ms {
            return Err(ConfigError::InvalidStepTiming);
        }

        Ok(())
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Both calibration endpoints are the same position
    DegenerateCalibration(ActuatorId),
    /// Calibration endpoint beyond the servo's travel
    CalibrationOutOfRange(ActuatorId),
    /// Servo pulse limits are empty or inverted
    InvalidServoRange,
    /// Fast step delay is zero or slower than the slow step delay
    InvalidStepTiming,
}

/// Longest prefix of `line` holding at most `max_chars` characters
///
/// Used to fit configuration error text into a fixed-width report; the
/// text may echo non-ASCII source, so this never splits a character.
pub fn clip_line(line: &str, max_chars: usize) -> &str {
    match line.char_indices().nth(max_chars) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}
