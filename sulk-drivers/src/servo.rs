//! Hobby servo driver
//!
//! Positions are servo degrees, mapped linearly onto the configured pulse
//! range. Detaching stops the pulse train so the servo goes limp and stops
//! drawing holding current.

use sulk_core::config::ServoConfig;
use sulk_core::traits::{ActuatorOutput, OutputError};
use sulk_hal::PulseOutput;

/// Pulse width for a position in degrees
///
/// Positions beyond the servo's travel are clamped to its end.
pub fn pulse_width_us(degrees: u16, config: &ServoConfig) -> u16 {
    let degrees = degrees.min(config.max_degrees) as u32;
    let max_degrees = config.max_degrees.max(1) as u32;
    let range = config.max_pulse_us.saturating_sub(config.min_pulse_us) as u32;
    let offset = (degrees * range + max_degrees / 2) / max_degrees;
    config.min_pulse_us + offset as u16
}

/// Servo on a pulse output
pub struct PwmServo<P> {
    pwm: P,
    config: ServoConfig,
    attached: bool,
}

impl<P: PulseOutput> PwmServo<P> {
    /// Create a detached servo
    pub fn new(pwm: P, config: ServoConfig) -> Self {
        let mut servo = Self {
            pwm,
            config,
            attached: false,
        };
        // No pulses until attached
        servo.pwm.disable();
        servo
    }

    fn output(&mut self, position: u16) -> Result<(), OutputError> {
        self.pwm
            .set_pulse_width_us(pulse_width_us(position, &self.config));
        if position > self.config.max_degrees {
            Err(OutputError::OutOfRange)
        } else {
            Ok(())
        }
    }
}

impl<P: PulseOutput> ActuatorOutput for PwmServo<P> {
    fn attach(&mut self, position: u16) -> Result<(), OutputError> {
        self.attached = true;
        self.output(position)
    }

    fn write(&mut self, position: u16) -> Result<(), OutputError> {
        if !self.attached {
            return Err(OutputError::Unreachable);
        }
        self.output(position)
    }

    fn detach(&mut self) {
        self.pwm.disable();
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
