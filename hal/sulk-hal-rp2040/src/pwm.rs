//! Servo-rate PWM on an RP2040 slice
//!
//! With the default 125 MHz system clock, a divider of 125 gives a 1 MHz
//! counter, so compare values are pulse widths in microseconds and a top
//! of 19_999 gives a 20 ms (50 Hz) frame.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::types::U12F4;
use sulk_hal::PulseOutput;

/// System clock divider for a 1 MHz counter
pub const SERVO_DIVIDER: u16 = 125;

/// Counter top for a 20 ms frame at 1 MHz
pub const SERVO_TOP: u16 = 19_999;

/// Slice configuration for servo pulses, output idle
pub fn servo_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.divider = U12F4::from_num(SERVO_DIVIDER);
    config.top = SERVO_TOP;
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

/// Compare value for a pulse width, limited to one frame
pub fn compare_for(width_us: u16) -> u16 {
    width_us.min(SERVO_TOP)
}

/// Servo pulse output on channel A of a PWM slice
pub struct RpServoPwm<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> RpServoPwm<'d> {
    /// Take over a slice created with [`servo_config`]
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let config = servo_config();
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl PulseOutput for RpServoPwm<'_> {
    fn set_pulse_width_us(&mut self, width_us: u16) {
        self.config.compare_a = compare_for(width_us);
        self.pwm.set_config(&self.config);
    }

    fn disable(&mut self) {
        // Zero compare holds the line low
        self.config.compare_a = 0;
        self.pwm.set_config(&self.config);
    }

    fn is_enabled(&self) -> bool {
        self.config.compare_a != 0
    }
}
