//! Logical to physical mapping
//!
//! Choreographies are authored on an actuator-agnostic 0..=100 scale for both
//! position and speed. This module turns them into a physical target and a
//! per-step delay for one actuator.

use crate::config::{ActuatorCalibration, TimingConfig};

/// Upper end of the logical position and speed scales
pub const LOGICAL_MAX: u8 = 100;

/// Logical speed of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// Jump straight to the target, no interpolation
    Instant,
    /// Stepped move, 100 = fastest, 0 = slowest
    Percent(u8),
}

impl Speed {
    /// Decode an authored speed, where any negative value means instant
    pub const fn from_authored(raw: i8) -> Self {
        if raw < 0 {
            Speed::Instant
        } else {
            Speed::Percent(raw as u8)
        }
    }

    /// Check if this speed skips interpolation
    pub const fn is_instant(&self) -> bool {
        matches!(self, Speed::Instant)
    }
}

/// How the actuator driver paces a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pacing {
    /// Single jump, no delay
    Instant,
    /// One physical unit per `step_ms`
    Stepped {
        /// Delay after each unit step
        step_ms: u32,
    },
}

impl Pacing {
    /// Time a move of `distance` physical units takes
    pub const fn duration_ms(&self, distance: u32) -> u32 {
        match self {
            Pacing::Instant => 0,
            Pacing::Stepped { step_ms } => step_ms.saturating_mul(distance),
        }
    }
}

/// Integer division rounding half away from zero (`denominator > 0`)
fn div_round(numerator: i32, denominator: i32) -> i32 {
    if numerator >= 0 {
        (numerator + denominator / 2) / denominator
    } else {
        (numerator - denominator / 2) / denominator
    }
}

/// Map a logical position onto an actuator's calibrated range
///
/// Logical values above 100 are clamped. The result is rounded to the
/// nearest physical unit and always lies between the two endpoints.
pub fn map_position(logical: u8, calibration: &ActuatorCalibration) -> u16 {
    let logical = logical.min(LOGICAL_MAX) as i32;
    let offset = div_round(logical * calibration.span(), LOGICAL_MAX as i32);
    (calibration.at_logical_0 as i32 + offset) as u16
}

/// Map a logical speed onto a per-step delay
///
/// The map input is the distance from full speed, so speed 100 gives
/// `fast_step_ms` and speed 0 gives `slow_step_ms`. Speeds above 100 are
/// clamped.
pub fn map_speed_to_step_delay_ms(speed: u8, timing: &TimingConfig) -> u32 {
    let slowness = (LOGICAL_MAX - speed.min(LOGICAL_MAX)) as u64;
    let range = timing.slow_step_ms.saturating_sub(timing.fast_step_ms) as u64;
    let half = LOGICAL_MAX as u64 / 2;
    // At most `range`, so the sum stays within `slow_step_ms`
    let offset = (slowness * range + half) / LOGICAL_MAX as u64;
    timing.fast_step_ms + offset as u32
}

/// Pacing for a logical speed
pub fn pacing_for(speed: Speed, timing: &TimingConfig) -> Pacing {
    match speed {
        Speed::Instant => Pacing::Instant,
        Speed::Percent(percent) => Pacing::Stepped {
            step_ms: map_speed_to_step_delay_ms(percent, timing),
        },
    }
}
