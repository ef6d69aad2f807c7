//! RP2040-specific HAL for the Sulk firmware
//!
//! This crate provides RP2040 implementations of the shared `sulk-hal`
//! traits, plus RP2040-specific functionality:
//!
//! - GPIO output and edge-waiting input newtypes
//! - Servo-rate PWM slice configuration (1 MHz tick, 50 Hz frame)
//! - ADC noise sampling for seeding the random source

#![no_std]

pub mod adc;
pub mod gpio;
pub mod pwm;

pub use gpio::{RpInput, RpOutput};
pub use pwm::RpServoPwm;
