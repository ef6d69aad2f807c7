//! Sulk Hardware Abstraction Layer
//!
//! This crate defines the low-level hardware traits the Sulk drivers are
//! written against. Chip-specific HALs implement them, so the drivers and the
//! choreography engine never touch a register.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (sulk-firmware)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sulk-drivers (servo, relay, trigger)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sulk-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ sulk-hal-     │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::LevelWait`] - Suspend until a pin level
//! - [`pwm::PulseOutput`] - Servo-style pulse width output

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, LevelWait, OutputPin};
pub use pwm::PulseOutput;
