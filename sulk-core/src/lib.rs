//! Board-agnostic core logic for the Sulk useless-machine firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (actuator output, rail power, wake signal, randomness)
//! - Logical-to-physical position and speed mapping
//! - Stepped actuator driver
//! - Choreography model, catalog and playback
//! - Power state machine (sleep, wake, run, park)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod choreography;
pub mod config;
pub mod motion;
pub mod random;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
