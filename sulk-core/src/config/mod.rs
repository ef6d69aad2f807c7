//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware bakes a validated
//! instance in at build time from `machine.toml`.

pub mod calibration;
pub mod types;

pub use calibration::*;
pub use types::*;
