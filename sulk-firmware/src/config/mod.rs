//! Machine configuration
//!
//! `machine.toml` is parsed and validated by `build.rs`; the result is
//! compiled in as [`MACHINE_CONFIG`]. Editing the file and rebuilding is the
//! only way to change it.

use sulk_core::config::{ActuatorCalibration, MachineConfig, ServoConfig, TimingConfig};

include!(concat!(env!("OUT_DIR"), "/machine_config.rs"));
