//! Actuator motion
//!
//! Logical-to-physical mapping and the stepped actuator driver.

pub mod actuator;
pub mod mapping;

pub use actuator::{ActuatorDriver, ActuatorId, ActuatorState, Actuators};
pub use mapping::{
    map_position, map_speed_to_step_delay_ms, pacing_for, Pacing, Speed, LOGICAL_MAX,
};
