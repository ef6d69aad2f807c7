//! Hardware capability traits
//!
//! These traits define the interface between the choreography engine and
//! the drivers that move real hardware. Delays use
//! [`embedded_hal_async::delay::DelayNs`].

pub mod actuator;
pub mod diagnostics;
pub mod power;
pub mod random;

pub use actuator::{ActuatorOutput, OutputError};
pub use diagnostics::DiagnosticsSink;
pub use power::{RailError, RailPower, WakeSignal};
pub use random::RandomSource;
