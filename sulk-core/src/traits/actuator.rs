//! Actuator output trait

/// Errors reported by an actuator output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// The output did not accept the command
    Unreachable,
    /// Position beyond the output's travel; the output clamped it
    OutOfRange,
}

/// Physical output of one actuator
///
/// Positions are raw physical units. A written position is held until the
/// next write or until the output is detached.
pub trait ActuatorOutput {
    /// Connect the control signal, holding `position`
    fn attach(&mut self, position: u16) -> Result<(), OutputError>;

    /// Command a new position
    fn write(&mut self, position: u16) -> Result<(), OutputError>;

    /// Disconnect the control signal; the actuator goes electrically idle
    fn detach(&mut self);

    /// Check if the control signal is connected
    fn is_attached(&self) -> bool;
}
