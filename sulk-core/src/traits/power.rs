//! Power rail and wake signal traits

/// Errors reported by the actuator power rail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RailError {
    /// The rail switch did not take the requested state
    SwitchFault,
}

/// Switched power for the actuators
pub trait RailPower {
    /// Power the rail on or off
    fn set_powered(&mut self, on: bool) -> Result<(), RailError>;

    /// Check if the rail is currently powered
    fn is_powered(&self) -> bool;
}

/// External request to run a show
///
/// The signal has an "active" level (someone flipped the switch). Both waits
/// are level waits: they return at once when the signal already reads the
/// awaited level, so a flip between a read and the wait is never lost.
/// Implementations must not poll; the caller expects the processor to sleep
/// for the whole wait.
#[allow(async_fn_in_trait)]
pub trait WakeSignal {
    /// Read the current level
    fn is_active(&mut self) -> bool;

    /// Suspend until the signal is active
    async fn wait_for_wake(&mut self);

    /// Suspend until the signal is inactive
    async fn wait_for_release(&mut self);
}
