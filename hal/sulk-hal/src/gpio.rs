//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Input pin that can suspend the caller until it reads a level
///
/// A wait for the level the pin already reads returns at once. Implementations
/// must not busy-poll: on the RP2040 this is backed by the GPIO level
/// interrupt, and the executor sleeps the core while waiting.
#[allow(async_fn_in_trait)]
pub trait LevelWait: InputPin {
    /// Wait until the pin reads high
    async fn wait_for_high(&mut self);

    /// Wait until the pin reads low
    async fn wait_for_low(&mut self);
}
