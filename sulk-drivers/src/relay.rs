//! Relay-switched servo rail
//!
//! The servos draw from their own supply through a relay (or MOSFET) on a
//! GPIO pin, so they can be cut completely while the machine sleeps.

use sulk_core::traits::{RailError, RailPower};
use sulk_hal::OutputPin;

/// Servo rail behind a relay
///
/// The pin can be configured as active-high (default) or active-low.
pub struct RelayRail<P> {
    pin: P,
    /// If true, rail ON = pin LOW
    inverted: bool,
    /// Current logical state (true = rail powered)
    powered: bool,
    /// Outcome of switching the rail off at construction
    startup: Result<(), RailError>,
}

impl<P: OutputPin> RelayRail<P> {
    /// Create a new relay rail, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin driving the relay
    /// - `inverted`: If true, the rail is powered when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut rail = Self {
            pin,
            inverted,
            powered: false,
            startup: Ok(()),
        };
        // Ensure the rail starts off
        rail.startup = rail.set_powered(false);
        rail
    }

    /// Fault seen while switching the rail off at construction, if any
    pub fn startup_fault(&self) -> Option<RailError> {
        self.startup.err()
    }

    /// Create a relay rail with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a relay rail with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> RailPower for RelayRail<P> {
    fn set_powered(&mut self, on: bool) -> Result<(), RailError> {
        self.powered = on;

        // Normal: on=true, inverted=false → high
        // Inverted: on=true, inverted=true → low
        let high = on != self.inverted;
        self.pin.set_state(high);

        if self.pin.is_set_high() == high {
            Ok(())
        } else {
            Err(RailError::SwitchFault)
        }
    }

    fn is_powered(&self) -> bool {
        self.powered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        stuck: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                stuck: false,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.stuck {
                self.high = true;
            }
        }

        fn set_low(&mut self) {
            if !self.stuck {
                self.high = false;
            }
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_rail() {
        let mut rail = RelayRail::new_active_high(MockPin::new());

        // Initially off
        assert!(!rail.is_powered());
        assert!(!rail.pin.is_set_high());
        assert_eq!(rail.startup_fault(), None);

        rail.set_powered(true).unwrap();
        assert!(rail.is_powered());
        assert!(rail.pin.is_set_high());

        rail.set_powered(false).unwrap();
        assert!(!rail.is_powered());
        assert!(!rail.pin.is_set_high());
    }

    #[test]
    fn test_active_low_rail() {
        let mut rail = RelayRail::new_active_low(MockPin::new());

        // Initially off (pin is high for active-low)
        assert!(!rail.is_powered());
        assert!(rail.pin.is_set_high());

        rail.set_powered(true).unwrap();
        assert!(!rail.pin.is_set_high());
    }

    #[test]
    fn test_stuck_pin_reports_fault() {
        let mut rail = RelayRail::new_active_high(MockPin::new());
        rail.pin.stuck = true;

        assert_eq!(rail.set_powered(true), Err(RailError::SwitchFault));
    }

    #[test]
    fn test_relay_stuck_on_at_startup_is_reported() {
        let rail = RelayRail::new_active_high(MockPin {
            high: true,
            stuck: true,
        });

        assert_eq!(rail.startup_fault(), Some(RailError::SwitchFault));
        assert!(!rail.is_powered());
    }
}
