//! Toggle switch wake trigger
//!
//! The switch pulls an input with a pull-up to ground, so "someone flipped
//! it" reads low. Waits are on the level, not the edge, so a flip that lands
//! between reading the switch and arming the interrupt still wakes us.

use sulk_core::traits::WakeSignal;
use sulk_hal::LevelWait;

/// Wake signal on a level-waitable input pin
pub struct TriggerInput<P> {
    pin: P,
    active_low: bool,
}

impl<P: LevelWait> TriggerInput<P> {
    /// Create a trigger; `active_low` for a switch to ground with pull-up
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Switch to ground with pull-up
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    async fn wait_for(&mut self, high: bool) {
        if high {
            self.pin.wait_for_high().await;
        } else {
            self.pin.wait_for_low().await;
        }
    }
}

impl<P: LevelWait> WakeSignal for TriggerInput<P> {
    fn is_active(&mut self) -> bool {
        self.pin.is_high() != self.active_low
    }

    async fn wait_for_wake(&mut self) {
        self.wait_for(!self.active_low).await;
    }

    async fn wait_for_release(&mut self) {
        self.wait_for(self.active_low).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use sulk_hal::InputPin;

    /// Pin whose level flips to the awaited one, as if the switch moved
    struct MockPin {
        high: bool,
        waited_high: Option<bool>,
    }

    impl MockPin {
        fn new(high: bool) -> Self {
            Self {
                high,
                waited_high: None,
            }
        }
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> bool {
            self.high
        }
    }

    impl LevelWait for MockPin {
        async fn wait_for_high(&mut self) {
            self.waited_high = Some(true);
            self.high = true;
        }

        async fn wait_for_low(&mut self) {
            self.waited_high = Some(false);
            self.high = false;
        }
    }

    #[test]
    fn test_active_low_levels() {
        let mut trigger = TriggerInput::new_active_low(MockPin::new(true));
        assert!(!trigger.is_active());

        trigger.pin.high = false;
        assert!(trigger.is_active());
    }

    #[test]
    fn test_wake_waits_for_low_level() {
        let mut trigger = TriggerInput::new_active_low(MockPin::new(true));

        block_on(trigger.wait_for_wake());

        assert_eq!(trigger.pin.waited_high, Some(false));
        assert!(trigger.is_active());
    }

    #[test]
    fn test_flip_before_wait_is_not_lost() {
        // Switch read off, then flipped before the wait starts
        let mut trigger = TriggerInput::new_active_low(MockPin::new(true));
        assert!(!trigger.is_active());
        trigger.pin.high = false;

        block_on(trigger.wait_for_wake());

        // A level wait on an already-low pin completes
        assert_eq!(trigger.pin.waited_high, Some(false));
        assert!(trigger.is_active());
    }

    #[test]
    fn test_release_waits_for_inactive_level() {
        let mut trigger = TriggerInput::new_active_low(MockPin::new(false));

        block_on(trigger.wait_for_release());

        assert_eq!(trigger.pin.waited_high, Some(true));
        assert!(!trigger.is_active());
    }

    #[test]
    fn test_active_high_waits_for_high_level() {
        let mut trigger = TriggerInput::new(MockPin::new(false), false);

        block_on(trigger.wait_for_wake());

        assert_eq!(trigger.pin.waited_high, Some(true));
        assert!(trigger.is_active());
    }
}
