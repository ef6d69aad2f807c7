//! GPIO newtypes over embassy-rp pins

use embassy_rp::gpio::{Input, Output};
use sulk_hal::{InputPin, LevelWait, OutputPin};

/// Push-pull output pin
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    /// Wrap a configured output
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Input pin with interrupt-backed level waits
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    /// Wrap a configured input
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&mut self) -> bool {
        self.0.is_high()
    }
}

impl LevelWait for RpInput<'_> {
    async fn wait_for_high(&mut self) {
        self.0.wait_for_high().await;
    }

    async fn wait_for_low(&mut self) {
        self.0.wait_for_low().await;
    }
}
