//! Show task
//!
//! Owns the whole machine: both servos, the rail relay and the trigger.
//! Homes once at power-on, then sleeps, wakes and plays forever.

use defmt::*;
use embassy_time::Delay;

use sulk_core::choreography;
use sulk_core::random::Xorshift32;
use sulk_core::state::{Diagnostic, PowerStateMachine};
use sulk_core::traits::DiagnosticsSink;
use sulk_drivers::relay::RelayRail;
use sulk_drivers::servo::PwmServo;
use sulk_drivers::trigger::TriggerInput;
use sulk_hal_rp2040::{RpInput, RpOutput, RpServoPwm};

use crate::channels::{BOOTED, DIAGNOSTIC_CHANNEL};

/// The machine as wired on the board
pub type Machine = PowerStateMachine<
    PwmServo<RpServoPwm<'static>>,
    RelayRail<RpOutput<'static>>,
    TriggerInput<RpInput<'static>>,
    Delay,
>;

/// Forwards diagnostics to the status task
///
/// Never blocks the show: if the status task falls behind, records are
/// dropped.
struct ChannelSink;

impl DiagnosticsSink for ChannelSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        if DIAGNOSTIC_CHANNEL.try_send(diagnostic).is_err() {
            warn!("Diagnostic channel full, dropped {:?}", diagnostic);
        }
    }
}

/// Show task
#[embassy_executor::task]
pub async fn show_task(mut machine: Machine, mut rng: Xorshift32) {
    let library = choreography::library();
    info!("Show task started ({} programs)", library.len());

    let mut sink = ChannelSink;

    machine.boot(&mut sink).await;
    BOOTED.signal(());
    info!("Homed, entering show loop");

    machine.run(&library, &mut rng, &mut sink).await;
}
