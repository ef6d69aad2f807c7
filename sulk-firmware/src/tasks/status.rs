//! Status task
//!
//! Logs the show task's diagnostics and drives the status LED: on while
//! awake, off while waiting for the switch, double flash after boot.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Timer;

use sulk_core::state::{Diagnostic, PowerState};
use sulk_hal::OutputPin;
use sulk_hal_rp2040::RpOutput;

use crate::channels::{BOOTED, DIAGNOSTIC_CHANNEL};

/// LED flash half-period (ms)
const FLASH_MS: u64 = 200;

/// Log one diagnostic
fn log_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic {
        Diagnostic::StateChanged { from, to } => debug!("State: {:?} -> {:?}", from, to),
        Diagnostic::WaitingForWake => debug!("Sleeping until the switch flips"),
        Diagnostic::AlreadyActive => info!("Switch already on, skipping sleep"),
        Diagnostic::IdleWake => info!("Woken but switch is off, back to sleep"),
        Diagnostic::EmptyLibrary => warn!("No programs to play, parking"),
        Diagnostic::ProgramSelected {
            index,
            name,
            nominal_ms,
        } => info!("SID: {} ({}), about {} ms", index, name, nominal_ms),
        Diagnostic::ProgramFinished {
            index,
            commands_run,
            faults,
        } => info!(
            "Program {} finished: {} commands, {} faults",
            index, commands_run, faults
        ),
        Diagnostic::Fault(kind) => match kind.actuator() {
            Some(id) => warn!("Fault on {}: {:?}", id.name(), kind),
            None => warn!("Fault: {:?}", kind),
        },
    }
}

/// LED level implied by a diagnostic, if it changes it
fn led_level(diagnostic: &Diagnostic) -> Option<bool> {
    match diagnostic {
        Diagnostic::WaitingForWake => Some(false),
        Diagnostic::StateChanged {
            to: PowerState::Waking,
            ..
        } => Some(true),
        Diagnostic::AlreadyActive => Some(true),
        _ => None,
    }
}

/// Status task
#[embassy_executor::task]
pub async fn status_task(mut led: RpOutput<'static>) {
    info!("Status task started");

    // LED stays on through the power-on homing pass
    led.set_high();

    loop {
        match select(BOOTED.wait(), DIAGNOSTIC_CHANNEL.receive()).await {
            Either::First(()) => {
                // Double flash to show a normal boot
                led.set_low();
                Timer::after_millis(FLASH_MS).await;
                led.set_high();
                Timer::after_millis(FLASH_MS).await;
                led.set_low();
                Timer::after_millis(FLASH_MS).await;
                led.set_high();
            }
            Either::Second(diagnostic) => {
                log_diagnostic(&diagnostic);
                if let Some(level) = led_level(&diagnostic) {
                    led.set_state(level);
                }
            }
        }
    }
}
