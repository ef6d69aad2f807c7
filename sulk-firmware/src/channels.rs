//! Inter-task communication channels
//!
//! Defines the static channels used between the show task and the status
//! task. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use sulk_core::state::Diagnostic;

/// Channel capacity for lifecycle diagnostics
const DIAGNOSTIC_CHANNEL_SIZE: usize = 16;

/// Lifecycle diagnostics from the show task (for logging and the LED)
pub static DIAGNOSTIC_CHANNEL: Channel<
    CriticalSectionRawMutex,
    Diagnostic,
    DIAGNOSTIC_CHANNEL_SIZE,
> = Channel::new();

/// Signal that the power-on homing pass finished
pub static BOOTED: Signal<CriticalSectionRawMutex, ()> = Signal::new();
