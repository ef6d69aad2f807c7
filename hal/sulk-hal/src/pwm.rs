//! Pulse width output abstraction
//!
//! Hobby servos are positioned by the width of a pulse repeated at a fixed
//! frame rate (typically 50 Hz). Chip HALs configure the PWM slice so that
//! widths can be written directly in microseconds.

/// Servo-style pulse output
pub trait PulseOutput {
    /// Start (or keep) generating pulses of the given width
    fn set_pulse_width_us(&mut self, width_us: u16);

    /// Stop generating pulses; the line idles low
    fn disable(&mut self);

    /// Check if pulses are currently being generated
    fn is_enabled(&self) -> bool;
}
