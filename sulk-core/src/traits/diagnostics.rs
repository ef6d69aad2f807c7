//! Diagnostics sink trait

use crate::state::Diagnostic;

/// Receiver of engine diagnostics
///
/// Entirely optional to correct operation: the firmware logs these and
/// drives the status LED from them.
pub trait DiagnosticsSink {
    /// Record one diagnostic
    fn record(&mut self, diagnostic: Diagnostic);
}

/// Discards everything
impl DiagnosticsSink for () {
    fn record(&mut self, _diagnostic: Diagnostic) {}
}

impl<T: DiagnosticsSink + ?Sized> DiagnosticsSink for &mut T {
    fn record(&mut self, diagnostic: Diagnostic) {
        (**self).record(diagnostic);
    }
}
