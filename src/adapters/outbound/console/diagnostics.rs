use crate::ports::outbound::DiagnosticSink;

/// StderrDiagnosticSink adapter for reporting diagnostics to stderr
///
/// This adapter implements the DiagnosticSink port, writing progress and
/// advisory messages to stderr so they never interleave with the SPDX
/// document on stdout.
pub struct StderrDiagnosticSink;

impl StderrDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrDiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for StderrDiagnosticSink {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_does_not_panic() {
        // Can't easily assert on stderr output, but verify it doesn't panic
        let sink = StderrDiagnosticSink::new();
        sink.report("Test message");
        sink.warn("Test warning");
    }

    #[test]
    fn test_sink_default() {
        let sink = StderrDiagnosticSink::default();
        sink.report("Test message");
    }
}
