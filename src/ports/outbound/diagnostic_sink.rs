/// DiagnosticSink port for routing progress and advisory messages
///
/// This port abstracts the diagnostic stream (e.g., stderr) so that
/// warnings emitted during version/purl derivation can be captured and
/// asserted on in tests instead of going to a bare global stream.
pub trait DiagnosticSink {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports an advisory warning
    ///
    /// Advisory conditions (missing metadata, fallback versions, generic
    /// purls) never abort the run; they are surfaced here and the pipeline
    /// continues.
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn warn(&self, message: &str);
}
