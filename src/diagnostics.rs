/// Receives the warnings emitted while converting a graph.
///
/// Passed to the converters so that drivers decide where warnings go. [LogDiagnostics] forwards
/// them to the `log` facade.
pub trait Diagnostics {
    /// Reports a conversion warning about `node`.
    fn warn(&self, node: &str, message: &str);
}

/// Forwards warnings to [log::warn].
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, node: &str, message: &str) {
        log::warn!(target: "burn_onnx_pad::padding", "{node}: {message}");
    }
}
