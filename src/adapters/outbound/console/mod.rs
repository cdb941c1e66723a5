/// Console adapters for diagnostic output
mod diagnostics;

pub use diagnostics::StderrDiagnosticSink;
