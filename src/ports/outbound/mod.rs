/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (build tool, console, file system).
pub mod build_tool_runner;
pub mod diagnostic_sink;
pub mod formatter;
pub mod output_presenter;

pub use build_tool_runner::BuildToolRunner;
pub use diagnostic_sink::DiagnosticSink;
pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
