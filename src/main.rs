mod adapters;
mod application;
mod cli;
mod ports;
mod sbom_generation;
mod shared;

use adapters::outbound::console::StderrDiagnosticSink;
use adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use adapters::outbound::formatters::SpdxFormatter;
use adapters::outbound::process::BazelCommandRunner;
use application::dto::SbomRequest;
use application::use_cases::GenerateSbomUseCase;
use clap::Parser;
use cli::Args;
use ports::outbound::{OutputPresenter, SbomFormatter};
use shared::Result;
use std::process;

fn main() {
    // The CLI contract is exit code 1 for bad usage, so clap's default
    // exit code 2 is overridden here; --help and --version still exit 0
    let args = Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // Create adapters (Dependency Injection)
    let build_tool_runner = BazelCommandRunner::new(args.bazel);
    let diagnostics = StderrDiagnosticSink::new();

    // Create use case with injected dependencies
    let use_case = GenerateSbomUseCase::new(build_tool_runner, diagnostics);

    let request = SbomRequest::new(args.artifact_name, args.artifact_version, args.target);
    let response = use_case.execute(request)?;

    // Serialize the document
    let formatter = SpdxFormatter::new();
    let formatted_output = formatter.format(&response.document)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(output_path))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}
