/// Outbound adapters - concrete implementations of the outbound ports
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod process;
