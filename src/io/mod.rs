/// Command-line parsing and script execution
pub mod cli;
/// Line parsing into typed commands
pub mod command;
/// Interpreter constants
pub mod configuration;
/// Error types with line context
pub mod error;
/// Progress display while a script runs
pub mod progress;
/// Command execution and result formatting
pub mod session;
