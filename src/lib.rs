/// Handles argument parsing and wires the terminal to the setup sequence.
pub mod cli;

/// Package and feature tables.
pub mod catalog;

/// Fire-and-forget shell command submission.
pub mod command;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// The finishing step of setup.
pub mod finisher;

/// User input and interaction handling.
pub mod prompt;

/// The setup conversation state machine.
pub mod setup;

/// Token replacement in project files.
pub mod substitution;

/// Common types.
pub mod types;
