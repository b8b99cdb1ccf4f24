//! User interface
//!
//! This module contains CLI parsing, console output and shell
//! completion generation.

pub mod cli;
pub mod completion;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_config};
pub use completion::print_completions;
pub use output::ConsoleReporter;
