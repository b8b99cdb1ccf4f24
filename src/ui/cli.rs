// Command-line interface definitions and parsing for headerstrip

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to walk (default: config file value, then src/app/pages)
    pub root: Option<PathBuf>,

    // Matching
    /// File-name suffix of files to rewrite (default: .html)
    #[arg(short = 'e', long, value_name = "SUFFIX", help_heading = "Matching")]
    pub extension: Option<String>,

    /// Removal pattern (regex), repeatable; replaces the default header patterns
    #[arg(short = 'p', long = "pattern", value_name = "REGEX", help_heading = "Matching")]
    pub patterns: Vec<String>,

    /// Descend into symlinked directories while walking
    #[arg(long, help_heading = "Matching")]
    pub follow_links: bool,

    // Error Handling
    /// Keep going past unreadable or unwritable files and report them at the end
    #[arg(long, help_heading = "Error Handling")]
    pub keep_going: bool,

    // Output & Verbosity
    /// Suppress per-file notices and the summary
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration", conflicts_with = "config")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        root: cli.root.clone(),
        extension: cli.extension.clone(),
        patterns: (!cli.patterns.is_empty()).then(|| cli.patterns.clone()),
        keep_going: cli.keep_going,
        follow_links: cli.follow_links,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
