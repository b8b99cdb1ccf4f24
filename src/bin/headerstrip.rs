use clap::{CommandFactory, Parser};
use headerstrip::config::{CliConfig, Config};
use headerstrip::core::constants::output_formats;
use headerstrip::reporting::logging;
use headerstrip::rewrite::Rewriter;
use headerstrip::ui::completion::print_completions;
use headerstrip::ui::{Cli, Commands, ConsoleReporter, cli_to_config, output};

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_headerstrip_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main rewrite logic extracted from main() for testing
pub fn run_headerstrip_logic(cli: &Cli) -> headerstrip::Result<i32> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;

    let verbose = config.verbose.unwrap_or(false);
    logging::init_logger(verbose, cli_config.quiet);

    let root = config.root();
    logging::log_config_info(&config, &root);

    let options = config.process_options().inspect_err(|e| {
        logging::log_error("Invalid configuration", Some(e));
    })?;

    // JSON output carries the rewritten paths in the summary instead
    let print_notices = !cli_config.quiet && config.output_format() == output_formats::TEXT;
    let mut reporter = ConsoleReporter::stdout(print_notices);

    let summary = Rewriter::new(options)
        .process(&root, &mut reporter)
        .inspect_err(|e| {
            logging::log_error("Run aborted", Some(e));
        })?;

    if summary.has_failures() {
        logging::log_warning(&format!(
            "{} file(s) could not be processed",
            summary.failures.len()
        ));
    }

    output::display_summary(&summary, config.output_format(), cli_config.quiet)?;

    Ok(determine_exit_code(&summary))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> headerstrip::Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Collected per-file failures turn an otherwise finished run into a failure
pub fn determine_exit_code(summary: &headerstrip::RunSummary) -> i32 {
    if summary.has_failures() { 1 } else { 0 }
}
